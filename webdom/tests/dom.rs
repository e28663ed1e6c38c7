use webdom::{find_element, find_element_mut, resolve_fragment, Element};

fn sample_tree() -> Element {
    Element::new("body").children([
        Element::list().id("menu").child(
            Element::list_item().child(Element::anchor("#section1").text("Section 1")),
        ),
        Element::section()
            .id("section1")
            .child(Element::heading("Section 1"))
            .child(Element::paragraph("Lorem ipsum dolor sit amet.")),
    ])
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_nested() {
    let root = sample_tree();

    assert!(find_element(&root, "menu").is_some());
    assert_eq!(
        find_element(&root, "section1").map(|el| el.tag.as_str()),
        Some("section")
    );
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_first_match_wins() {
    let root = Element::new("body")
        .child(Element::section().id("dup").attr("data-pos", "first"))
        .child(Element::section().id("dup").attr("data-pos", "second"));

    let found = find_element(&root, "dup").unwrap();
    assert_eq!(found.get_attr("data-pos"), Some("first"));
}

#[test]
fn test_find_element_mut_allows_mutation() {
    let mut root = sample_tree();

    let section = find_element_mut(&mut root, "section1").unwrap();
    section.set_attr("role", "tabpanel");
    section.hidden = true;

    let section = find_element(&root, "section1").unwrap();
    assert_eq!(section.get_attr("role"), Some("tabpanel"));
    assert!(section.hidden);
}

// ============================================================================
// Fragment Resolution
// ============================================================================

#[test]
fn test_resolve_fragment() {
    let root = sample_tree();

    assert_eq!(
        resolve_fragment(&root, "#section1").and_then(|el| el.id.clone()),
        Some("section1".to_string())
    );
    assert!(resolve_fragment(&root, "#nope").is_none());
}

#[test]
fn test_resolve_fragment_rejects_non_fragments() {
    let root = sample_tree();

    // Not a same-document reference.
    assert!(resolve_fragment(&root, "section1").is_none());
    assert!(resolve_fragment(&root, "https://example.com/#section1").is_none());
    // Bare hash.
    assert!(resolve_fragment(&root, "#").is_none());
}

// ============================================================================
// Attributes
// ============================================================================

#[test]
fn test_attribute_access() {
    let mut el = Element::anchor("#section1");

    assert_eq!(el.get_attr("href"), Some("#section1"));
    assert!(el.has_attr("href"));
    assert!(!el.has_attr("role"));

    el.set_attr("role", "tab");
    assert_eq!(el.get_attr("role"), Some("tab"));

    el.remove_attr("role");
    assert!(!el.has_attr("role"));
}

#[test]
fn test_tab_index_parsing() {
    assert_eq!(Element::anchor("#a").attr("tabindex", "0").tab_index(), Some(0));
    assert_eq!(
        Element::anchor("#a").attr("tabindex", "-1").tab_index(),
        Some(-1)
    );
    assert_eq!(Element::anchor("#a").attr("tabindex", "x").tab_index(), None);
    assert_eq!(Element::anchor("#a").tab_index(), None);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_content_concatenates_descendants() {
    let root = sample_tree();
    let section = find_element(&root, "section1").unwrap();

    assert_eq!(
        section.text_content(),
        "Section 1Lorem ipsum dolor sit amet."
    );
}

#[test]
fn test_ids_are_never_generated() {
    let el = Element::list_item();
    assert_eq!(el.id, None);
}
