mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by id in the tree. First match in document order wins,
/// as with duplicate ids in a browser document.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Mutable variant of [`find_element`].
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Resolve a same-document fragment reference (`#name`) to its element.
/// Returns None for anything that is not a fragment, for the bare `#`,
/// and for fragments that match no element.
pub fn resolve_fragment<'a>(root: &'a Element, href: &str) -> Option<&'a Element> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    find_element(root, id)
}
