use std::collections::HashMap;

use super::Content;

/// A node in the document tree: a lowercase tag name, an optional id,
/// a flat attribute map, and either text or child elements.
///
/// Ids are never generated. An element without an id is ordinary markup;
/// widgets that need to address such an element assign one during
/// enhancement.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub attrs: HashMap<String, String>,
    /// The `hidden` content attribute: the element and its subtree are
    /// not rendered and not reachable by sequential focus navigation.
    pub hidden: bool,
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: None,
            attrs: HashMap::new(),
            hidden: false,
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// An unordered list (`ul`), the expected tab container.
    pub fn list() -> Self {
        Self::new("ul")
    }

    /// A list entry (`li`).
    pub fn list_item() -> Self {
        Self::new("li")
    }

    /// An anchor (`a`) with the given link target.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    /// A content section (`section`), the expected panel element.
    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new("h2").text(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("p").text(text)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.remove(name);
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// The parsed `tabindex` attribute. None when absent or unparseable.
    pub fn tab_index(&self) -> Option<i32> {
        self.get_attr("tabindex").and_then(|v| v.parse().ok())
    }

    // State
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None => {}
    }
}
