use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};

/// Tracks which element is currently focused and processes key input.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element id.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by id.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        log::debug!("[focus] moving focus from {:?} to {}", self.focused, id);
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next element in the document's tab sequence (Tab key).
    /// Returns the newly focused element id if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let sequence = tab_sequence(root);
        if sequence.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => sequence[0].clone(),
            Some(current) => {
                let idx = sequence.iter().position(|id| id == current);
                match idx {
                    Some(i) => sequence[(i + 1) % sequence.len()].clone(),
                    None => sequence[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous element in the tab sequence (Shift+Tab).
    /// Returns the newly focused element id if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let sequence = tab_sequence(root);
        if sequence.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => sequence[sequence.len() - 1].clone(),
            Some(current) => {
                let idx = sequence.iter().position(|id| id == current);
                match idx {
                    Some(0) => sequence[sequence.len() - 1].clone(),
                    Some(i) => sequence[i - 1].clone(),
                    None => sequence[sequence.len() - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process a raw key press and produce high-level events.
    ///
    /// Tab and Shift+Tab walk the document's tab sequence and yield
    /// `Blur`/`Focus` pairs; Escape blurs; every other key is targeted
    /// at the focused element for widget layers to consume.
    pub fn process_key(&mut self, key: Key, modifiers: Modifiers, root: &Element) -> Vec<Event> {
        let mut events = Vec::new();

        if key == Key::Tab {
            if let Some(old) = self.focused.clone() {
                if let Some(new) = self.focus_next(root) {
                    events.push(Event::Blur { target: old });
                    events.push(Event::Focus { target: new });
                }
            } else if let Some(new) = self.focus_next(root) {
                events.push(Event::Focus { target: new });
            }
            return events;
        }

        if key == Key::BackTab {
            if let Some(old) = self.focused.clone() {
                if let Some(new) = self.focus_prev(root) {
                    events.push(Event::Blur { target: old });
                    events.push(Event::Focus { target: new });
                }
            } else if let Some(new) = self.focus_prev(root) {
                events.push(Event::Focus { target: new });
            }
            return events;
        }

        // Escape blurs the focused element; only emits a key event if
        // nothing was focused.
        if key == Key::Escape {
            if let Some(old) = self.focused.take() {
                events.push(Event::Blur { target: old });
                return events;
            }
        }

        events.push(Event::Key {
            target: self.focused.clone(),
            key,
            modifiers,
        });

        events
    }
}

/// Collect the ids of elements reachable by sequential keyboard
/// navigation, in document order.
///
/// An element is part of the tab sequence when it is not inside a hidden
/// subtree and either carries a non-negative `tabindex` or is natively
/// focusable (an anchor with an `href`) without `tabindex="-1"`. This is
/// what makes the roving-tabindex pattern observable: members parked at
/// `tabindex="-1"` drop out of the sequence.
pub fn tab_sequence(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_sequence(root, &mut result);
    result
}

fn collect_sequence(element: &Element, result: &mut Vec<String>) {
    if element.hidden {
        return;
    }
    if in_tab_sequence(element) {
        if let Some(id) = &element.id {
            result.push(id.clone());
        }
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_sequence(child, result);
        }
    }
}

fn in_tab_sequence(element: &Element) -> bool {
    match element.tab_index() {
        Some(index) => index >= 0,
        None => element.tag == "a" && element.has_attr("href"),
    }
}
