//! Input handling for the tabs controller.
//!
//! A consumed event does not reappear in the output stream, which is
//! how suppressing the native action (fragment navigation, viewport
//! scrolling) is expressed in this model.

use webdom::element::Element;
use webdom::event::{Event, Key};
use webdom::focus::FocusState;

use super::Tabs;

impl Tabs {
    /// Process input events against the enhanced document.
    ///
    /// Clicks on a tab activate its item; Left/Right arrows on any tab
    /// move the selection to the adjacent item (no wraparound at either
    /// end); Down moves input focus into the current panel without
    /// changing the selection. Everything else, and everything arriving
    /// before `init` has wired the controller, passes through unchanged.
    /// Focus moves are reported as `Focus` events in the output.
    pub fn process_events(
        &mut self,
        events: &[Event],
        root: &mut Element,
        focus: &mut FocusState,
    ) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if !self.wired {
                output.push(event.clone());
                continue;
            }

            match event {
                Event::Click {
                    target: Some(target),
                } => match self.tab_position(target) {
                    Some(index) => {
                        // Suppress the native jump to the fragment and
                        // activate the clicked item instead.
                        if let Some(focused) = self.switch_to(index, root, focus) {
                            output.push(Event::Focus { target: focused });
                        }
                    }
                    None => output.push(event.clone()),
                },

                Event::Key {
                    target: Some(target),
                    key,
                    ..
                } if self.tab_position(target).is_some() => {
                    match self.handle_tab_key(*key, root, focus) {
                        TabKeyResult::Consumed(Some(focused)) => {
                            output.push(Event::Focus { target: focused });
                        }
                        TabKeyResult::Consumed(None) => {}
                        TabKeyResult::Ignored => output.push(event.clone()),
                    }
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Handle a key press that arrived on one of the tabs.
    ///
    /// Navigation always operates on the current selection, not on the
    /// tab the event landed on.
    fn handle_tab_key(
        &mut self,
        key: Key,
        root: &mut Element,
        focus: &mut FocusState,
    ) -> TabKeyResult {
        match key {
            // At the first item Left is consumed but does nothing; the
            // selection does not wrap around.
            Key::Left => {
                if self.selected > 0 {
                    TabKeyResult::Consumed(self.switch_to(self.selected - 1, root, focus))
                } else {
                    TabKeyResult::Consumed(None)
                }
            }

            Key::Right => {
                if self.selected + 1 < self.items.len() {
                    TabKeyResult::Consumed(self.switch_to(self.selected + 1, root, focus))
                } else {
                    TabKeyResult::Consumed(None)
                }
            }

            // Descend into the current panel without changing the
            // selection.
            Key::Down => match self.items.get(self.selected) {
                Some(item) => {
                    let panel = item.panel.clone();
                    let moved = focus.focus(&panel);
                    TabKeyResult::Consumed(moved.then_some(panel))
                }
                None => TabKeyResult::Consumed(None),
            },

            _ => TabKeyResult::Ignored,
        }
    }
}

/// Result of handling a key on a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TabKeyResult {
    /// The key was claimed; carries the id that received focus, if any.
    Consumed(Option<String>),
    /// Not a tabs key, should be passed through.
    Ignored,
}
