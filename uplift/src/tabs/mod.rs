//! Tabbed interface enhancement following the ARIA tabs pattern.
//!
//! Takes a plain list of in-page links (`ul > li > a[href="#..."]`) with
//! matching content sections and turns it into an accessible tabbed
//! interface: `tablist`/`tab`/`tabpanel` roles, a roving tabindex over
//! the tabs, and exactly one visible panel at a time.

mod events;

use webdom::element::{find_element, find_element_mut, resolve_fragment, Content, Element};
use webdom::focus::FocusState;

/// One tab/panel pair, addressed by element id.
///
/// The tab id is the anchor's own id when it has one, otherwise the
/// derived `<panelId>-tab` that enhancement writes onto the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub tab: String,
    pub panel: String,
}

/// Controller for one tabbed interface.
///
/// Constructed with the id of the list element to enhance; all behavior
/// is driven by [`init`](Tabs::init) and by the events passed through
/// [`process_events`](Tabs::process_events) afterwards.
#[derive(Debug)]
pub struct Tabs {
    container: String,
    items: Vec<TabItem>,
    selected: usize,
    wired: bool,
}

impl Tabs {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            items: Vec::new(),
            selected: 0,
            wired: false,
        }
    }

    /// The discovered tab/panel pairs, in document order.
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// The currently selected pair, if any were discovered.
    pub fn current(&self) -> Option<&TabItem> {
        self.items.get(self.selected)
    }

    /// Enhance the document: discover tab/panel pairs under the
    /// container, apply roles and initial state, and start claiming
    /// input events addressed to the tabs.
    ///
    /// When the container id does not resolve to a list element (`ul`),
    /// a single warning is logged and the document is left untouched;
    /// the markup keeps its native link behavior. Calling `init` again
    /// on an already-wired controller is a warned no-op.
    pub fn init(&mut self, root: &mut Element) {
        if self.wired {
            log::warn!(
                "Tabs for '{}' already initialized; ignoring repeated init",
                self.container
            );
            return;
        }

        let is_list = find_element(root, &self.container)
            .map(|el| el.tag == "ul")
            .unwrap_or(false);
        if !is_list {
            log::warn!("Unable to enhance tabs. No list element (<ul>) specified.");
            return;
        }

        self.populate_items(root);
        self.add_element_semantics(root);
        self.attach_event_listeners();
    }

    /// Build the ordered item collection from the container's anchors.
    ///
    /// Anchors whose link target is not a fragment, or whose fragment
    /// matches no element, yield no item.
    fn populate_items(&mut self, root: &Element) {
        let container = match find_element(root, &self.container) {
            Some(container) => container,
            None => return,
        };

        for anchor in collect_anchors(container) {
            let Some(href) = anchor.get_attr("href") else {
                log::warn!("Skipping tab without a link target");
                continue;
            };
            let Some(panel) = resolve_fragment(root, href) else {
                log::warn!("Skipping tab '{href}': no matching panel element");
                continue;
            };
            let Some(panel_id) = panel.id.clone() else {
                continue;
            };
            let tab = anchor
                .id
                .clone()
                .unwrap_or_else(|| format!("{panel_id}-tab"));
            self.items.push(TabItem {
                tab,
                panel: panel_id,
            });
        }
    }

    /// Apply roles, identifiers, and initial selection state.
    fn add_element_semantics(&self, root: &mut Element) {
        if let Some(container) = find_element_mut(root, &self.container) {
            container.set_attr("role", "tablist");
            if let Content::Children(children) = &mut container.content {
                for child in children {
                    if child.tag == "a" {
                        self.enhance_anchor(child);
                    } else {
                        self.enhance_list_entry(child);
                    }
                }
            }
        }

        for (index, item) in self.items.iter().enumerate() {
            if let Some(panel) = find_element_mut(root, &item.panel) {
                panel.set_attr("role", "tabpanel");
                panel.set_attr("tabindex", "-1");
                panel.set_attr("aria-labelledby", item.tab.clone());
                panel.hidden = index != 0;
            }
        }
    }

    /// Enhance the anchors below a list entry and suppress the entry's
    /// own list semantics once it is known to wrap a tab.
    fn enhance_list_entry(&self, element: &mut Element) {
        let mut wraps_tab = false;
        if let Content::Children(children) = &mut element.content {
            for child in children {
                if child.tag == "a" {
                    wraps_tab = self.enhance_anchor(child) || wraps_tab;
                } else {
                    self.enhance_list_entry(child);
                }
            }
        }
        if wraps_tab {
            element.set_attr("role", "presentation");
        }
    }

    /// Apply tab semantics to one anchor. Returns false for anchors that
    /// were skipped during discovery.
    fn enhance_anchor(&self, anchor: &mut Element) -> bool {
        let Some(index) = self.discovered_index(anchor) else {
            return false;
        };
        let item = &self.items[index];

        anchor.set_attr("role", "tab");
        anchor.set_attr("tabindex", if index == 0 { "0" } else { "-1" });
        anchor.set_attr("aria-selected", if index == 0 { "true" } else { "false" });
        if anchor.id.is_none() {
            anchor.id = Some(item.tab.clone());
        }
        true
    }

    /// Match an anchor back to its discovered item via its link target.
    fn discovered_index(&self, anchor: &Element) -> Option<usize> {
        let href = anchor.get_attr("href")?;
        let panel = href.strip_prefix('#')?;
        self.items.iter().position(|item| item.panel == panel)
    }

    /// Start claiming click and key events addressed to the tabs.
    /// Until this runs, `process_events` passes everything through.
    fn attach_event_listeners(&mut self) {
        self.wired = true;
    }

    /// Position of an element id within the tab collection.
    fn tab_position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.tab == id)
    }

    /// Make the item at `index` the selection: re-derive selected state,
    /// roving tabindex, and panel visibility over the full collection,
    /// then move input focus to the item's tab. Returns the tab id when
    /// focus actually moved.
    ///
    /// Always a full pass, never a diff against the previous selection,
    /// so the operation is idempotent and self-correcting.
    fn switch_to(
        &mut self,
        index: usize,
        root: &mut Element,
        focus: &mut FocusState,
    ) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }

        for (i, item) in self.items.iter().enumerate() {
            let selected = i == index;
            if let Some(tab) = find_element_mut(root, &item.tab) {
                tab.set_attr("aria-selected", if selected { "true" } else { "false" });
                tab.set_attr("tabindex", if selected { "0" } else { "-1" });
            }
            if let Some(panel) = find_element_mut(root, &item.panel) {
                panel.hidden = !selected;
            }
        }

        let tab = self.items[index].tab.clone();
        let moved = focus.focus(&tab);
        self.selected = index;
        log::debug!("[tabs] switched to '{tab}'");

        moved.then_some(tab)
    }
}

/// All anchors in the container subtree, in document order.
fn collect_anchors(container: &Element) -> Vec<&Element> {
    let mut anchors = Vec::new();
    collect_anchors_into(container, &mut anchors);
    anchors
}

fn collect_anchors_into<'a>(element: &'a Element, anchors: &mut Vec<&'a Element>) {
    if let Content::Children(children) = &element.content {
        for child in children {
            if child.tag == "a" {
                anchors.push(child);
            } else {
                collect_anchors_into(child, anchors);
            }
        }
    }
}
