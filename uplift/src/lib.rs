//! Progressive-enhancement widgets over a [`webdom`] document tree.
//!
//! Each widget starts from plain, working markup and layers the
//! accessibility semantics and input behavior on top, leaving the
//! document usable when the widget never runs.

pub mod tabs;

pub use tabs::{TabItem, Tabs};
