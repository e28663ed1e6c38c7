pub mod element;
pub mod event;
pub mod focus;

pub use element::{find_element, find_element_mut, resolve_fragment, Content, Element};
pub use event::{Event, Key, Modifiers};
pub use focus::{tab_sequence, FocusState};
