pub mod document;
pub mod element;
pub mod event;

pub use document::{Document, Listener, StyleElement, WeakDocument};
pub use element::Element;
pub use event::{Event, EventType, KeyEvent, MouseButton, PointerEvent};
