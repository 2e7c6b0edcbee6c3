use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::event::{Event, EventType};

/// A global event handler. Registered and removed by `Rc` pointer identity,
/// so callers must keep the same `Rc` they registered with.
pub type Listener = Rc<dyn Fn(&Event)>;

/// The document-wide event target and style sink.
///
/// Owns the global listener table, the injected style elements, and the body
/// cursor affordance. Clonable handle; single-threaded interior mutability.
#[derive(Clone)]
pub struct Document {
    inner: Rc<Inner>,
}

struct Inner {
    listeners: RefCell<HashMap<EventType, Vec<Listener>>>,
    styles: RefCell<Vec<StyleElement>>,
    next_style_id: Cell<u64>,
    body_cursor: RefCell<Option<String>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                listeners: RefCell::new(HashMap::new()),
                styles: RefCell::new(Vec::new()),
                next_style_id: Cell::new(0),
                body_cursor: RefCell::new(None),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakDocument {
        WeakDocument {
            inner: Rc::downgrade(&self.inner),
        }
    }

    // ========================================================================
    // Event listeners
    // ========================================================================

    /// Register `listener` for `event_type`. Listeners fire in registration
    /// order. The same `Rc` may be registered for several event types.
    pub fn add_event_listener(&self, event_type: EventType, listener: &Listener) {
        self.inner
            .listeners
            .borrow_mut()
            .entry(event_type)
            .or_default()
            .push(Rc::clone(listener));
        log::trace!("[document] listener added for {}", event_type.name());
    }

    /// Remove the registration matching `listener` by pointer identity.
    /// No-op when the listener was never registered for this type.
    pub fn remove_event_listener(&self, event_type: EventType, listener: &Listener) {
        if let Some(registered) = self.inner.listeners.borrow_mut().get_mut(&event_type) {
            registered.retain(|existing| !Rc::ptr_eq(existing, listener));
        }
        log::trace!("[document] listener removed for {}", event_type.name());
    }

    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.inner
            .listeners
            .borrow()
            .get(&event_type)
            .map_or(0, Vec::len)
    }

    /// Synchronously invoke every listener registered for the event's type,
    /// in registration order. The listener list is snapshotted first, so a
    /// listener may remove itself (or others) without aliasing a live borrow.
    pub fn dispatch(&self, event: &Event) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .get(&event.event_type())
            .cloned()
            .unwrap_or_default();
        for listener in snapshot {
            listener(event);
        }
    }

    // ========================================================================
    // Injected styles
    // ========================================================================

    pub fn create_style_element(&self) -> StyleElement {
        let id = self.inner.next_style_id.get();
        self.inner.next_style_id.set(id + 1);
        let style = StyleElement {
            inner: Rc::new(StyleInner {
                id,
                text: RefCell::new(String::new()),
            }),
        };
        self.inner.styles.borrow_mut().push(style.clone());
        style
    }

    pub fn remove_style_element(&self, style: &StyleElement) {
        self.inner
            .styles
            .borrow_mut()
            .retain(|existing| existing.inner.id != style.inner.id);
    }

    pub fn style_count(&self) -> usize {
        self.inner.styles.borrow().len()
    }

    /// All style blocks joined in insertion order.
    pub fn style_text(&self) -> String {
        self.inner
            .styles
            .borrow()
            .iter()
            .map(StyleElement::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ========================================================================
    // Body cursor affordance
    // ========================================================================

    pub fn set_body_cursor(&self, cursor: Option<&str>) {
        *self.inner.body_cursor.borrow_mut() = cursor.map(str::to_string);
    }

    pub fn body_cursor(&self) -> Option<String> {
        self.inner.body_cursor.borrow().clone()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("styles", &self.inner.styles.borrow().len())
            .field("body_cursor", &self.inner.body_cursor.borrow())
            .finish()
    }
}

/// Weak handle to a document. Lets long-lived consumers reference the
/// document without keeping it alive; `upgrade` fails once it is gone.
#[derive(Clone)]
pub struct WeakDocument {
    inner: Weak<Inner>,
}

impl WeakDocument {
    pub fn upgrade(&self) -> Option<Document> {
        self.inner.upgrade().map(|inner| Document { inner })
    }
}

/// A style element injected into a document. Clonable handle; the document
/// and the injecting consumer share the same underlying block.
#[derive(Clone)]
pub struct StyleElement {
    inner: Rc<StyleInner>,
}

struct StyleInner {
    id: u64,
    text: RefCell<String>,
}

impl StyleElement {
    pub fn set_text(&self, text: impl Into<String>) {
        *self.inner.text.borrow_mut() = text.into();
    }

    pub fn text(&self) -> String {
        self.inner.text.borrow().clone()
    }
}

impl std::fmt::Debug for StyleElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleElement")
            .field("id", &self.inner.id)
            .field("len", &self.inner.text.borrow().len())
            .finish()
    }
}
