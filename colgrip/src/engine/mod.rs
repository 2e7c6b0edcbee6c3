pub mod events;

pub use events::DragState;

use std::cell::RefCell;
use std::rc::Rc;

use griddom::{Document, EventType, Listener, StyleElement, WeakDocument};

use crate::error::EngineError;
use crate::limits::ColumnLimits;
use crate::store::{Action, ColumnWidths, WidthStore};
use crate::style;

/// The four document-wide event types the engine listens on. Listening on
/// the document rather than on individual handles keeps mousemove tracking
/// alive after the pointer leaves the handle element.
const GLOBAL_EVENTS: [EventType; 4] = [
    EventType::MouseDown,
    EventType::MouseUp,
    EventType::MouseMove,
    EventType::ContextMenu,
];

/// State shared between the engine API and its registered event handler.
pub(crate) struct Shared {
    pub(crate) limits: ColumnLimits,
    pub(crate) store: RefCell<WidthStore>,
    pub(crate) session: RefCell<Option<DragState>>,
}

/// Regenerate the engine's style block from store + session state.
pub(crate) fn reproject(shared: &Shared, style: &StyleElement) {
    let css = {
        let store = shared.store.borrow();
        let session = shared.session.borrow();
        style::project(store.widths(), session.as_ref())
    };
    log::trace!("[resize] projected {} bytes of css", css.len());
    style.set_text(css);
}

struct Mounted {
    document: WeakDocument,
    style: StyleElement,
    handler: Listener,
}

/// The interactive column-resize engine.
///
/// Mounts onto a [`Document`], listens for global pointer events, and
/// projects committed column widths as an injected style block. The
/// surrounding table consumes the cascade implicitly; there is no direct
/// API between the two.
pub struct ResizeEngine {
    shared: Rc<Shared>,
    mounted: Option<Mounted>,
}

impl Default for ResizeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizeEngine {
    pub fn new() -> Self {
        Self::with_limits(ColumnLimits::default())
    }

    pub fn with_limits(limits: ColumnLimits) -> Self {
        Self {
            shared: Rc::new(Shared {
                limits,
                store: RefCell::new(WidthStore::new()),
                session: RefCell::new(None),
            }),
            mounted: None,
        }
    }

    pub fn limits(&self) -> &ColumnLimits {
        &self.shared.limits
    }

    /// Attach to a document: create the engine's style element and register
    /// one identity-stable handler for each global event type. The handler
    /// branches on the event type internally and re-derives intent from the
    /// event target on every call.
    pub fn mount(&mut self, document: &Document) -> Result<(), EngineError> {
        if self.mounted.is_some() {
            return Err(EngineError::AlreadyMounted);
        }

        let style = document.create_style_element();
        let shared = Rc::clone(&self.shared);
        let weak_document = document.downgrade();
        let handler_style = style.clone();
        let handler_document = weak_document.clone();
        let handler: Listener = Rc::new(move |event| {
            events::handle(&shared, &handler_document, &handler_style, event);
        });

        for event_type in GLOBAL_EVENTS {
            document.add_event_listener(event_type, &handler);
        }
        log::debug!("[resize] mounted, listening on {} event types", GLOBAL_EVENTS.len());

        reproject(&self.shared, &style);
        self.mounted = Some(Mounted {
            document: weak_document,
            style,
            handler,
        });
        Ok(())
    }

    /// Detach from the document: remove all four listener registrations by
    /// handler identity, remove the style element, clear the cursor
    /// affordance, discard any live session without flushing a commit, and
    /// reset the store (widths are session-only).
    pub fn unmount(&mut self) -> Result<(), EngineError> {
        let mounted = self.mounted.take().ok_or(EngineError::NotMounted)?;
        detach(&self.shared, &mounted);
        log::debug!("[resize] unmounted");
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    // ========================================================================
    // Host-triggered operations
    // ========================================================================

    /// Drop a single column's override, falling back to its default width.
    pub fn reset_column(&mut self, column: &str) {
        self.shared.store.borrow_mut().dispatch(Action::Reset {
            column: column.to_string(),
        });
        self.reproject_if_dirty();
    }

    /// Drop every override.
    pub fn clear_overrides(&mut self) {
        self.shared.store.borrow_mut().dispatch(Action::Clear);
        self.reproject_if_dirty();
    }

    fn reproject_if_dirty(&self) {
        let changed = self.shared.store.borrow_mut().take_dirty();
        if changed {
            if let Some(mounted) = &self.mounted {
                reproject(&self.shared, &mounted.style);
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn width_of(&self, column: &str) -> Option<f32> {
        self.shared.store.borrow().widths().get(column)
    }

    /// Snapshot of the current overrides.
    pub fn widths(&self) -> ColumnWidths {
        self.shared.store.borrow().widths().clone()
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.session.borrow().is_some()
    }

    pub fn dragging_column(&self) -> Option<String> {
        self.shared
            .session
            .borrow()
            .as_ref()
            .map(|drag| drag.column.clone())
    }
}

impl Drop for ResizeEngine {
    fn drop(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            detach(&self.shared, &mounted);
        }
    }
}

fn detach(shared: &Shared, mounted: &Mounted) {
    // The document is held weakly; an engine outliving it degrades silently.
    if let Some(document) = mounted.document.upgrade() {
        for event_type in GLOBAL_EVENTS {
            document.remove_event_listener(event_type, &mounted.handler);
        }
        document.remove_style_element(&mounted.style);
        document.set_body_cursor(None);
    }
    *shared.session.borrow_mut() = None;
    let mut store = shared.store.borrow_mut();
    store.dispatch(Action::Clear);
    let _ = store.take_dirty();
}
