//! The drag session state machine.
//!
//! One handler services all four global event types; it branches on the
//! event type and re-derives intent from the event target on every call.
//! Raw pointer movement stays inside the session record — only clamped,
//! de-duplicated widths reach the store, so the style projection runs once
//! per committed change rather than once per mousemove.

use griddom::{Event, EventType, MouseButton, PointerEvent, StyleElement, WeakDocument};

use super::{reproject, Shared};
use crate::store::Action;
use crate::style::{HANDLE_ATTR, RESIZE_CURSOR};

/// A live drag session. The slot holding it is `Option<DragState>`; `None`
/// is Idle, and a populated session cannot have absent fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Column being resized.
    pub column: String,
    /// Pointer x at mousedown.
    pub start_pointer_x: f32,
    /// Rendered width of the handle's parent at mousedown, read from the
    /// host model rather than the store so intrinsic widths are captured.
    pub start_width: f32,
    /// Pointer x of the last processed mousemove.
    pub last_pointer_x: f32,
    /// Width of the last store dispatch.
    pub last_committed_width: f32,
}

pub(crate) fn handle(
    shared: &Shared,
    document: &WeakDocument,
    style: &StyleElement,
    event: &Event,
) {
    // Type guard against platform event polymorphism.
    let Event::Pointer(pointer) = event else {
        return;
    };
    match pointer.event_type() {
        EventType::MouseDown => on_mouse_down(shared, document, style, pointer),
        EventType::MouseMove => on_mouse_move(shared, style, pointer),
        // contextmenu is the safety net for a right-click interrupting a
        // drag without a mouseup firing on some platforms.
        EventType::MouseUp | EventType::ContextMenu => on_mouse_up(shared, document, style),
        _ => {}
    }
}

/// Idle → Dragging. A second mousedown mid-drag overwrites the session
/// (last writer wins), so no commits for the previous column can follow.
fn on_mouse_down(
    shared: &Shared,
    document: &WeakDocument,
    style: &StyleElement,
    pointer: &PointerEvent,
) {
    if pointer.get_button() != MouseButton::Left {
        return;
    }
    let Some(target) = pointer.get_target() else {
        return;
    };
    // Only targets carrying the handle attribute start a session; everything
    // else is left to the page's own click handling, unconsumed.
    let Some(column) = target.get_data(HANDLE_ATTR) else {
        return;
    };
    let Some(start_width) = target.parent().and_then(|parent| parent.offset_width()) else {
        log::debug!("[resize] handle for {column} has no measurable parent, ignoring");
        return;
    };

    let page_x = pointer.get_page_x();
    log::debug!("[resize] drag start on {column}: pointer_x={page_x}, start_width={start_width}");
    *shared.session.borrow_mut() = Some(DragState {
        column,
        start_pointer_x: page_x,
        start_width,
        last_pointer_x: page_x,
        last_committed_width: start_width,
    });

    if let Some(document) = document.upgrade() {
        document.set_body_cursor(Some(RESIZE_CURSOR));
    }
    reproject(shared, style);
}

/// Dragging self-loop. Two guards run in order: an unchanged pointer x
/// skips the event entirely (coalesces duplicates), and an unchanged
/// clamped width skips the store dispatch even though the pointer moved.
fn on_mouse_move(shared: &Shared, style: &StyleElement, pointer: &PointerEvent) {
    let action = {
        let mut session = shared.session.borrow_mut();
        let Some(drag) = session.as_mut() else {
            return;
        };

        let page_x = pointer.get_page_x();
        if page_x == drag.last_pointer_x {
            return;
        }
        drag.last_pointer_x = page_x;

        let proposed = drag.start_width + (page_x - drag.start_pointer_x);
        let clamped = shared.limits.clamp(&drag.column, proposed);
        if clamped == drag.last_committed_width {
            log::trace!("[resize] {}: clamped width unchanged, skipping commit", drag.column);
            return;
        }
        drag.last_committed_width = clamped;
        Action::Resize {
            column: drag.column.clone(),
            width: clamped,
        }
    };

    let changed = {
        let mut store = shared.store.borrow_mut();
        store.dispatch(action);
        store.take_dirty()
    };
    if changed {
        reproject(shared, style);
    }
}

/// Dragging → Idle. No width mutation on exit; the last committed width
/// stands.
fn on_mouse_up(shared: &Shared, document: &WeakDocument, style: &StyleElement) {
    let Some(drag) = shared.session.borrow_mut().take() else {
        return;
    };
    log::debug!(
        "[resize] drag end on {}: committed width {}",
        drag.column,
        drag.last_committed_width
    );
    if let Some(document) = document.upgrade() {
        document.set_body_cursor(None);
    }
    reproject(shared, style);
}
