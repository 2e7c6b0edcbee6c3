use crate::element::Element;

/// Global event types a document can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    MouseDown,
    MouseUp,
    MouseMove,
    ContextMenu,
    KeyDown,
    KeyUp,
}

impl EventType {
    /// The DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventType::MouseDown => "mousedown",
            EventType::MouseUp => "mouseup",
            EventType::MouseMove => "mousemove",
            EventType::ContextMenu => "contextmenu",
            EventType::KeyDown => "keydown",
            EventType::KeyUp => "keyup",
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A pointer event: type, button, page coordinates, optional target element.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    event_type: EventType,
    button: MouseButton,
    page_x: f32,
    page_y: f32,
    target: Option<Element>,
}

impl PointerEvent {
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            button: MouseButton::Left,
            page_x: 0.0,
            page_y: 0.0,
            target: None,
        }
    }

    pub fn button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    pub fn page_x(mut self, x: f32) -> Self {
        self.page_x = x;
        self
    }

    pub fn page_y(mut self, y: f32) -> Self {
        self.page_y = y;
        self
    }

    pub fn target(mut self, target: &Element) -> Self {
        self.target = Some(target.clone());
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn get_button(&self) -> MouseButton {
        self.button
    }

    pub fn get_page_x(&self) -> f32 {
        self.page_x
    }

    pub fn get_page_y(&self) -> f32 {
        self.page_y
    }

    pub fn get_target(&self) -> Option<&Element> {
        self.target.as_ref()
    }
}

/// A keyboard event. Carried so documents stay polymorphic over input kinds;
/// pointer-only consumers type-guard on `Event::Pointer` and ignore these.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    event_type: EventType,
    key: String,
    target: Option<Element>,
}

impl KeyEvent {
    pub fn new(event_type: EventType, key: impl Into<String>) -> Self {
        Self {
            event_type,
            key: key.into(),
            target: None,
        }
    }

    pub fn target(mut self, target: &Element) -> Self {
        self.target = Some(target.clone());
        self
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get_target(&self) -> Option<&Element> {
        self.target.as_ref()
    }
}

/// Polymorphic document event.
#[derive(Debug, Clone)]
pub enum Event {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl Event {
    pub fn event_type(&self) -> EventType {
        match self {
            Event::Pointer(pointer) => pointer.event_type(),
            Event::Key(key) => key.event_type(),
        }
    }
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Event::Pointer(event)
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Event::Key(event)
    }
}
