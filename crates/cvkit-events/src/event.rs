/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The left button.
    Left,
    /// The right button.
    Right,
    /// The middle button or wheel.
    Middle,
}

/// What happened to the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    /// A button was pressed.
    ButtonDown(MouseButton),
    /// The cursor moved.
    Move,
}

/// A mouse event in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// The kind of event.
    pub kind: MouseEventKind,
    /// Cursor column.
    pub x: i32,
    /// Cursor row.
    pub y: i32,
}

impl MouseEvent {
    /// Create a new mouse event.
    pub const fn new(kind: MouseEventKind, x: i32, y: i32) -> Self {
        Self { kind, x, y }
    }

    /// Human readable description, e.g. `LEFT CLICK (10, 20)`.
    pub fn describe(&self) -> String {
        let what = match self.kind {
            MouseEventKind::ButtonDown(MouseButton::Left) => "LEFT CLICK",
            MouseEventKind::ButtonDown(MouseButton::Right) => "RIGHT CLICK",
            MouseEventKind::ButtonDown(MouseButton::Middle) => "MIDDLE CLICK",
            MouseEventKind::Move => "MOUSE OVER",
        };
        format!("{what} ({}, {})", self.x, self.y)
    }
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key.
    pub key: char,
    /// `true` on press, `false` on release.
    pub key_down: bool,
}

impl KeyboardEvent {
    /// A key press.
    pub const fn down(key: char) -> Self {
        Self {
            key,
            key_down: true,
        }
    }

    /// A key release.
    pub const fn up(key: char) -> Self {
        Self {
            key,
            key_down: false,
        }
    }
}

/// A point picked in a 3d view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointPickingEvent {
    /// Coordinates of the picked point.
    pub point: [f32; 3],
    /// Index of the point in the displayed cloud, if known.
    pub index: Option<usize>,
}

impl PointPickingEvent {
    /// A pick at `point` with no cloud index.
    pub const fn new(point: [f32; 3]) -> Self {
        Self { point, index: None }
    }

    /// Attach the index of the picked point.
    pub const fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// Any event a window can deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse event.
    Mouse(MouseEvent),
    /// A keyboard event.
    Keyboard(KeyboardEvent),
    /// A point picking event.
    PointPicked(PointPickingEvent),
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Event::Mouse(event)
    }
}

impl From<KeyboardEvent> for Event {
    fn from(event: KeyboardEvent) -> Self {
        Event::Keyboard(event)
    }
}

impl From<PointPickingEvent> for Event {
    fn from(event: PointPickingEvent) -> Self {
        Event::PointPicked(event)
    }
}
