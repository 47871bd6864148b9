#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Only the input a modal sheet cares about is modeled: pointer presses
//! (taps) and a handful of keys. Pointer coordinates share the coordinate
//! space of layout measurements.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A key event.
    Key(KeyEvent),
    /// A pointer (touch or mouse) event.
    Pointer(PointerEvent),
}

impl Event {
    /// A completed tap at `(x, y)`.
    pub const fn tap(x: f64, y: f64) -> Self {
        Self::Pointer(PointerEvent::new(x, y, PointerEventKind::Up))
    }

    /// A key press.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }
}

/// A key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a key press.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Keys relevant to modal surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Hardware or navigation back.
    Back,
    Escape,
    Enter,
    Char(char),
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A pointer event in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub const fn new(x: f64, y: f64, kind: PointerEventKind) -> Self {
        Self { x, y, kind }
    }
}

/// Pointer phase. A tap completes on `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Up,
}
