//! Pointer events consumed from the host environment.
//!
//! The host owns the real input source (windowing system, DOM, terminal);
//! this crate only sees a kind tag, device coordinates, and the capability
//! to suppress the event's default handling.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which phase of a pointer interaction an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Button/contact pressed.
    Down,
    /// Pointer moved (with or without an active session).
    Move,
    /// Button/contact released.
    Up,
}

/// A single pointer event as delivered by the host event loop.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Device (screen) coordinates of the pointer.
    pub position: Point,
    default_suppressed: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            default_suppressed: false,
        }
    }

    /// A pointer-down event at the given device coordinates.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    /// A pointer-move event at the given device coordinates.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    /// A pointer-up event at the given device coordinates.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    /// Ask the host to skip its default handling of this event (text
    /// selection, native drag, etc.). The controller sets this when a
    /// pointer-down starts a session; the host reads the flag back after
    /// dispatch.
    pub fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    pub fn is_default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}
