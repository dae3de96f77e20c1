//! Drag lifecycle state machine.
//!
//! An explicit three-state enum instead of independent `active`/`dragging`
//! booleans, making impossible states unrepresentable: `Dragging` can only
//! exist with a session snapshot, so the `dragging ⇒ active` invariant
//! holds structurally at every observable instant.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Active       (pointer down on the element)
//! Active   -> Dragging     (first qualifying pointer move)
//! Dragging -> Dragging     (subsequent moves, idempotent)
//! Active   -> Idle         (pointer up)
//! Dragging -> Idle         (pointer up)
//! ```
//!
//! No other transitions exist.

use crate::geometry::{Point, Position};

/// Lifecycle phase of one drag session.
///
/// The session snapshot (pointer anchor and element offset, both captured
/// at pointer-down) lives inside the active variants; it is recreated on
/// every Idle→Active transition and is meaningless while `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    /// No session in progress.
    #[default]
    Idle,
    /// Pointer is down but no move has been processed yet.
    Active {
        /// Pointer device coordinates at pointer-down.
        anchor: Point,
        /// Element offset within its container at pointer-down.
        element_offset: Position,
    },
    /// At least one move has been processed since activation.
    Dragging {
        anchor: Point,
        element_offset: Position,
    },
}

impl DragPhase {
    /// True for `Active` and `Dragging` (a session is in progress).
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// True only once a move has been processed.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Session snapshot, if a session is in progress.
    pub fn session(&self) -> Option<(Point, Position)> {
        match *self {
            Self::Active {
                anchor,
                element_offset,
            }
            | Self::Dragging {
                anchor,
                element_offset,
            } => Some((anchor, element_offset)),
            Self::Idle => None,
        }
    }

    /// Begin a session: Idle→Active with a fresh snapshot.
    ///
    /// A pointer-down during an unfinished session restarts it with the
    /// new snapshot; defending against overlapping downs from multiple
    /// devices is the host's contract.
    pub fn start(&mut self, anchor: Point, element_offset: Position) {
        *self = Self::Active {
            anchor,
            element_offset,
        };
    }

    /// Mark motion as confirmed: Active→Dragging, idempotent once
    /// dragging. No-op while `Idle`.
    pub fn confirm_motion(&mut self) {
        if let Self::Active {
            anchor,
            element_offset,
        } = *self
        {
            *self = Self::Dragging {
                anchor,
                element_offset,
            };
        }
    }

    /// End the session: back to `Idle` in one step, clearing both flags at
    /// once (there is no "ended but still active" intermediate).
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
