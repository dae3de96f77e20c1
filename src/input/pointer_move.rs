//! Pointer-move handling: quantize, clamp, commit.
//!
//! ## Performance Notes
//!
//! This handler runs against the process-wide move stream (potentially
//! 60+ times per second whether or not a session is active). Key
//! optimizations:
//! - Early exit while Idle
//! - One handle read and one cadence resolution per processed move
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::controller::DragController;
use crate::event::PointerEvent;
use crate::geometry::Position;
use crate::profile_scope;

impl DragController {
    /// Process one event from the process-wide pointer-move stream.
    ///
    /// No-op while `Idle` (the stream is a shared ambient input; each
    /// controller filters by its own phase) and while the measurement
    /// handle is unbound. Otherwise commits a new position, confirms the
    /// `Dragging` phase, and invokes `on_drag_move`.
    pub fn pointer_moved(&mut self, event: &PointerEvent) {
        profile_scope!("pointer_moved");

        let Some((anchor, element_offset)) = self.phase.session() else {
            return;
        };
        // Containment reads the current element size, so a moved handle
        // binding is required even mid-session.
        let Some(element) = self.element_rect() else {
            return;
        };

        let delta = event.position - anchor;
        let (snapped_left, snapped_top) = self.options.cadence.quantize(delta.x, delta.y);

        let mut left = element_offset.left + snapped_left;
        let mut top = element_offset.top + snapped_top;

        if let Some(container) = self.options.container.as_ref() {
            let content = container.content_size();
            // Lower bound wins when the element exceeds the container.
            left = left.max(0.0).min((content.width - element.width()).max(0.0));
            top = top.max(0.0).min((content.height - element.height()).max(0.0));
        }

        if !self.options.drag_x {
            left = element_offset.left;
        }
        if !self.options.drag_y {
            top = element_offset.top;
        }

        self.position = Position::new(left, top);
        self.phase.confirm_motion();

        if let Some(callback) = self.options.on_drag_move.as_mut() {
            callback(event);
        }
    }
}
