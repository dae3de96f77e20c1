//! Pointer-up handling: finalize the session.

use crate::controller::DragController;
use crate::event::PointerEvent;

impl DragController {
    /// Process one event from the process-wide pointer-up stream.
    ///
    /// No-op while `Idle`, so repeated ups after a session end change
    /// nothing and do not re-invoke the callback. Otherwise resets the
    /// lifecycle to `Idle` in a single step (clearing active and dragging
    /// together) and invokes `on_drag_end`. The committed position is
    /// retained for the host to keep rendering.
    pub fn pointer_released(&mut self, event: &PointerEvent) {
        if self.phase.is_idle() {
            return;
        }

        self.phase.reset();

        if let Some(callback) = self.options.on_drag_end.as_mut() {
            callback(event);
        }
    }
}
