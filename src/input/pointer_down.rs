//! Pointer-down handling: session start, geometry snapshot.

use crate::controller::DragController;
use crate::event::{PointerEvent, PointerEventKind};
use crate::profile_scope;
use tracing::warn;

impl DragController {
    /// Begin a drag session from the element's pointer-down interaction.
    ///
    /// Silent no-op while disabled or while the measurement handle is
    /// unbound (normal during mount/unmount races). Calling it with a
    /// non-pointer-down event is a usage error: nothing is mutated and a
    /// warning-level diagnostic is emitted, but the host is never
    /// destabilized by a panic.
    ///
    /// When a session starts, the event's default handling is suppressed
    /// so the host skips text selection / native drag for this press; the
    /// no-op paths leave the event untouched.
    pub fn begin_drag(&mut self, event: &mut PointerEvent) {
        profile_scope!("begin_drag");

        if self.options.disabled {
            return;
        }
        let Some(element) = self.element_rect() else {
            return;
        };
        if event.kind != PointerEventKind::Down {
            warn!(
                kind = ?event.kind,
                "begin_drag called with a non-pointer-down event; ignoring"
            );
            return;
        }

        event.suppress_default();

        let element_offset = element.offset_from(self.container_origin());
        self.phase.start(event.position, element_offset);

        if let Some(callback) = self.options.on_drag_start.as_mut() {
            callback(event);
        }
    }
}
