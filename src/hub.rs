//! Fan-out of the process-wide pointer streams.
//!
//! Once a drag starts the pointer must be tracked anywhere on screen, even
//! after it leaves the element's bounds, so move/up events are consumed
//! from a process-wide stream rather than captured per element. The hub
//! routes that shared stream to every registered controller; each
//! controller filters irrelevant events via its own lifecycle phase, so
//! none assumes exclusive access to the input.
//!
//! Registration is weak: dropping a controller (element unmounted) is all
//! the deregistration a host needs, and dead entries are pruned on the next
//! dispatch so no stale listener accumulates. Single-threaded by design,
//! matching the cooperative event-loop model — all transitions happen
//! synchronously inside `dispatch`.

use crate::controller::DragController;
use crate::event::{PointerEvent, PointerEventKind};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Routes process-wide pointer-move/up events to registered controllers.
///
/// Pointer-down events are deliberately not fanned out: `begin_drag` is
/// wired per element by the host, because only the element under the
/// pointer may start a session.
#[derive(Default)]
pub struct PointerHub {
    controllers: Vec<Weak<RefCell<DragController>>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller for the shared move/up streams. The hub holds
    /// only a weak reference; the host keeps ownership.
    pub fn register(&mut self, controller: &Rc<RefCell<DragController>>) {
        self.controllers.push(Rc::downgrade(controller));
    }

    /// Dispatch one pointer event to every live controller, pruning
    /// registrations whose controller has been dropped.
    pub fn dispatch(&mut self, event: &PointerEvent) {
        self.controllers.retain(|entry| {
            let Some(controller) = entry.upgrade() else {
                return false;
            };
            match event.kind {
                PointerEventKind::Move => controller.borrow_mut().pointer_moved(event),
                PointerEventKind::Up => controller.borrow_mut().pointer_released(event),
                PointerEventKind::Down => {}
            }
            true
        });
    }

    /// Number of live registrations (dead entries are only removed on
    /// dispatch, so this may briefly overcount).
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
