//! The interaction controller.
//!
//! [`DragController`] owns the lifecycle state machine, the geometry
//! snapshots of the current session, and the committed position. The
//! per-event-phase handlers live in the [`input`](crate::input) module as
//! separate `impl` blocks; this file holds construction, configuration,
//! and the read-only surface the host renderer polls.

use crate::geometry::{Point, Position, Rect};
use crate::handle::ElementHandle;
use crate::input::DragPhase;
use crate::options::DragOptions;

/// Converts pointer-down/move/up events into a constrained, quantized
/// element position within an optional bounding container.
///
/// Wiring contract:
/// - bind [`DragController::handle`] to the rendered element and keep it
///   updated after layout,
/// - route the element's pointer-down interaction to
///   [`begin_drag`](DragController::begin_drag),
/// - route the process-wide move/up streams to
///   [`pointer_moved`](DragController::pointer_moved) and
///   [`pointer_released`](DragController::pointer_released) (directly or
///   through a [`PointerHub`](crate::hub::PointerHub)),
/// - read `active()` / `dragging()` / `position()` on every render.
#[derive(Debug)]
pub struct DragController {
    pub(crate) options: DragOptions,
    pub(crate) phase: DragPhase,
    pub(crate) position: Position,
    handle: ElementHandle,
}

impl DragController {
    pub fn new(mut options: DragOptions) -> Self {
        apply_container_frame(&mut options);
        Self {
            options,
            phase: DragPhase::Idle,
            position: Position::ZERO,
            handle: ElementHandle::new(),
        }
    }

    /// The measurement handle the host must bind to exactly one rendered
    /// element. Clones share the binding.
    pub fn handle(&self) -> ElementHandle {
        self.handle.clone()
    }

    /// True while a session is in progress (pointer is down).
    pub fn active(&self) -> bool {
        self.phase.is_active()
    }

    /// True once at least one move has been processed this session.
    pub fn dragging(&self) -> bool {
        self.phase.is_dragging()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Last committed position, retained across session end.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Replace the configuration. Intended between sessions (options are
    /// immutable per drag session); re-applies the container
    /// reference-frame side effect when a container is configured.
    pub fn set_options(&mut self, mut options: DragOptions) {
        apply_container_frame(&mut options);
        self.options = options;
    }

    /// Origin the element offset is measured from: the container's
    /// top-left corner, or the document origin when no container is
    /// configured.
    pub(crate) fn container_origin(&self) -> Point {
        self.options
            .container
            .as_ref()
            .map(|container| container.bounds().origin)
            .unwrap_or(Point::ZERO)
    }

    pub(crate) fn element_rect(&self) -> Option<Rect> {
        self.handle.rect()
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}

fn apply_container_frame(options: &mut DragOptions) {
    if let Some(container) = options.container.as_mut() {
        container.establish_reference_frame();
    }
}
