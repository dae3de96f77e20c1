//! Caller-supplied drag configuration.
//!
//! Options are immutable for the duration of one drag session; hosts that
//! need to reconfigure do so between sessions via
//! [`DragController::set_options`](crate::controller::DragController::set_options).

use crate::cadence::Cadence;
use crate::container::ContainerArea;
use crate::error::OptionsError;
use crate::event::PointerEvent;
use std::fmt;

/// Lifecycle callback invoked with the originating pointer event.
pub type DragCallback = Box<dyn FnMut(&PointerEvent)>;

/// Configuration for a [`DragController`](crate::controller::DragController).
pub struct DragOptions {
    /// Allow movement along the horizontal axis.
    pub drag_x: bool,
    /// Allow movement along the vertical axis.
    pub drag_y: bool,
    /// When true, `begin_drag` is a no-op and no session can start.
    pub disabled: bool,
    /// Quantization step for pointer-motion deltas.
    pub cadence: Cadence,
    /// Bounding container; `None` means the whole document area (no
    /// clamping, no reference-frame side effect).
    pub container: Option<Box<dyn ContainerArea>>,
    /// Invoked after the Idle→Active transition.
    pub on_drag_start: Option<DragCallback>,
    /// Invoked after each committed position, once per processed move.
    pub on_drag_move: Option<DragCallback>,
    /// Invoked after the session resets to Idle.
    pub on_drag_end: Option<DragCallback>,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            drag_x: true,
            drag_y: true,
            disabled: false,
            cadence: Cadence::default(),
            container: None,
            on_drag_start: None,
            on_drag_move: None,
            on_drag_end: None,
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable movement per axis. A locked axis stays frozen at the
    /// element offset recorded at drag start.
    pub fn with_axes(mut self, drag_x: bool, drag_y: bool) -> Self {
        self.drag_x = drag_x;
        self.drag_y = drag_y;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_cadence(mut self, cadence: Cadence) -> Self {
        self.cadence = cadence;
        self
    }

    pub fn with_container(mut self, container: Box<dyn ContainerArea>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn on_drag_start(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(callback));
        self
    }

    pub fn on_drag_move(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_move = Some(Box::new(callback));
        self
    }

    pub fn on_drag_end(mut self, callback: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_drag_end = Some(Box::new(callback));
        self
    }

    /// Eagerly reject invalid configuration (currently: non-positive or
    /// non-finite cadence steps). Optional; at runtime invalid steps fall
    /// back to the default with a warning.
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.cadence.validate()
    }
}

impl fmt::Debug for DragOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragOptions")
            .field("drag_x", &self.drag_x)
            .field("drag_y", &self.drag_y)
            .field("disabled", &self.disabled)
            .field("cadence", &self.cadence)
            .field("container", &self.container.as_ref().map(|_| ".."))
            .field("on_drag_start", &self.on_drag_start.as_ref().map(|_| ".."))
            .field("on_drag_move", &self.on_drag_move.as_ref().map(|_| ".."))
            .field("on_drag_end", &self.on_drag_end.as_ref().map(|_| ".."))
            .finish()
    }
}
