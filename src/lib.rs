//! Pointer-driven free-form dragging of a single on-screen element within
//! an optional bounding container.
//!
//! The crate converts raw pointer-down/move/up events into a constrained,
//! quantized position for that element, reporting start/move/end
//! transitions to the host. It is the interaction core only: rendering,
//! layout computation, and visual feedback belong to the host toolkit,
//! which talks to this crate through three seams:
//!
//! - [`ElementHandle`] — the measurement binding the host keeps updated
//!   with the element's bounding rect,
//! - [`ContainerArea`] — geometry queries (and the reference-frame side
//!   effect) for an optional bounding container,
//! - [`PointerEvent`] — the host's pointer stream, wired to
//!   [`DragController::begin_drag`] on the element and to the controller's
//!   move/up handlers globally (directly or via a [`PointerHub`]).
//!
//! ## Example
//!
//! ```
//! use freedrag::{
//!     Cadence, DragController, DragOptions, FixedArea, PointerEvent, Rect,
//! };
//!
//! let mut controller = DragController::new(
//!     DragOptions::new()
//!         .with_cadence(Cadence::Uniform(10.0))
//!         .with_container(Box::new(FixedArea::new(Rect::new(0.0, 0.0, 300.0, 300.0)))),
//! );
//! controller.handle().bind(Rect::new(100.0, 100.0, 50.0, 50.0));
//!
//! let mut press = PointerEvent::down(10.0, 10.0);
//! controller.begin_drag(&mut press);
//! assert!(press.is_default_suppressed());
//! controller.pointer_moved(&PointerEvent::moved(24.0, 24.0));
//! assert_eq!(controller.position().left, 110.0); // round(14/10)*10 = 10
//! controller.pointer_released(&PointerEvent::up(24.0, 24.0));
//! assert!(!controller.active());
//! ```

pub mod cadence;
pub mod constants;
pub mod container;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod handle;
pub mod hub;
pub mod input;
pub mod options;
pub mod perf;

pub use cadence::Cadence;
pub use container::{ContainerArea, FixedArea};
pub use controller::DragController;
pub use error::OptionsError;
pub use event::{PointerEvent, PointerEventKind};
pub use geometry::{Point, Position, Rect, Size};
pub use handle::ElementHandle;
pub use hub::PointerHub;
pub use input::DragPhase;
pub use options::{DragCallback, DragOptions};
