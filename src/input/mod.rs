//! Pointer input handling for the drag controller.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`DragPhase`) to track
//! the current session. This replaces independent boolean flags and makes
//! impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Drag lifecycle state machine and helper methods
//! - `pointer_down` - Pointer-down handling (session start, geometry snapshot)
//! - `pointer_move` - Pointer-move handling (quantize, clamp, commit)
//! - `pointer_up` - Pointer-up handling (finalize session)

mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use state::DragPhase;
