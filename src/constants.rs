//! Crate-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Motion Defaults
// ============================================================================

/// Default quantization step for pointer-motion deltas.
///
/// A step of 1 behaves as continuous (unit-step) motion; larger steps snap
/// movement to a grid. Also used as the fallback when a caller supplies a
/// non-positive or non-finite step.
pub const DEFAULT_CADENCE: f32 = 1.0;

// ============================================================================
// Profiling
// ============================================================================

/// Threshold in milliseconds above which a pointer-event handler is
/// considered slow and logged at warn level (profiling builds only).
///
/// Half of a 60 FPS frame: a handler that eats more than this leaves no
/// budget for the host's render pass.
pub const SLOW_HANDLER_WARN_MS: f64 = 8.0;
