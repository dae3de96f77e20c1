//! Error types for configuration validation.
//!
//! The pointer-event path never fails (misuse is contained locally, see the
//! input module); the only fallible surface is the eager, optional
//! validation of caller-supplied options.

use thiserror::Error;

/// Errors that can occur when validating [`DragOptions`].
///
/// [`DragOptions`]: crate::options::DragOptions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    /// A cadence step was zero, negative, or non-finite.
    ///
    /// At runtime such a step silently falls back to a step of 1 (with a
    /// warning); this variant lets callers reject it up front instead.
    #[error("cadence step must be a positive finite number, got {value}")]
    InvalidCadence { value: f32 },
}
