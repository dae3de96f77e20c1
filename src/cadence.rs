//! Cadence: quantization of pointer-motion deltas.
//!
//! Raw pointer deltas are snapped to multiples of a step size before they
//! become position deltas, so dragging feels grid-aligned when the step is
//! larger than 1 and behaves as continuous motion at the default step of 1.

use crate::constants::DEFAULT_CADENCE;
use crate::error::OptionsError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Quantization step size applied to pointer-motion deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cadence {
    /// One step shared by both axes.
    Uniform(f32),
    /// Independent steps per axis.
    PerAxis { left: f32, top: f32 },
}

impl Default for Cadence {
    fn default() -> Self {
        Self::Uniform(DEFAULT_CADENCE)
    }
}

impl Cadence {
    /// Resolve to concrete `(left, top)` steps.
    ///
    /// Non-positive and non-finite steps resolve to [`DEFAULT_CADENCE`]
    /// with a warning; use [`Cadence::validate`] to reject them eagerly.
    pub fn resolve(&self) -> (f32, f32) {
        match *self {
            Self::Uniform(step) => {
                let step = sanitize(step);
                (step, step)
            }
            Self::PerAxis { left, top } => (sanitize(left), sanitize(top)),
        }
    }

    /// Snap a per-axis delta pair to multiples of the resolved steps:
    /// `round(delta / step) * step` on each axis.
    pub fn quantize(&self, delta_left: f32, delta_top: f32) -> (f32, f32) {
        let (step_left, step_top) = self.resolve();
        (
            (delta_left / step_left).round() * step_left,
            (delta_top / step_top).round() * step_top,
        )
    }

    /// Reject non-positive or non-finite steps up front.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let check = |value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(OptionsError::InvalidCadence { value })
            }
        };
        match *self {
            Self::Uniform(step) => check(step),
            Self::PerAxis { left, top } => check(left).and(check(top)),
        }
    }
}

fn sanitize(step: f32) -> f32 {
    if step.is_finite() && step > 0.0 {
        step
    } else {
        warn!(step, fallback = DEFAULT_CADENCE, "invalid cadence step");
        DEFAULT_CADENCE
    }
}
