use serde::{Deserialize, Serialize};

use crate::error::{CurveError, Result};
use crate::Float;

/// Numeric tuning for curve construction, handed to each curve when it is built
///
/// Higher `approximation_steps` costs more at construction time and buys a more accurate
/// length, which is what the follower uses to turn distance into parametric t.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// chords summed to approximate a bezier curve's length
    pub approximation_steps: usize,
    /// parametric step for the finite difference second derivative
    pub derivative_step: Float,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            approximation_steps: 1000,
            derivative_step: 1e-4,
        }
    }
}

impl CurveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.approximation_steps == 0 {
            return Err(CurveError::InvalidConfig {
                reason: "approximation_steps must be at least 1",
            });
        }
        if !self.derivative_step.is_finite()
            || self.derivative_step <= 0.0
            || self.derivative_step > 0.5
        {
            return Err(CurveError::InvalidConfig {
                reason: "derivative_step must be in (0, 0.5]",
            });
        }
        Ok(())
    }
}
