//! Gravity suppression filter.
//!
//! Removes the slowly-varying gravity/bias component from raw
//! accelerometer samples with a per-axis exponential low-pass filter,
//! leaving the body-motion signal for peak detection.

use crate::types::{AccelerationSample, LinearAcceleration};

/// Default smoothing constant for the gravity estimate.
pub const DEFAULT_GRAVITY_ALPHA: f32 = 0.8;

/// Per-axis exponential low-pass gravity estimator.
///
/// Each axis tracks `gravity = alpha * gravity + (1 - alpha) * raw`; the
/// filter output is `raw - gravity`. Higher `alpha` means a slower
/// estimate that absorbs less of the step impulse.
pub struct GravityFilter {
    /// Per-axis gravity estimate.
    gravity: [f32; 3],
    /// Smoothing constant in `(0, 1)`.
    alpha: f32,
}

impl Default for GravityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY_ALPHA)
    }
}

impl GravityFilter {
    /// Create a filter with the given smoothing constant.
    ///
    /// `alpha` is clamped into `(0, 1)`. The initial gravity estimate is
    /// the zero vector, so early outputs pass the raw signal through
    /// until the estimate converges.
    #[must_use]
    pub fn new(alpha: f32) -> Self {
        Self {
            gravity: [0.0; 3],
            alpha: alpha.clamp(0.001, 0.999),
        }
    }

    /// Filter one sample, updating the gravity estimate in place and
    /// returning the bias-free acceleration vector.
    ///
    /// Deterministic given the same sample sequence and initial state.
    pub fn apply(&mut self, sample: &AccelerationSample) -> LinearAcceleration {
        let raw = [sample.x, sample.y, sample.z];
        for (g, &r) in self.gravity.iter_mut().zip(raw.iter()) {
            *g = self.alpha * *g + (1.0 - self.alpha) * r;
        }
        LinearAcceleration {
            x: raw[0] - self.gravity[0],
            y: raw[1] - self.gravity[1],
            z: raw[2] - self.gravity[2],
        }
    }

    /// Reset the gravity estimate to the zero vector.
    pub fn reset(&mut self) {
        self.gravity = [0.0; 3];
    }

    /// Current smoothing constant.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current per-axis gravity estimate.
    #[must_use]
    pub fn gravity(&self) -> [f32; 3] {
        self.gravity
    }
}
