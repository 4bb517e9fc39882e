//! # steptrack-signal
//!
//! Step signal extraction: turns noisy accelerometer samples or native
//! step sensor events into a stream of discrete [`StepSignal`]s.
//!
//! # Architecture
//!
//! Raw input reaches the step stream through one of two paths:
//!
//! 1. **Accelerometer path**: [`GravityFilter`] removes the
//!    slowly-varying gravity component with a per-axis exponential
//!    low-pass filter, then [`PeakStepDetector`] emits one step per
//!    qualifying local maximum of the bias-free magnitude.
//! 2. **Hardware path**: [`HardwareStepAdapter`] normalizes native
//!    step-detector ("+1 per step") and step-counter ("cumulative since
//!    boot") events, debouncing the former and rebasing the latter
//!    against a session baseline.
//!
//! [`StepSource`] selects one path from the externally supplied
//! [`SensorCapability`] at configuration time (native detector, then
//! native counter, then the accelerometer fallback with strict
//! thresholds) and exposes a single `observe` entry point.
//!
//! All processing is synchronous, CPU-bound and allocation-free per
//! sample; the platform collaborator guarantees non-reentrant handler
//! invocation, so the crate needs no internal locking.
//!
//! # Example
//!
//! ```
//! use steptrack_signal::{
//!     AccelerationSample, SensorCapability, SensorInput, StepSource,
//! };
//!
//! let caps = SensorCapability::accelerometer_only();
//! let mut source = StepSource::select(&caps).expect("accelerometer present");
//!
//! let sample = AccelerationSample::new(0.0, 0.0, 9.81, 20_000_000);
//! let signal = source.observe(&SensorInput::Acceleration(sample));
//! assert!(signal.is_none(), "a single quiet sample is not a step");
//! ```

pub mod error;
pub mod gravity;
pub mod hardware;
pub mod peak;
pub mod source;
pub mod types;

pub use error::SignalError;
pub use gravity::{GravityFilter, DEFAULT_GRAVITY_ALPHA};
pub use hardware::{HardwareStepAdapter, DEFAULT_DEBOUNCE_NS};
pub use peak::{PeakDetectorConfig, PeakStepDetector, DEFAULT_MIN_STEP_INTERVAL_NS};
pub use source::StepSource;
pub use types::{
    AccelerationSample, HardwareSensorKind, HardwareStepEvent, LinearAcceleration,
    SensorCapability, SensorInput, StepSignal,
};
