//! Step signal domain types.

use serde::{Deserialize, Serialize};

/// A raw 3-axis accelerometer sample with a monotonic timestamp.
///
/// Produced by the sensing collaborator and consumed immediately by the
/// gravity filter; the core never buffers raw samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationSample {
    /// X-axis acceleration (m/s²).
    pub x: f32,
    /// Y-axis acceleration (m/s²).
    pub y: f32,
    /// Z-axis acceleration (m/s²).
    pub z: f32,
    /// Monotonic timestamp in nanoseconds.
    pub timestamp_ns: u64,
}

impl AccelerationSample {
    /// Create a new sample.
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, timestamp_ns: u64) -> Self {
        Self { x, y, z, timestamp_ns }
    }
}

/// A bias-free acceleration vector produced by the gravity filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAcceleration {
    /// X-axis linear acceleration (m/s²).
    pub x: f32,
    /// Y-axis linear acceleration (m/s²).
    pub y: f32,
    /// Z-axis linear acceleration (m/s²).
    pub z: f32,
}

impl LinearAcceleration {
    /// Euclidean norm of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Which native step sensor produced a [`HardwareStepEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardwareSensorKind {
    /// Fires once per detected step; the value is a (possibly batched)
    /// step count, usually `1.0`.
    Detector,
    /// Reports a cumulative step count since an arbitrary epoch
    /// (typically device boot); monotonically non-decreasing except
    /// across reboots.
    Counter,
}

/// An event from a native step sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareStepEvent {
    /// Which sensor produced the event.
    pub kind: HardwareSensorKind,
    /// The raw sensor value (per-event step count or cumulative total).
    pub value: f32,
    /// Monotonic timestamp in nanoseconds.
    pub timestamp_ns: u64,
}

impl HardwareStepEvent {
    /// Create a new hardware step event.
    #[must_use]
    pub fn new(kind: HardwareSensorKind, value: f32, timestamp_ns: u64) -> Self {
        Self { kind, value, timestamp_ns }
    }
}

/// Which sensing capabilities the platform reports.
///
/// Supplied externally; the core never probes hardware itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SensorCapability {
    /// A native step-detector sensor is present.
    pub has_step_detector: bool,
    /// A native cumulative step-counter sensor is present.
    pub has_step_counter: bool,
    /// A raw accelerometer is present.
    pub has_accelerometer: bool,
}

impl SensorCapability {
    /// No sensing hardware at all (manual-entry-only devices).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Accelerometer only, no native step sensors.
    #[must_use]
    pub fn accelerometer_only() -> Self {
        Self {
            has_accelerometer: true,
            ..Self::default()
        }
    }

    /// Whether any capability can feed the step pipeline.
    #[must_use]
    pub fn any(&self) -> bool {
        self.has_step_detector || self.has_step_counter || self.has_accelerometer
    }
}

/// A discrete step signal, independent of its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepSignal {
    /// Add this many steps to the session count.
    Increment(u32),
    /// Set the session count to this value (counter-mode correction).
    Absolute(u32),
}

/// Raw input routed into a selected step source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorInput {
    /// A raw accelerometer sample.
    Acceleration(AccelerationSample),
    /// A native step sensor event.
    Hardware(HardwareStepEvent),
}
