//! Step source selection.
//!
//! A [`StepSource`] is the single entry point for raw sensor input. The
//! variant is selected once from the reported [`SensorCapability`] at
//! configuration time, never re-probed per event. Preference order:
//! native step detector, native step counter, then the accelerometer
//! fallback (gravity filter + strict peak detection).

use crate::error::SignalError;
use crate::gravity::GravityFilter;
use crate::hardware::HardwareStepAdapter;
use crate::peak::{PeakDetectorConfig, PeakStepDetector};
use crate::types::{HardwareSensorKind, SensorCapability, SensorInput, StepSignal};

/// A selected step source strategy.
pub enum StepSource {
    /// Native step sensor (detector or counter) behind the hardware adapter.
    Hardware(HardwareStepAdapter),
    /// Accelerometer-derived detection: gravity suppression followed by
    /// strict peak detection.
    Accelerometer {
        /// Gravity/bias removal stage.
        filter: GravityFilter,
        /// Peak detection stage.
        detector: PeakStepDetector,
    },
}

impl StepSource {
    /// Select a source from the reported capabilities.
    ///
    /// Returns [`SignalError::NoStepCapability`] when no sensing path is
    /// available; the caller decides whether to run manual-only.
    pub fn select(caps: &SensorCapability) -> Result<Self, SignalError> {
        if caps.has_step_detector {
            tracing::debug!("using native step detector");
            Ok(Self::Hardware(HardwareStepAdapter::new(
                HardwareSensorKind::Detector,
            )))
        } else if caps.has_step_counter {
            tracing::debug!("using native step counter");
            Ok(Self::Hardware(HardwareStepAdapter::new(
                HardwareSensorKind::Counter,
            )))
        } else if caps.has_accelerometer {
            tracing::debug!("no native step sensor, falling back to accelerometer");
            Ok(Self::Accelerometer {
                filter: GravityFilter::default(),
                detector: PeakStepDetector::new(PeakDetectorConfig::strict()),
            })
        } else {
            Err(SignalError::NoStepCapability)
        }
    }

    /// Route one raw sensor input through the selected strategy.
    ///
    /// Input that does not match the selected variant is ignored.
    pub fn observe(&mut self, input: &SensorInput) -> Option<StepSignal> {
        match (self, input) {
            (Self::Hardware(adapter), SensorInput::Hardware(event)) => adapter.observe(event),
            (Self::Accelerometer { filter, detector }, SensorInput::Acceleration(sample)) => {
                let linear = filter.apply(sample);
                detector.observe(&linear, sample.timestamp_ns)
            }
            _ => {
                tracing::trace!("sensor input does not match selected source, ignored");
                None
            }
        }
    }

    /// Clear all internal state: gravity estimate, peak phase, counter
    /// baseline and debounce timing.
    pub fn reset(&mut self) {
        match self {
            Self::Hardware(adapter) => adapter.reset(),
            Self::Accelerometer { filter, detector } => {
                filter.reset();
                detector.reset();
            }
        }
    }
}
