//! Peak-based step detection.
//!
//! Consumes bias-free acceleration vectors and emits one step signal per
//! local maximum of the magnitude, gated by an amplitude threshold, a
//! step-confirmation threshold and a refractory period. The refractory
//! period is a hard de-bounce: two accepted steps can never be closer
//! together than the configured minimum interval.

use crate::types::{LinearAcceleration, StepSignal};

/// Minimum interval between two accepted steps in nanoseconds.
pub const DEFAULT_MIN_STEP_INTERVAL_NS: u64 = 250_000_000;

/// Configuration for the peak-based step detector.
#[derive(Debug, Clone)]
pub struct PeakDetectorConfig {
    /// Magnitudes at or below this value are recorded but not phase-tracked.
    pub amplitude_threshold: f32,
    /// A peak magnitude must exceed this value to count as a step.
    pub step_threshold: f32,
    /// Minimum time between accepted steps (nanoseconds).
    pub min_step_interval_ns: u64,
}

impl Default for PeakDetectorConfig {
    fn default() -> Self {
        Self {
            amplitude_threshold: 10.0,
            step_threshold: 6.0,
            min_step_interval_ns: DEFAULT_MIN_STEP_INTERVAL_NS,
        }
    }
}

impl PeakDetectorConfig {
    /// Strict thresholds for the unfiltered-accelerometer fallback path.
    ///
    /// Raises the rise gate to 15.0 and the confirmation threshold to
    /// 18.0 to cut false positives when no native step sensor is present.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            amplitude_threshold: 15.0,
            step_threshold: 18.0,
            min_step_interval_ns: DEFAULT_MIN_STEP_INTERVAL_NS,
        }
    }
}

/// Local-maximum step detector over a magnitude stream.
///
/// A step is emitted only on a descending transition from a magnitude
/// that exceeded the step threshold, and only when the time since the
/// previous accepted step exceeds the minimum interval.
pub struct PeakStepDetector {
    config: PeakDetectorConfig,
    /// Magnitude of the previous sample, `None` before the first sample.
    last_magnitude: Option<f32>,
    /// Whether the magnitude is currently in an ascending phase.
    ascending: bool,
    /// Timestamp of the last accepted step, `None` before the first.
    last_step_ns: Option<u64>,
}

impl Default for PeakStepDetector {
    fn default() -> Self {
        Self::new(PeakDetectorConfig::default())
    }
}

impl PeakStepDetector {
    /// Create a detector with the given configuration.
    #[must_use]
    pub fn new(config: PeakDetectorConfig) -> Self {
        Self {
            config,
            last_magnitude: None,
            ascending: false,
            last_step_ns: None,
        }
    }

    /// Observe one bias-free acceleration vector.
    ///
    /// Returns `Some(StepSignal::Increment(1))` when a qualifying peak is
    /// detected, `None` otherwise. The very first sample has no prior
    /// magnitude to compare against and never emits.
    pub fn observe(
        &mut self,
        accel: &LinearAcceleration,
        timestamp_ns: u64,
    ) -> Option<StepSignal> {
        let magnitude = accel.magnitude();

        if magnitude <= self.config.amplitude_threshold {
            // Below the gate: keep the magnitude current, no phase tracking.
            self.last_magnitude = Some(magnitude);
            return None;
        }

        let Some(last) = self.last_magnitude else {
            self.last_magnitude = Some(magnitude);
            return None;
        };

        let mut signal = None;

        if magnitude > last && !self.ascending {
            self.ascending = true;
        } else if magnitude < last && self.ascending {
            // Descending transition: `last` was a local maximum.
            if last > self.config.step_threshold && self.interval_elapsed(timestamp_ns) {
                self.last_step_ns = Some(timestamp_ns);
                signal = Some(StepSignal::Increment(1));
                tracing::debug!(peak = last, timestamp_ns, "step detected");
            } else {
                tracing::trace!(peak = last, timestamp_ns, "peak rejected");
            }
            self.ascending = false;
        }

        self.last_magnitude = Some(magnitude);
        signal
    }

    /// Clear all phase and timing state.
    ///
    /// After a reset the next sample cannot trigger a step from stale
    /// phase state.
    pub fn reset(&mut self) {
        self.last_magnitude = None;
        self.ascending = false;
        self.last_step_ns = None;
    }

    /// Detector configuration.
    #[must_use]
    pub fn config(&self) -> &PeakDetectorConfig {
        &self.config
    }

    fn interval_elapsed(&self, timestamp_ns: u64) -> bool {
        match self.last_step_ns {
            Some(last) => timestamp_ns.saturating_sub(last) > self.config.min_step_interval_ns,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    fn vec_z(magnitude: f32) -> LinearAcceleration {
        LinearAcceleration { x: 0.0, y: 0.0, z: magnitude }
    }

    /// Feed a magnitude sequence spaced `spacing_ms` apart and count steps.
    fn run(detector: &mut PeakStepDetector, magnitudes: &[f32], spacing_ms: u64) -> usize {
        magnitudes
            .iter()
            .enumerate()
            .filter(|&(i, &m)| {
                detector
                    .observe(&vec_z(m), (i as u64 + 1) * spacing_ms * MS)
                    .is_some()
            })
            .count()
    }

    #[test]
    fn sub_threshold_sequence_emits_nothing() {
        let mut detector = PeakStepDetector::default();
        let quiet: Vec<f32> = (0..200).map(|i| 2.0 + (i as f32 * 0.3).sin()).collect();
        assert_eq!(run(&mut detector, &quiet, 20), 0);
    }

    #[test]
    fn first_sample_never_emits() {
        let mut detector = PeakStepDetector::default();
        assert!(detector.observe(&vec_z(25.0), MS).is_none());
    }

    #[test]
    fn single_clean_peak_emits_one_step() {
        let mut detector = PeakStepDetector::default();
        // rise-then-fall above both thresholds
        assert_eq!(run(&mut detector, &[11.0, 14.0, 12.0], 100), 1);
    }

    #[test]
    fn one_step_per_peak_when_spaced() {
        let mut detector = PeakStepDetector::default();
        // Three clean peaks, 400 ms between peaks
        let pattern = [11.0, 14.0, 11.5, 11.0, 14.0, 11.5, 11.0, 14.0, 11.5];
        assert_eq!(run(&mut detector, &pattern, 200), 3);
    }

    #[test]
    fn refractory_period_suppresses_fast_peaks() {
        let mut detector = PeakStepDetector::default();
        // Peaks every ~100 ms: far inside the 250 ms refractory period
        let pattern = [11.0, 14.0, 11.5, 14.0, 11.5, 14.0, 11.5];
        let steps = run(&mut detector, &pattern, 50);
        assert!(
            (1..=2).contains(&steps),
            "refractory period should reject fast peaks, got {steps}"
        );
    }

    #[test]
    fn accepted_steps_are_never_closer_than_min_interval() {
        let mut detector = PeakStepDetector::default();
        let mut accepted = Vec::new();
        // Dense peak train, one sample per 40 ms
        for i in 0..100u64 {
            let m = if i % 2 == 0 { 11.0 } else { 14.0 };
            let t = (i + 1) * 40 * MS;
            if detector.observe(&vec_z(m), t).is_some() {
                accepted.push(t);
            }
        }
        for pair in accepted.windows(2) {
            assert!(
                pair[1] - pair[0] > DEFAULT_MIN_STEP_INTERVAL_NS,
                "steps closer than the minimum interval: {} and {}",
                pair[0],
                pair[1],
            );
        }
    }

    #[test]
    fn peak_below_step_threshold_is_rejected() {
        let mut detector = PeakStepDetector::new(PeakDetectorConfig {
            amplitude_threshold: 10.0,
            step_threshold: 20.0,
            min_step_interval_ns: DEFAULT_MIN_STEP_INTERVAL_NS,
        });
        // Peak of 14.0 passes the amplitude gate but not the 20.0 confirmation
        assert_eq!(run(&mut detector, &[11.0, 14.0, 12.0], 200), 0);
    }

    #[test]
    fn below_gate_sample_updates_magnitude_without_phase() {
        let mut detector = PeakStepDetector::default();
        // Start ascending above the gate
        detector.observe(&vec_z(11.0), 100 * MS);
        detector.observe(&vec_z(14.0), 200 * MS);
        // Drop below the gate: magnitude recorded, no peak emitted
        assert!(detector.observe(&vec_z(3.0), 300 * MS).is_none());
    }

    #[test]
    fn reset_clears_phase_state() {
        let mut detector = PeakStepDetector::default();
        // Prime an ascending phase
        detector.observe(&vec_z(11.0), 100 * MS);
        detector.observe(&vec_z(14.0), 200 * MS);
        detector.reset();
        // A falling sample right after reset is a first sample again
        assert!(detector.observe(&vec_z(12.0), 300 * MS).is_none());
    }

    #[test]
    fn strict_config_rejects_moderate_peaks() {
        let mut detector = PeakStepDetector::new(PeakDetectorConfig::strict());
        // A 16.0 peak passes the 15.0 gate but not the 18.0 confirmation
        assert_eq!(run(&mut detector, &[15.5, 16.0, 15.2], 200), 0);
        // A 20.0 peak passes both
        assert_eq!(run(&mut detector, &[15.5, 20.0, 15.2], 200), 1);
    }
}
