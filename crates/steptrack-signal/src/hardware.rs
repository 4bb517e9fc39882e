//! Hardware step sensor adapter.
//!
//! Normalizes native step-detector ("+1 per step") and step-counter
//! ("cumulative since boot") events into the common [`StepSignal`]
//! stream. Detector events are debounced; counter events are rebased
//! against a baseline armed on the first event of a session, so the
//! externally visible delta is always `max(0, value - baseline)`.

use crate::types::{HardwareSensorKind, HardwareStepEvent, StepSignal};

/// Debounce window for detector-mode events in nanoseconds.
pub const DEFAULT_DEBOUNCE_NS: u64 = 250_000_000;

/// Adapter from native step sensor events to step signals.
pub struct HardwareStepAdapter {
    /// Which native sensor this adapter consumes.
    kind: HardwareSensorKind,
    /// Cumulative-counter baseline; `None` until the first counter event.
    baseline: Option<f32>,
    /// Last absolute count reported in counter mode.
    last_reported: u32,
    /// Timestamp of the last accepted detector event.
    last_event_ns: Option<u64>,
    /// Detector-mode debounce window.
    debounce_ns: u64,
}

impl HardwareStepAdapter {
    /// Create an adapter for the given sensor kind with the default
    /// debounce window.
    #[must_use]
    pub fn new(kind: HardwareSensorKind) -> Self {
        Self::with_debounce(kind, DEFAULT_DEBOUNCE_NS)
    }

    /// Create an adapter with a custom detector-mode debounce window.
    #[must_use]
    pub fn with_debounce(kind: HardwareSensorKind, debounce_ns: u64) -> Self {
        Self {
            kind,
            baseline: None,
            last_reported: 0,
            last_event_ns: None,
            debounce_ns,
        }
    }

    /// Observe one native event and normalize it into a step signal.
    ///
    /// Events whose kind does not match this adapter are ignored.
    pub fn observe(&mut self, event: &HardwareStepEvent) -> Option<StepSignal> {
        if event.kind != self.kind {
            tracing::trace!(event_kind = ?event.kind, adapter = ?self.kind, "event kind mismatch, ignored");
            return None;
        }
        match self.kind {
            HardwareSensorKind::Detector => self.observe_detector(event),
            HardwareSensorKind::Counter => self.observe_counter(event),
        }
    }

    /// Invalidate the counter baseline and debounce state.
    ///
    /// Must be called whenever the counting session is reset; the next
    /// counter event re-arms the baseline instead of producing a delta.
    pub fn reset(&mut self) {
        self.baseline = None;
        self.last_reported = 0;
        self.last_event_ns = None;
    }

    /// The sensor kind this adapter consumes.
    #[must_use]
    pub fn kind(&self) -> HardwareSensorKind {
        self.kind
    }

    /// Current counter baseline, if armed.
    #[must_use]
    pub fn baseline(&self) -> Option<f32> {
        self.baseline
    }

    fn observe_detector(&mut self, event: &HardwareStepEvent) -> Option<StepSignal> {
        if let Some(last) = self.last_event_ns {
            if event.timestamp_ns.saturating_sub(last) <= self.debounce_ns {
                tracing::trace!(timestamp_ns = event.timestamp_ns, "detector event debounced");
                return None;
            }
        }
        // Batched events carry a float step count; round, at least 1.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (event.value.round().max(1.0)) as u32;
        self.last_event_ns = Some(event.timestamp_ns);
        tracing::debug!(steps, "detector step event");
        Some(StepSignal::Increment(steps))
    }

    fn observe_counter(&mut self, event: &HardwareStepEvent) -> Option<StepSignal> {
        let Some(baseline) = self.baseline else {
            self.baseline = Some(event.value);
            tracing::debug!(baseline = event.value, "counter baseline armed");
            return None;
        };

        if event.value < baseline {
            // Counter rollback (device reboot): re-arm, no step change.
            self.baseline = Some(event.value);
            tracing::debug!(
                old_baseline = baseline,
                new_baseline = event.value,
                "counter rollback, baseline re-armed"
            );
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delta = (event.value - baseline) as u32;
        if delta > 0 && delta != self.last_reported {
            self.last_reported = delta;
            tracing::debug!(delta, "counter correction");
            Some(StepSignal::Absolute(delta))
        } else {
            None
        }
    }
}
