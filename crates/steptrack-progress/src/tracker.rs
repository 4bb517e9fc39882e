//! Step tracking facade.
//!
//! Wires a capability-selected [`StepSource`] into the [`StepAggregator`]
//! and owns the sensing enable/disable lifecycle. The UI collaborator
//! talks to this type only: manual entries, goal changes, resets and
//! snapshot reads all go through here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use steptrack_signal::{SensorCapability, SensorInput, SignalError, StepSource};

use crate::aggregator::{StepAggregator, DEFAULT_DAILY_GOAL};
use crate::ledger::{DailyProgress, ProgressLedger};

/// Configuration for a [`StepTracker`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Daily step goal.
    pub daily_goal: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { daily_goal: DEFAULT_DAILY_GOAL }
    }
}

/// Read-only view of the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    /// Current session step count.
    pub current_steps: u32,
    /// Configured daily goal.
    pub daily_goal: u32,
    /// Whether the daily goal has been reached.
    pub goal_reached: bool,
}

/// Facade over source selection, aggregation and the progress ledger.
pub struct StepTracker {
    /// Capabilities reported by the platform, used on (re-)enable.
    capability: SensorCapability,
    /// Selected source; `None` while sensing is disabled.
    source: Option<StepSource>,
    aggregator: StepAggregator,
}

impl StepTracker {
    /// Create a tracker with the given capabilities and configuration.
    ///
    /// Sensing starts disabled; enable it with
    /// [`set_use_pedometer`](Self::set_use_pedometer).
    #[must_use]
    pub fn new(capability: SensorCapability, config: TrackerConfig) -> Self {
        Self {
            capability,
            source: None,
            aggregator: StepAggregator::new(config.daily_goal),
        }
    }

    /// Create a tracker with a history ledger restored from persistence.
    #[must_use]
    pub fn with_ledger(
        capability: SensorCapability,
        config: TrackerConfig,
        ledger: ProgressLedger,
    ) -> Self {
        Self {
            capability,
            source: None,
            aggregator: StepAggregator::with_ledger(config.daily_goal, ledger),
        }
    }

    /// Enable or disable the sensing path.
    ///
    /// Enabling selects a step source from the reported capabilities and
    /// fails with [`SignalError::NoStepCapability`] when none is
    /// available, leaving the tracker in manual-only mode. Disabling
    /// drops the source; it is idempotent and safe to call even if
    /// sensing was never started, and no sensor input mutates state
    /// afterwards.
    pub fn set_use_pedometer(&mut self, enabled: bool) -> Result<(), SignalError> {
        if enabled == self.source.is_some() {
            return Ok(());
        }
        if enabled {
            self.source = Some(StepSource::select(&self.capability)?);
            tracing::debug!("sensing enabled");
        } else {
            self.source = None;
            tracing::debug!("sensing disabled");
        }
        Ok(())
    }

    /// Whether the sensing path is currently enabled.
    #[must_use]
    pub fn use_pedometer(&self) -> bool {
        self.source.is_some()
    }

    /// Route one raw sensor input into the session.
    ///
    /// Ignored while sensing is disabled.
    pub fn handle_sensor(&mut self, input: &SensorInput, today: NaiveDate) {
        let Some(source) = self.source.as_mut() else {
            tracing::trace!("sensor input while sensing disabled, ignored");
            return;
        };
        if let Some(signal) = source.observe(input) {
            self.aggregator.apply_signal(signal, today);
        }
    }

    /// Apply a manual step entry from user text.
    ///
    /// Returns whether the entry was applied (see
    /// [`StepAggregator::add_manual_entry`]).
    pub fn add_manual_entry(&mut self, text: &str, today: NaiveDate) -> bool {
        self.aggregator.add_manual_entry(text, today)
    }

    /// Replace the daily goal. Zero is rejected.
    pub fn set_daily_goal(&mut self, goal: u32, today: NaiveDate) -> bool {
        self.aggregator.set_daily_goal(goal, today)
    }

    /// Reset the session.
    ///
    /// Clears the count and goal-reached flag, and resets the selected
    /// source so hardware baselines and detector phase state cannot
    /// trigger a spurious step from the next sample.
    pub fn reset(&mut self, today: NaiveDate) {
        self.aggregator.reset(today);
        if let Some(source) = self.source.as_mut() {
            source.reset();
        }
        tracing::debug!("session reset");
    }

    /// Seed or refresh today's ledger entry with the current state.
    pub fn refresh(&mut self, today: NaiveDate) {
        self.aggregator.refresh(today);
    }

    /// Read-only snapshot of the session state.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            current_steps: self.aggregator.current_steps(),
            daily_goal: self.aggregator.daily_goal(),
            goal_reached: self.aggregator.goal_reached(),
        }
    }

    /// Full progress history, newest first.
    #[must_use]
    pub fn history(&self) -> &[DailyProgress] {
        self.aggregator.ledger().history()
    }

    /// Progress entries from the last `days` days, newest first.
    #[must_use]
    pub fn within_days(&self, days: u32, today: NaiveDate) -> Vec<DailyProgress> {
        self.aggregator.ledger().within_days(days, today)
    }

    /// Read-only view of the underlying ledger (for persistence).
    #[must_use]
    pub fn ledger(&self) -> &ProgressLedger {
        self.aggregator.ledger()
    }
}
