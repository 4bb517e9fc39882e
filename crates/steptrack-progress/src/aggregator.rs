//! Session step aggregation.
//!
//! Owns the current session step count and the daily goal, and pushes
//! every recomputed state into the progress ledger for "today" before
//! returning. Observers therefore never see a count without its matching
//! goal-reached flag and ledger entry.

use chrono::NaiveDate;
use steptrack_signal::StepSignal;

use crate::ledger::ProgressLedger;

/// Default daily step goal.
pub const DEFAULT_DAILY_GOAL: u32 = 5000;

/// Session step count, daily goal and derived goal-reached state.
pub struct StepAggregator {
    /// Current session step count.
    steps: u32,
    /// Daily goal (always positive).
    daily_goal: u32,
    /// Derived: `steps >= daily_goal`.
    goal_reached: bool,
    /// Per-day history, updated synchronously on every mutation.
    ledger: ProgressLedger,
}

impl Default for StepAggregator {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_GOAL)
    }
}

impl StepAggregator {
    /// Create an aggregator with the given daily goal.
    ///
    /// A zero goal falls back to the default.
    #[must_use]
    pub fn new(daily_goal: u32) -> Self {
        Self {
            steps: 0,
            daily_goal: if daily_goal == 0 { DEFAULT_DAILY_GOAL } else { daily_goal },
            goal_reached: false,
            ledger: ProgressLedger::new(),
        }
    }

    /// Create an aggregator with a restored history ledger.
    #[must_use]
    pub fn with_ledger(daily_goal: u32, ledger: ProgressLedger) -> Self {
        Self {
            ledger,
            ..Self::new(daily_goal)
        }
    }

    /// Add a positive number of steps. Zero is a no-op.
    pub fn add_steps(&mut self, n: u32, today: NaiveDate) {
        if n == 0 {
            return;
        }
        self.steps = self.steps.saturating_add(n);
        self.update_progress(today);
    }

    /// Parse a manual step entry from user text.
    ///
    /// Non-numeric, negative or zero input is silently rejected; the
    /// visible count is unchanged and nothing panics. Returns whether
    /// the entry was applied, so the UI can clear its input buffer.
    pub fn add_manual_entry(&mut self, text: &str, today: NaiveDate) -> bool {
        match text.trim().parse::<u32>() {
            Ok(n) if n > 0 => {
                self.add_steps(n, today);
                true
            }
            _ => {
                tracing::trace!(input = text, "manual step entry rejected");
                false
            }
        }
    }

    /// Apply a step signal from the sensing path.
    pub fn apply_signal(&mut self, signal: StepSignal, today: NaiveDate) {
        match signal {
            StepSignal::Increment(n) => {
                if n == 0 {
                    return;
                }
                self.steps = self.steps.saturating_add(n);
            }
            StepSignal::Absolute(n) => {
                self.steps = n;
            }
        }
        self.update_progress(today);
    }

    /// Reset the session: count to zero, goal-reached cleared.
    ///
    /// The caller is responsible for also resetting any selected step
    /// source so hardware baselines and detector phase are invalidated
    /// (see `StepTracker::reset`).
    pub fn reset(&mut self, today: NaiveDate) {
        self.steps = 0;
        self.goal_reached = false;
        self.update_progress(today);
    }

    /// Replace the daily goal. Zero is rejected; the count is untouched.
    ///
    /// Returns whether the goal was applied.
    pub fn set_daily_goal(&mut self, goal: u32, today: NaiveDate) -> bool {
        if goal == 0 {
            tracing::trace!("zero daily goal rejected");
            return false;
        }
        self.daily_goal = goal;
        self.update_progress(today);
        true
    }

    /// Force an upsert of today's ledger entry with the current state.
    ///
    /// Used to seed a zero-step entry when tracking starts on a new day.
    pub fn refresh(&mut self, today: NaiveDate) {
        self.update_progress(today);
    }

    /// Current session step count.
    #[must_use]
    pub fn current_steps(&self) -> u32 {
        self.steps
    }

    /// Current daily goal.
    #[must_use]
    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    /// Whether the daily goal has been reached.
    #[must_use]
    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// Read-only view of the progress ledger.
    #[must_use]
    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    /// Recompute the goal-reached flag and upsert today's entry.
    ///
    /// Runs synchronously inside every mutating operation so observers
    /// always see count, flag and ledger in agreement.
    fn update_progress(&mut self, today: NaiveDate) {
        let reached = self.steps >= self.daily_goal;
        if reached && !self.goal_reached {
            tracing::debug!(steps = self.steps, goal = self.daily_goal, "daily goal reached");
        }
        self.goal_reached = reached;
        self.ledger.upsert(today, self.steps, reached);
    }
}
