//! Daily progress history ledger.
//!
//! One entry per calendar day, keyed by date. Today's entry is
//! overwritten in place on every update; past entries are immutable.
//! The ledger never reads the clock: "today" is always supplied by the
//! caller, so the core stays deterministic and testable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress for one calendar day.
///
/// Serializes with an ISO-8601 date string, matching the external
/// persistence record `{date, steps, goalAchieved}` 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    /// The calendar date (unique key).
    pub date: NaiveDate,
    /// Step count at the time of the last update that day.
    pub steps: u32,
    /// Whether the daily goal was reached.
    #[serde(rename = "goalAchieved")]
    pub goal_achieved: bool,
}

/// Date-keyed collection of daily progress entries, newest first.
#[derive(Debug, Clone, Default)]
pub struct ProgressLedger {
    /// Entries sorted by date descending; no duplicate dates.
    entries: Vec<DailyProgress>,
}

impl ProgressLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a ledger from externally persisted entries.
    ///
    /// Duplicate dates keep the last occurrence; the result is sorted
    /// newest first.
    #[must_use]
    pub fn from_entries(entries: Vec<DailyProgress>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.upsert(entry.date, entry.steps, entry.goal_achieved);
        }
        ledger
    }

    /// Insert or replace the entry for `date`.
    ///
    /// Idempotent: a second call with identical arguments leaves the
    /// ledger in the same observable state.
    pub fn upsert(&mut self, date: NaiveDate, steps: u32, goal_achieved: bool) {
        self.entries.retain(|e| e.date != date);
        self.entries.push(DailyProgress { date, steps, goal_achieved });
        self.entries.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    }

    /// All entries, sorted by date descending.
    #[must_use]
    pub fn history(&self) -> &[DailyProgress] {
        &self.entries
    }

    /// Entries whose date falls within the last `days` days (inclusive
    /// of `today`), sorted by date descending.
    #[must_use]
    pub fn within_days(&self, days: u32, today: NaiveDate) -> Vec<DailyProgress> {
        let cutoff = today - chrono::Duration::days(i64::from(days));
        self.entries
            .iter()
            .filter(|e| e.date > cutoff && e.date <= today)
            .copied()
            .collect()
    }

    /// The entry for a specific date, if present.
    #[must_use]
    pub fn entry_for(&self, date: NaiveDate) -> Option<&DailyProgress> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries (explicit external purge).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
