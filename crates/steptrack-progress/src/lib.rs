//! # steptrack-progress
//!
//! Daily step progress aggregation: folds the [`StepSignal`] stream from
//! `steptrack-signal` (and manual user entries) into a session step
//! count, a goal-reached flag and a per-day history ledger.
//!
//! # Architecture
//!
//! - [`StepAggregator`]: owns the session count and daily goal; every
//!   mutation recomputes `goal_reached` and upserts today's ledger entry
//!   before returning, so observers always see a consistent snapshot.
//! - [`ProgressLedger`]: one [`DailyProgress`] entry per calendar day,
//!   newest first, idempotent upserts. Entries serialize 1:1 onto the
//!   external persistence record `{date, steps, goalAchieved}` with an
//!   ISO-8601 date string key.
//! - [`StepTracker`]: facade wiring a capability-selected step source
//!   into the aggregator, with the sensing enable/disable lifecycle and
//!   the read-only [`TrackerSnapshot`] surface for the UI.
//!
//! The core never reads the clock: "today" is an explicit
//! [`chrono::NaiveDate`] argument on every ledger-touching operation.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use steptrack_progress::{StepTracker, TrackerConfig};
//! use steptrack_signal::SensorCapability;
//!
//! let mut tracker = StepTracker::new(
//!     SensorCapability::accelerometer_only(),
//!     TrackerConfig::default(),
//! );
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//!
//! assert!(tracker.add_manual_entry("4000", today));
//! assert!(!tracker.snapshot().goal_reached);
//! assert!(tracker.add_manual_entry("1000", today));
//! assert!(tracker.snapshot().goal_reached);
//! assert_eq!(tracker.history()[0].steps, 5000);
//! ```
//!
//! [`StepSignal`]: steptrack_signal::StepSignal

pub mod aggregator;
pub mod ledger;
pub mod tracker;

pub use aggregator::{StepAggregator, DEFAULT_DAILY_GOAL};
pub use ledger::{DailyProgress, ProgressLedger};
pub use tracker::{StepTracker, TrackerConfig, TrackerSnapshot};
