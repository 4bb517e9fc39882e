//! Error types for the steptrack-signal crate.

use thiserror::Error;

/// Errors that can occur while selecting or driving a step source.
///
/// Invalid user input is by contract a silent no-op, not an error; the
/// only failure the core surfaces is a degraded sensing capability that
/// the caller must decide how to handle (fall back to manual-only mode,
/// prompt the user, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// No step detector, step counter, or accelerometer is available.
    #[error("no step sensing capability available: step detector, step counter and accelerometer are all absent")]
    NoStepCapability,
}
