//! Error types for the STEELCORE pipeline.
//!
//! All fallible operations in the STEELCORE crates return `SteelResult<T>`.
//! Error variants carry enough context to produce actionable operational
//! log entries. Note that lookup misses and unclassified queries are NOT
//! errors — they are ordinary router answers (see steelcore-agent).

use thiserror::Error;

/// The unified error type for the STEELCORE crates.
#[derive(Debug, Error)]
pub enum SteelError {
    /// The input dataset file does not exist.
    ///
    /// Recoverable: the data layer seeds a built-in dataset instead of
    /// failing, so this variant only surfaces when seeding itself fails.
    #[error("dataset not found: {path}")]
    DatasetMissing { path: String },

    /// A dataset row or amount could not be parsed.
    #[error("dataset parse error: {reason}")]
    DatasetParse { reason: String },

    /// The audit logger could not persist an event.
    ///
    /// Recovered locally by the logger: it reports to the operational
    /// channel and returns the `AUDIT_FAILURE` sentinel. Query callers
    /// never see this variant.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// The audit log file could not be parsed during verification.
    #[error("audit log corrupted: {reason}")]
    LogCorrupted { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the STEELCORE crates.
pub type SteelResult<T> = Result<T, SteelError>;
