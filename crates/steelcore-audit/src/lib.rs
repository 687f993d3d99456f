//! # steelcore-audit
//!
//! Append-only, content-addressed JSONL audit trail for the STEELCORE
//! finance agent.
//!
//! ## Overview
//!
//! Every decision the router makes is wrapped in an `AuditEvent`, hashed
//! with SHA-256 over its canonical sorted-key JSON, and appended to the
//! log file as a single line carrying the derived 16-hex-char `audit_id`.
//! Editing any stored entry — even a single byte — is detected by
//! `verify_log`, which recomputes every id from the file's own content.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use steelcore_audit::AuditLogger;
//! use steelcore_contracts::ActionType;
//! use serde_json::json;
//!
//! let logger = AuditLogger::new("steel_core_audit.jsonl")?;
//! let audit_id = logger.log_event(
//!     ActionType::CalcProfit,
//!     json!({ "revenue_total": "2250000.00", "cost_total": "1200000.00" }),
//!     json!("1050000.00"),
//!     "finance_data.csv",
//! );
//! ```

pub mod hash;
pub mod logger;
pub mod ops;
pub mod verify;

pub use hash::{audit_id_for, canonical_json, is_audit_id, AUDIT_FAILURE, AUDIT_ID_LEN};
pub use logger::{AuditLogger, SYSTEM_NAME};
pub use ops::{CaptureChannel, OpsChannel, TracingChannel};
pub use verify::{verify_log, LineMismatch, LogHeader, LogReport};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use steelcore_contracts::{ActionType, AuditEvent};

    use super::{
        audit_id_for, is_audit_id, verify_log, AuditLogger, CaptureChannel, AUDIT_FAILURE,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build an event with a pinned timestamp so ids are reproducible.
    fn fixed_event(result: &str) -> AuditEvent {
        AuditEvent {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap(),
            action_type: ActionType::LookupProject,
            inputs: json!({ "search_term": "how is project alpha doing" }),
            result: json!(result),
            source: "finance_data.csv".to_string(),
        }
    }

    fn line_count(path: &std::path::Path) -> usize {
        fs::read_to_string(path).unwrap().lines().count()
    }

    // ── Initialization ────────────────────────────────────────────────────────

    /// Creating the log writes exactly one header line; re-opening an
    /// existing log never writes a second one.
    #[test]
    fn test_init_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        let _first = AuditLogger::new(&path).unwrap();
        assert_eq!(line_count(&path), 1);

        let _second = AuditLogger::new(&path).unwrap();
        assert_eq!(line_count(&path), 1, "re-open must not rewrite the header");

        let report = verify_log(&path).unwrap();
        assert_eq!(report.header.system, "Steel Core");
        assert_eq!(report.entries, 0);
    }

    // ── Append semantics ──────────────────────────────────────────────────────

    /// Each successful log_event appends exactly one line and returns a
    /// well-formed 16-hex-char id.
    #[test]
    fn test_one_line_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = AuditLogger::new(&path).unwrap();

        let id = logger.log_event(
            ActionType::CalcProfit,
            json!({ "revenue_total": "2250000.00", "cost_total": "1200000.00" }),
            json!("1050000.00"),
            "finance_data.csv",
        );
        assert!(is_audit_id(&id), "returned id must be 16 lowercase hex chars");
        assert_eq!(line_count(&path), 2);

        logger.log_event(
            ActionType::LookupFailed,
            json!({ "search_term": "project omega" }),
            json!("Not Found"),
            "finance_data.csv",
        );
        assert_eq!(line_count(&path), 3);
    }

    /// Re-hashing a written entry (sans audit_id) reproduces the id the
    /// call returned — checked across the whole file by verify_log.
    #[test]
    fn test_written_entries_rehash_to_their_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = AuditLogger::new(&path).unwrap();

        let id = logger.log_event(
            ActionType::LookupProject,
            json!({ "search_term": "how is project alpha doing" }),
            json!({ "status": "Active", "revenue": "1000000.00" }),
            "finance_data.csv",
        );

        let last_line = fs::read_to_string(&path).unwrap();
        let last_line = last_line.lines().last().unwrap().to_string();
        assert!(last_line.contains(&id), "stored line must carry the returned id");

        let report = verify_log(&path).unwrap();
        assert_eq!(report.entries, 1);
        assert!(report.is_valid());
    }

    // ── Id determinism ────────────────────────────────────────────────────────

    /// Identical content (timestamp included) hashes to the identical id;
    /// a different timestamp changes it.
    #[test]
    fn test_audit_id_is_content_fingerprint() {
        let a = fixed_event("Not Found");
        let b = fixed_event("Not Found");
        assert_eq!(audit_id_for(&a).unwrap(), audit_id_for(&b).unwrap());

        let mut later = fixed_event("Not Found");
        later.timestamp = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 1).unwrap();
        assert_ne!(audit_id_for(&a).unwrap(), audit_id_for(&later).unwrap());

        let different = fixed_event("Found");
        assert_ne!(audit_id_for(&a).unwrap(), audit_id_for(&different).unwrap());
    }

    // ── Tamper detection ──────────────────────────────────────────────────────

    /// Editing a stored entry's content is reported with its line number.
    #[test]
    fn test_verify_detects_tampering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let logger = AuditLogger::new(&path).unwrap();

        logger.log_event(
            ActionType::LookupFailed,
            json!({ "search_term": "project omega" }),
            json!("Not Found"),
            "finance_data.csv",
        );
        logger.log_event(
            ActionType::CalcProfit,
            json!({ "revenue_total": "2250000.00", "cost_total": "1200000.00" }),
            json!("1050000.00"),
            "finance_data.csv",
        );

        // Rewrite the profit entry's result in place.
        let contents = fs::read_to_string(&path).unwrap();
        let tampered = contents.replace("\"1050000.00\"", "\"9999999.00\"");
        assert_ne!(contents, tampered, "tamper edit must hit the file");
        fs::write(&path, tampered).unwrap();

        let report = verify_log(&path).unwrap();
        assert_eq!(report.entries, 2);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].line, 3);
        assert!(!report.is_valid());
    }

    // ── Failure policy ────────────────────────────────────────────────────────

    /// An unwritable log yields the sentinel, not an error, and the
    /// failure lands on the injected operational channel.
    #[test]
    fn test_append_failure_returns_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("logs");
        let path = sub.join("audit.jsonl");

        let ops = Arc::new(CaptureChannel::new());
        let logger = AuditLogger::with_ops(&path, ops.clone()).unwrap();

        // Pull the file out from under the logger.
        fs::remove_dir_all(&sub).unwrap();

        let id = logger.log_event(
            ActionType::CalcProfit,
            json!({ "revenue_total": "0", "cost_total": "0" }),
            json!("0"),
            "finance_data.csv",
        );

        assert_eq!(id, AUDIT_FAILURE);
        assert!(!is_audit_id(&id), "sentinel must not look like a real id");

        let messages = ops.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("ERROR:"));
        assert!(messages[0].contains("audit write failed"));
    }

    // ── Sentinel format ───────────────────────────────────────────────────────

    #[test]
    fn test_is_audit_id_format() {
        assert!(is_audit_id("0123456789abcdef"));
        assert!(!is_audit_id(AUDIT_FAILURE));
        assert!(!is_audit_id("0123456789ABCDEF"), "uppercase is not a valid id");
        assert!(!is_audit_id("abcdef"), "too short");
        assert!(!is_audit_id("0123456789abcdef0"), "too long");
    }
}
