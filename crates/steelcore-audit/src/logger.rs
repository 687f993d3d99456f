//! The file-backed audit logger.
//!
//! One JSON object per line, append-only. Line 1 is the header record
//! `{system, timestamp}`; every later line is `{audit_id, ...event}` with
//! keys sorted. Each append is a short-lived open/write/close guarded by
//! an in-process mutex — the logger is `Send + Sync`, but concurrent
//! *processes* appending to the same file are not coordinated. Deployments
//! must keep a single writer per log file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use steelcore_contracts::{ActionType, AuditEvent, SteelError, SteelResult};

use crate::hash::{canonical_json, content_hash, AUDIT_FAILURE};
use crate::ops::{OpsChannel, TracingChannel};

/// The system name written into every log header.
pub const SYSTEM_NAME: &str = "Steel Core";

/// Append-only audit logger for one JSONL file.
///
/// Logging is best-effort, not transactional with computation: when an
/// append fails, the failure is reported on the operational channel and
/// [`log_event`](AuditLogger::log_event) returns the [`AUDIT_FAILURE`]
/// sentinel — callers still hand their computed result to the user.
pub struct AuditLogger {
    path: PathBuf,
    ops: Arc<dyn OpsChannel>,
    // Serializes appends from this process. No cross-process locking.
    append: Mutex<()>,
}

impl AuditLogger {
    /// Open (or create) the log at `path`, reporting operational messages
    /// via `tracing`.
    pub fn new(path: impl Into<PathBuf>) -> SteelResult<Self> {
        Self::with_ops(path, Arc::new(TracingChannel))
    }

    /// Open (or create) the log at `path` with an injected operational
    /// channel.
    ///
    /// Idempotent: if the file already exists it is left untouched — the
    /// header is written exactly once, at creation.
    pub fn with_ops(path: impl Into<PathBuf>, ops: Arc<dyn OpsChannel>) -> SteelResult<Self> {
        let logger = Self {
            path: path.into(),
            ops,
            append: Mutex::new(()),
        };
        logger.initialize()?;
        Ok(logger)
    }

    fn initialize(&self) -> SteelResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| SteelError::AuditWriteFailed {
                    reason: format!("cannot create log directory: {}", e),
                })?;
            }
        }

        let header = json!({ "system": SYSTEM_NAME, "timestamp": Utc::now() });
        let mut line = serde_json::to_string(&header).map_err(|e| SteelError::AuditWriteFailed {
            reason: format!("header serialization failed: {}", e),
        })?;
        line.push('\n');

        fs::write(&self.path, line).map_err(|e| SteelError::AuditWriteFailed {
            reason: format!("cannot create log file: {}", e),
        })?;

        info!(path = %self.path.display(), "audit log created");
        Ok(())
    }

    /// The log file this logger appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one router decision; returns its audit id.
    ///
    /// Exactly one line is appended per successful call; none on failure.
    /// On an I/O failure the error goes to the operational channel and the
    /// returned string is the `AUDIT_FAILURE` sentinel instead of an id.
    pub fn log_event(
        &self,
        action_type: ActionType,
        inputs: Value,
        result: Value,
        source: &str,
    ) -> String {
        let event = AuditEvent::now(action_type, inputs, result, source);
        match self.append_event(&event) {
            Ok(audit_id) => audit_id,
            Err(e) => {
                self.ops.error(&e.to_string());
                AUDIT_FAILURE.to_string()
            }
        }
    }

    /// Hash the event, wrap it with its id, and append the line.
    fn append_event(&self, event: &AuditEvent) -> SteelResult<String> {
        let canonical = canonical_json(event)?;
        let audit_id = content_hash(canonical.as_bytes());

        // The stored line carries the id alongside the hashed fields, keys
        // sorted again so consumers can re-derive the id byte-for-byte.
        let mut entry = match serde_json::to_value(event) {
            Ok(Value::Object(map)) => map,
            Ok(_) => unreachable!("AuditEvent serializes to a JSON object"),
            Err(e) => {
                return Err(SteelError::AuditWriteFailed {
                    reason: format!("entry serialization failed: {}", e),
                })
            }
        };
        entry.insert("audit_id".to_string(), Value::String(audit_id.clone()));

        let mut line =
            serde_json::to_string(&Value::Object(entry)).map_err(|e| {
                SteelError::AuditWriteFailed {
                    reason: format!("entry serialization failed: {}", e),
                }
            })?;
        line.push('\n');

        let _guard = self.append.lock().map_err(|_| SteelError::AuditWriteFailed {
            reason: "append lock poisoned".to_string(),
        })?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| SteelError::AuditWriteFailed {
                reason: format!("cannot open log file: {}", e),
            })?;

        // One write_all for the whole line: the append is all-or-nothing
        // from this process's point of view.
        file.write_all(line.as_bytes())
            .map_err(|e| SteelError::AuditWriteFailed {
                reason: format!("append failed: {}", e),
            })?;

        Ok(audit_id)
    }
}
