//! Audit log verification.
//!
//! Every stored entry carries its own content hash, so the whole file can
//! be re-checked offline: strip `audit_id` from each line, re-serialize
//! the remainder with sorted keys, hash, and compare. Any edit to a stored
//! entry — even a single byte — shows up as a mismatch on that line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use steelcore_contracts::{SteelError, SteelResult};

use crate::hash::content_hash;

/// The parsed first line of a log file.
#[derive(Debug, Clone, Deserialize)]
pub struct LogHeader {
    pub system: String,
    pub timestamp: DateTime<Utc>,
}

/// One entry whose stored id does not match its recomputed hash.
#[derive(Debug, Clone)]
pub struct LineMismatch {
    /// 1-based line number in the file.
    pub line: usize,
    /// The id stored on that line.
    pub stored: String,
    /// The id recomputed from the line's content.
    pub computed: String,
}

/// The result of verifying a whole log file.
#[derive(Debug)]
pub struct LogReport {
    pub header: LogHeader,
    /// Number of audit entries checked (header excluded).
    pub entries: usize,
    pub mismatches: Vec<LineMismatch>,
}

impl LogReport {
    /// True when every entry's stored id matched its recomputed hash.
    pub fn is_valid(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Re-check every entry of the log file at `path`.
///
/// Structural problems (unreadable file, non-JSON line, missing header or
/// `audit_id`) are `LogCorrupted` errors; a well-formed entry whose hash
/// does not match is reported in the `LogReport` instead.
pub fn verify_log(path: &Path) -> SteelResult<LogReport> {
    let file = File::open(path).map_err(|e| SteelError::LogCorrupted {
        reason: format!("cannot open {}: {}", path.display(), e),
    })?;
    let reader = BufReader::new(file);

    let mut header: Option<LogHeader> = None;
    let mut entries = 0usize;
    let mut mismatches = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.map_err(|e| SteelError::LogCorrupted {
            reason: format!("read failed at line {}: {}", lineno, e),
        })?;
        if line.trim().is_empty() {
            continue;
        }

        if idx == 0 {
            let parsed: LogHeader =
                serde_json::from_str(&line).map_err(|e| SteelError::LogCorrupted {
                    reason: format!("bad header: {}", e),
                })?;
            header = Some(parsed);
            continue;
        }

        let value: Value = serde_json::from_str(&line).map_err(|e| SteelError::LogCorrupted {
            reason: format!("line {} is not JSON: {}", lineno, e),
        })?;
        let Value::Object(mut fields) = value else {
            return Err(SteelError::LogCorrupted {
                reason: format!("line {} is not a JSON object", lineno),
            });
        };

        let stored = match fields.remove("audit_id") {
            Some(Value::String(id)) => id,
            _ => {
                return Err(SteelError::LogCorrupted {
                    reason: format!("line {} has no audit_id", lineno),
                })
            }
        };

        // What remains is exactly the hashed event content; Map is
        // BTreeMap-backed, so re-serialization reproduces the canonical
        // sorted-key form.
        let canonical =
            serde_json::to_string(&Value::Object(fields)).map_err(|e| {
                SteelError::LogCorrupted {
                    reason: format!("line {} re-serialization failed: {}", lineno, e),
                }
            })?;
        let computed = content_hash(canonical.as_bytes());

        entries += 1;
        if stored != computed {
            mismatches.push(LineMismatch {
                line: lineno,
                stored,
                computed,
            });
        }
    }

    let header = header.ok_or_else(|| SteelError::LogCorrupted {
        reason: "log file has no header line".to_string(),
    })?;

    Ok(LogReport {
        header,
        entries,
        mismatches,
    })
}
