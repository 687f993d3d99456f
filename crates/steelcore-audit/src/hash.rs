//! Content-hash primitives: canonical serialization and audit ids.
//!
//! An audit id commits to the full event content. The canonical form fed
//! into SHA-256 is built explicitly so nothing is accidentally omitted:
//!
//!   1. serialize the `AuditEvent` through `serde_json::Value` — its
//!      object representation is a BTreeMap, so keys come out
//!      lexicographically sorted with no whitespace
//!   2. SHA-256 over the UTF-8 bytes of that string
//!   3. take the first 16 lowercase hex characters
//!
//! The timestamp is part of the hashed content, so the id is a content
//! fingerprint: identical events at the identical instant collide by
//! design.

use sha2::{Digest, Sha256};

use steelcore_contracts::{AuditEvent, SteelError, SteelResult};

/// Length of a valid audit id in hex characters.
pub const AUDIT_ID_LEN: usize = 16;

/// The reserved sentinel returned when an audit append fails.
///
/// Deliberately not valid hex, so callers can distinguish it from a real
/// id by format alone (see [`is_audit_id`]).
pub const AUDIT_FAILURE: &str = "AUDIT_FAILURE";

/// Serialize an event to its canonical (sorted-key, compact) JSON string.
pub fn canonical_json(event: &AuditEvent) -> SteelResult<String> {
    // Routing through Value sorts object keys; serializing the struct
    // directly would emit fields in declaration order instead.
    let value = serde_json::to_value(event).map_err(|e| SteelError::AuditWriteFailed {
        reason: format!("canonical serialization failed: {}", e),
    })?;
    serde_json::to_string(&value).map_err(|e| SteelError::AuditWriteFailed {
        reason: format!("canonical serialization failed: {}", e),
    })
}

/// Compute the audit id for an event: SHA-256 of its canonical JSON,
/// truncated to the first 16 hex characters.
pub fn audit_id_for(event: &AuditEvent) -> SteelResult<String> {
    let canonical = canonical_json(event)?;
    Ok(content_hash(canonical.as_bytes()))
}

/// Hash arbitrary canonical bytes down to a 16-hex-char id.
pub(crate) fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let mut id = hex::encode(hasher.finalize());
    id.truncate(AUDIT_ID_LEN);
    id
}

/// Return true if `s` has the shape of a real audit id: exactly 16
/// lowercase hex characters. The `AUDIT_FAILURE` sentinel fails this.
pub fn is_audit_id(s: &str) -> bool {
    s.len() == AUDIT_ID_LEN && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
