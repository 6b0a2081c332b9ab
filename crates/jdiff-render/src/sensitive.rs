//! Sensitive-value detection.
//!
//! Audit records arrive with sensitive fields already masked or redacted by
//! the backend. The classifier recognizes those output formats so the
//! renderer can badge the value instead of presenting it as ordinary data.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a sensitive value was sanitized upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitiveKind {
    /// Partially or fully replaced by mask characters (`t***@example.com`).
    Masked,
    /// Removed entirely (`[REDACTED]`).
    Redacted,
}

static REDACTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[REDACTED\]|^REDACTED$").expect("redaction pattern"));

static MASKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{3,}|^XXX-XX-").expect("mask pattern"));

/// Classify a leaf value. Only strings can be sensitive.
pub fn detect_sensitive(value: &Value) -> Option<SensitiveKind> {
    let s = value.as_str()?;
    if REDACTED.is_match(s) {
        Some(SensitiveKind::Redacted)
    } else if MASKED.is_match(s) {
        Some(SensitiveKind::Masked)
    } else {
        None
    }
}
