//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type rendered as ISO 8601
//! with `Z` suffix, truncated to seconds precision.
//!
//! ## Invariant
//!
//! Audit chain digests cover the rendered timestamp of each record, so
//! the textual form must be deterministic: always UTC, always `Z`, no
//! sub-second components. Non-UTC inputs are rejected at construction;
//! there is no silent conversion.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO 8601 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO 8601 string.
    ///
    /// Only timestamps with the `Z` suffix are accepted. Explicit offsets
    /// like `+00:00` or `+05:30` are rejected, even though `+00:00` is
    /// semantically equivalent to `Z`, so that rendered forms are
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-`Z` timezone offset.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp {
                input: s.to_string(),
                reason: "must use Z suffix (UTC only)".to_string(),
            });
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| CoreError::InvalidTimestamp {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Render as ISO 8601 with `Z` suffix: `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    // with_nanosecond(0) only fails for out-of-range values; 0 is in range.
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Tests ───────────────────────────────────────────────────────────
