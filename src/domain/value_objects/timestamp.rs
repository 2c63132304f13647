//! # Timestamp Value Object
//!
//! UTC timestamp wrapper with the trading-log line format.
//!
//! Log emission uses `YYYY-MM-DD HH:MM:SS.mmm ` (zero-padded milliseconds,
//! trailing space), produced by [`Timestamp::to_log_format`].

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp with millisecond-level accessors.
///
/// # Examples
///
/// ```
/// use bond_fabric::domain::value_objects::timestamp::Timestamp;
///
/// let ts = Timestamp::from_millis(1_704_067_200_123).unwrap();
/// assert_eq!(ts.to_log_format(), "2024-01-01 00:00:00.123 ");
/// assert_eq!(ts.millis_of_second(), 123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Log line timestamp format: `YYYY-MM-DD HH:MM:SS.mmm `.
    pub const LOG_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.3f ";

    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of the representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the Unix timestamp in seconds.
    #[inline]
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the millisecond component within the current second (0..999).
    #[inline]
    #[must_use]
    pub fn millis_of_second(&self) -> i64 {
        i64::from(self.0.nanosecond() / 1_000_000) % 1_000
    }

    /// Formats the timestamp for log emission.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS.mmm ` with a trailing space so the
    /// message body can be appended directly.
    #[must_use]
    pub fn to_log_format(&self) -> String {
        self.0.format(Self::LOG_FORMAT).to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_log_format().trim_end())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
