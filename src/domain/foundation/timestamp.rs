//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// RFC 3339 representation used in API payloads.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Human-readable form used in report headers.
    pub fn to_report_string(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// Calendar date, used for download file names.
    pub fn date_stamp(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap())
    }

    #[test]
    fn report_string_is_stable() {
        assert_eq!(fixed().to_report_string(), "2024-03-05 14:07:09 UTC");
    }

    #[test]
    fn date_stamp_has_no_time() {
        assert_eq!(fixed().date_stamp(), "2024-03-05");
    }

    #[test]
    fn ordering_follows_time() {
        let earlier = fixed();
        let later = Timestamp::from_datetime(*earlier.as_datetime() + chrono::Duration::seconds(1));
        assert!(earlier < later);
    }
}
