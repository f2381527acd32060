use std::fmt;

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// A UTC timestamp with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Timestamp out of range: {0}")]
pub struct OutOfRangeError(i64);

impl Timestamp {
    pub fn now() -> Self {
        let now = OffsetDateTime::now_utc();
        let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        // Truncating to milliseconds keeps the value stable when
        // it is stored and loaded again.
        Self::try_from_millis(millis).unwrap_or(Self(now))
    }

    pub fn try_from_millis(millis: i64) -> Result<Self, OutOfRangeError> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .map(Self)
            .map_err(|_| OutOfRangeError(millis))
    }

    pub fn try_from_secs(secs: i64) -> Result<Self, OutOfRangeError> {
        secs.checked_mul(1_000)
            .ok_or(OutOfRangeError(secs))
            .and_then(Self::try_from_millis)
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::try_from_millis(t1.as_millis()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn secs_and_millis_agree() {
        let t = Timestamp::try_from_secs(1_394_990_084).unwrap();
        assert_eq!(1_394_990_084_000, t.as_millis());
        assert_eq!("2014-03-16T17:14:44Z", t.to_string());
    }
}
