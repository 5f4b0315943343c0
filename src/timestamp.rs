use core::{fmt, time::Duration};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::value::{FromValue, ToValue, Value};

/**
A point in time, measured from the Unix epoch.

Telemetry backends take timestamps as whole milliseconds; that's the
representation [`Timestamp::to_unix_millis`] projects, the form Display
writes, and the value stored under the `timestamp_ms` key.
*/
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(Duration);

impl Timestamp {
    pub fn new(unix_time: Duration) -> Self {
        Timestamp(unix_time)
    }

    // Saturates to the epoch if the system clock reads before 1970
    pub fn now() -> Self {
        Timestamp(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or(Duration::ZERO),
        )
    }

    pub fn from_unix_millis(millis: u64) -> Self {
        Timestamp(Duration::from_millis(millis))
    }

    pub fn to_unix_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    pub fn as_unix_time(&self) -> &Duration {
        &self.0
    }

    pub fn duration_since(self, earlier: Self) -> Option<Duration> {
        self.0.checked_sub(earlier.0)
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_unix_millis(), f)
    }
}

impl ToValue for Timestamp {
    fn to_value(&self) -> Value {
        Value::from(self.to_unix_millis())
    }
}

impl<'v> FromValue<'v> for Timestamp {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_u64().map(Timestamp::from_unix_millis)
    }
}

impl<'v> Value<'v> {
    pub fn to_timestamp(&self) -> Option<Timestamp> {
        self.to_u64().map(Timestamp::from_unix_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_millis_roundtrip() {
        let ts = Timestamp::from_unix_millis(1_722_500_000_123);

        assert_eq!(1_722_500_000_123, ts.to_unix_millis());
        assert_eq!(Some(ts), ts.to_value().to_timestamp());
    }

    #[test]
    fn timestamp_truncates_submillis() {
        let ts = Timestamp::new(Duration::new(1, 999_999));

        assert_eq!(1_000, ts.to_unix_millis());
    }

    #[test]
    fn timestamp_ordering() {
        let earlier = Timestamp::from_unix_millis(1_000);
        let later = Timestamp::from_unix_millis(2_000);

        assert!(earlier < later);
        assert_eq!(
            Some(Duration::from_millis(1_000)),
            later.duration_since(earlier)
        );
        assert_eq!(None, earlier.duration_since(later));
    }

    #[test]
    fn timestamp_displays_millis() {
        assert_eq!("1500", Timestamp::from_unix_millis(1_500).to_string());
    }
}
