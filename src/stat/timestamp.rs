use std::time::{Duration, SystemTime, UNIX_EPOCH};

use derive_more::{Display, Error};

/// A point in time as the kernel reports it, seconds and nanoseconds since the epoch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub secs: i64,
    pub nanos: i64,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("timestamp can't be represented as a SystemTime")]
pub struct SystemTimeRangeError;

/// Milliseconds since the epoch. The nanoseconds are truncated, never rounded.
///
/// Filesystems like tmpfs and btrfs store the full 64-bit seconds, so the result saturates at
/// [`i64::MIN`] and [`i64::MAX`] rather than overflowing.
pub const fn millis(secs: i64, nanos: i64) -> i64 {
    secs.saturating_mul(1000).saturating_add(nanos / 1_000_000)
}

impl Timestamp {
    pub const fn new(secs: i64, nanos: i64) -> Timestamp {
        Timestamp { secs, nanos }
    }

    pub(crate) const fn from_raw((secs, nanos): (i64, i64)) -> Timestamp {
        Timestamp::new(secs, nanos)
    }

    pub const fn millis(&self) -> i64 {
        millis(self.secs, self.nanos)
    }

    /// Converts to a [`SystemTime`] with full nanosecond precision, or [`None`] if the platform's
    /// [`SystemTime`] can't represent it.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let secs = Duration::from_secs(self.secs.unsigned_abs());
        let nanos = Duration::from_nanos(self.nanos.unsigned_abs());

        let whole = if self.secs >= 0 {
            UNIX_EPOCH.checked_add(secs)?
        } else {
            UNIX_EPOCH.checked_sub(secs)?
        };
        if self.nanos >= 0 { whole.checked_add(nanos) } else { whole.checked_sub(nanos) }
    }
}

impl TryFrom<Timestamp> for SystemTime {
    type Error = SystemTimeRangeError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        value.to_system_time().ok_or(SystemTimeRangeError)
    }
}
