use std::time::{Duration, SystemTime};

use crate::TimeSource;

/// Standard UNIX epoch: Thursday, January 1, 1970 00:00:00 UTC
pub const UNIX_EPOCH: Duration = Duration::from_millis(0);

/// Twitter epoch: Thursday, November 4, 2010 1:42:54.657 UTC
pub const TWITTER_EPOCH: Duration = Duration::from_millis(1_288_834_974_657);

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: Duration = Duration::from_millis(1_420_070_400_000);

/// Custom epoch: Wednesday, January 1, 2025 00:00:00 UTC
pub const CUSTOM_EPOCH: Duration = Duration::from_millis(1_735_689_600_000);

/// A wall-clock time source reporting milliseconds since a chosen epoch.
///
/// Every call reads [`SystemTime::now`], so the value follows external clock
/// adjustments. Concurrent callers may observe the same millisecond; nothing
/// here orders them.
///
/// A clock that reads earlier than its epoch reports a negative value rather
/// than panicking. Composed generators reject it through their overflow
/// checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SystemClock {
    epoch: SystemTime,
}

impl Default for SystemClock {
    /// Constructs a clock aligned to the [`UNIX_EPOCH`].
    fn default() -> Self {
        Self::with_epoch(UNIX_EPOCH)
    }
}

impl SystemClock {
    /// Constructs a clock using `epoch` (a [`Duration`] since 1970-01-01 UTC)
    /// as the origin (t = 0).
    ///
    /// ```
    /// use flakeid::{SystemClock, TimeSource, TWITTER_EPOCH, UNIX_EPOCH};
    ///
    /// let unix = SystemClock::with_epoch(UNIX_EPOCH);
    /// let twitter = SystemClock::with_epoch(TWITTER_EPOCH);
    /// assert!(unix.current_millis() > twitter.current_millis());
    /// ```
    #[must_use]
    pub fn with_epoch(epoch: Duration) -> Self {
        Self {
            epoch: SystemTime::UNIX_EPOCH + epoch,
        }
    }
}

impl TimeSource for SystemClock {
    fn current_millis(&self) -> i64 {
        match SystemTime::now().duration_since(self.epoch) {
            Ok(elapsed) => i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX),
            Err(behind) => i64::try_from(behind.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
        }
    }
}
