use core::fmt;

use crate::{
    Result,
    generator::{Generator, check_count_is_one},
    time::{SystemClock, TimeSource},
};

/// A generator yielding the current time in milliseconds.
///
/// It performs no synchronization: concurrent callers may get the same
/// value. Only `count == 1` is accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTimestamp<T = SystemClock> {
    time: T,
}

impl ClockTimestamp {
    /// Creates a generator reading [`SystemClock`] relative to the Unix
    /// epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::with_time(SystemClock::default())
    }
}

impl<T: TimeSource> ClockTimestamp<T> {
    /// Creates a generator reading from `time`.
    pub const fn with_time(time: T) -> Self {
        Self { time }
    }

    /// The underlying time source.
    pub const fn time(&self) -> &T {
        &self.time
    }
}

impl<T: TimeSource + fmt::Debug> Generator for ClockTimestamp<T> {
    fn generate(&self, count: i64) -> Result<i64> {
        check_count_is_one(self, count)?;
        Ok(self.time.current_millis())
    }
}

/// Builds a [`ClockTimestamp`] over the system clock.
#[must_use]
pub fn clock_timestamp() -> ClockTimestamp {
    ClockTimestamp::new()
}
