use portable_atomic::{AtomicI64, Ordering};

use crate::{
    Result,
    generator::{Generator, range_error},
};

/// A lock-free counter generator.
///
/// Each call atomically adds `count` to the counter and returns the new
/// value, so concurrent callers always receive disjoint batches. Results are
/// reproducible, which makes it suitable for tests.
///
/// The counter wraps on `i64` overflow. Wrap it in an [`OverflowChecker`] to
/// bound it.
///
/// [`OverflowChecker`]: crate::OverflowChecker
#[derive(Debug, Default)]
pub struct Sequential {
    value: AtomicI64,
}

impl Sequential {
    /// Creates a counter starting at zero. The first ID is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a counter seeded at `initial`. The first ID is
    /// `initial + count`.
    #[must_use]
    pub const fn starting_at(initial: i64) -> Self {
        Self {
            value: AtomicI64::new(initial),
        }
    }

    /// Creates a counter seeded at [`i64::MIN`].
    ///
    /// Useful for migrations: IDs handed out before a positive-ID generator
    /// such as [`Snowflake`] takes over can never clash with it.
    ///
    /// [`Snowflake`]: crate::Snowflake
    #[must_use]
    pub const fn negative() -> Self {
        Self::starting_at(i64::MIN)
    }

    /// The last value handed out (or the seed if none was).
    pub fn current(&self) -> i64 {
        self.value.load(Ordering::Acquire)
    }

    /// Restarts the sequence so the next call returns `value + count`.
    pub(crate) fn reset(&self, value: i64) {
        self.value.store(value, Ordering::Release);
    }

    /// Gives back the last `count` values.
    pub(crate) fn rewind(&self, count: i64) {
        self.value.fetch_sub(count, Ordering::AcqRel);
    }
}

impl Generator for Sequential {
    fn generate(&self, count: i64) -> Result<i64> {
        if count < 1 {
            return Err(range_error(self, "count>=1", count));
        }
        Ok(self
            .value
            .fetch_add(count, Ordering::AcqRel)
            .wrapping_add(count))
    }
}

/// Builds a [`Sequential`] counter starting at zero.
#[must_use]
pub const fn sequential() -> Sequential {
    Sequential::new()
}

/// Builds a [`Sequential`] counter seeded at `initial`.
#[must_use]
pub const fn sequential_from(initial: i64) -> Sequential {
    Sequential::starting_at(initial)
}

/// Builds a [`Sequential`] counter seeded at [`i64::MIN`].
#[must_use]
pub const fn negative_sequential() -> Sequential {
    Sequential::negative()
}
