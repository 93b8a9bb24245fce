use core::{any, fmt, ops::RangeInclusive};
use std::sync::Arc;

use crate::{Error, Result};

/// A minimal interface for generating integer IDs.
///
/// A call to [`Generator::generate`] reserves `count` consecutive IDs and
/// returns the **last** one. The batch is `last - (count - 1)..=last`, and
/// every member is an independent valid ID.
///
/// Implementations may restrict the accepted `count` (most primitives only
/// accept `1`) and report anything else as [`Error::Range`]. Unless a type
/// documents otherwise it does not detect numeric overflow; wrap it in an
/// [`OverflowChecker`] for that.
///
/// [`OverflowChecker`]: crate::OverflowChecker
pub trait Generator: fmt::Debug {
    /// Reserves `count` IDs and returns the last one.
    ///
    /// # Errors
    ///
    /// - [`Error::Range`] if `count` is not supported by this generator.
    /// - [`Error::Overflow`] if a checked field exceeds its bit width.
    fn generate(&self, count: i64) -> Result<i64>;

    /// Reserves `count` IDs and returns the whole batch as a range.
    ///
    /// ```
    /// use flakeid::{Generator, sequential};
    ///
    /// let generator = sequential();
    /// assert_eq!(generator.generate_range(3).unwrap(), 1..=3);
    /// assert_eq!(generator.generate_range(2).unwrap(), 4..=5);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`].
    fn generate_range(&self, count: i64) -> Result<RangeInclusive<i64>> {
        let last = self.generate(count)?;
        Ok(last.wrapping_sub(count.wrapping_sub(1))..=last)
    }
}

impl<G: Generator + ?Sized> Generator for &G {
    fn generate(&self, count: i64) -> Result<i64> {
        (**self).generate(count)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self, count: i64) -> Result<i64> {
        (**self).generate(count)
    }
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    fn generate(&self, count: i64) -> Result<i64> {
        (**self).generate(count)
    }
}

/// Rejects every `count` other than one.
pub(crate) fn check_count_is_one<G: Generator>(generator: &G, count: i64) -> Result<()> {
    if count == 1 {
        Ok(())
    } else {
        Err(range_error(generator, "count=1", count))
    }
}

#[cold]
#[inline(never)]
pub(crate) fn range_error<G: Generator + ?Sized>(
    generator: &G,
    supported: &'static str,
    count: i64,
) -> Error {
    Error::Range {
        generator: format!("{}/{generator:?}", any::type_name::<G>()),
        supported,
        count,
    }
}
