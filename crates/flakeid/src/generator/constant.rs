use crate::{
    Result,
    generator::{Generator, check_count_is_one},
};

/// A generator that always yields the same value.
///
/// Used to inject the node ID into a [`Snowflake`]. It only accepts
/// `count == 1`: a fixed value cannot stand for a batch.
///
/// [`Snowflake`]: crate::Snowflake
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Constant(i64);

impl Constant {
    /// Creates a generator yielding `value`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The value this generator yields.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl Generator for Constant {
    fn generate(&self, count: i64) -> Result<i64> {
        check_count_is_one(self, count)?;
        Ok(self.0)
    }
}

/// Builds a [`Constant`] generator.
#[must_use]
pub const fn constant(value: i64) -> Constant {
    Constant::new(value)
}
