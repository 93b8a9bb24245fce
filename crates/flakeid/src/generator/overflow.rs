use core::any;

use crate::{Error, Result, generator::Generator};

/// Wraps a generator and rejects results wider than `allowed_bits`.
///
/// The wrapped result passes through unchanged when every bit at position
/// `allowed_bits` or higher is clear, so negative values always overflow a
/// width below 64. This is the only place overflow is detected; primitives
/// never check.
///
/// Check the *unshifted* value: place an [`OverflowChecker`] inside a
/// [`Shifted`], not around it.
///
/// [`Shifted`]: crate::Shifted
#[derive(Clone, Debug)]
pub struct OverflowChecker<G> {
    inner: G,
    overflow_mask: i64,
}

impl<G> OverflowChecker<G> {
    /// Wraps `inner`, allowing values in `0..2^allowed_bits`.
    ///
    /// A width of 64 or more disables the check.
    pub const fn new(allowed_bits: u8, inner: G) -> Self {
        Self {
            inner,
            overflow_mask: overflow_mask(allowed_bits),
        }
    }

    /// The wrapped generator.
    pub const fn get_ref(&self) -> &G {
        &self.inner
    }

    /// Consumes the wrapper, returning the wrapped generator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Generator> OverflowChecker<G> {
    #[cold]
    #[inline(never)]
    fn cold_overflow(bits: i64) -> Error {
        let generator = any::type_name::<G>();
        #[cfg(feature = "tracing")]
        tracing::debug!(generator, bits, "generated value overflowed");
        Error::Overflow { generator, bits }
    }
}

impl<G: Generator> Generator for OverflowChecker<G> {
    fn generate(&self, count: i64) -> Result<i64> {
        let value = self.inner.generate(count)?;
        match value & self.overflow_mask {
            0 => Ok(value),
            bits => Err(Self::cold_overflow(bits)),
        }
    }
}

/// Mask of the bits at position `allowed_bits` and above.
const fn overflow_mask(allowed_bits: u8) -> i64 {
    match 1i64.checked_shl(allowed_bits as u32) {
        Some(limit) => !limit.wrapping_sub(1),
        None => 0,
    }
}

/// Builds an [`OverflowChecker`] of width `allowed_bits` around `inner`.
pub const fn overflow_checked<G: Generator>(allowed_bits: u8, inner: G) -> OverflowChecker<G> {
    OverflowChecker::new(allowed_bits, inner)
}
