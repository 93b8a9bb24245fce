use crate::{Result, generator::Generator};

/// Wraps a generator and left-shifts its results by a fixed number of bits.
///
/// Bits shifted past the top of the `i64` are discarded, so the wrapped
/// generator should already be bounded by an [`OverflowChecker`] narrow
/// enough to leave room for the shift.
///
/// [`OverflowChecker`]: crate::OverflowChecker
#[derive(Clone, Debug)]
pub struct Shifted<G> {
    inner: G,
    bits: u8,
}

impl<G> Shifted<G> {
    /// Wraps `inner`, shifting its results left by `bits`.
    pub const fn new(bits: u8, inner: G) -> Self {
        Self { inner, bits }
    }

    /// The wrapped generator.
    pub const fn get_ref(&self) -> &G {
        &self.inner
    }

    /// The shift amount.
    pub const fn bits(&self) -> u8 {
        self.bits
    }
}

impl<G: Generator> Generator for Shifted<G> {
    fn generate(&self, count: i64) -> Result<i64> {
        let value = self.inner.generate(count)?;
        // Shifting by the full width or more leaves nothing behind.
        Ok(value.checked_shl(u32::from(self.bits)).unwrap_or(0))
    }
}

/// Builds a [`Shifted`] wrapper moving `inner`'s results up by `bits`.
pub const fn shifted<G: Generator>(bits: u8, inner: G) -> Shifted<G> {
    Shifted::new(bits, inner)
}
