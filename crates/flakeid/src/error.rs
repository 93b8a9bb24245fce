/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors a [`Generator`] can report.
///
/// Errors are surfaced synchronously and propagated unchanged through every
/// wrapper. Both [`Error::Range`] and [`Error::Overflow`] point at a
/// configuration or capacity problem rather than a transient failure.
///
/// [`Generator`]: crate::Generator
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested batch size is not supported by the generator.
    #[error("{generator}.generate() supports {supported}, got {count}")]
    Range {
        /// Type name and value of the generator that rejected the call.
        generator: String,
        /// Human readable description of the accepted counts.
        supported: &'static str,
        /// The count that was received.
        count: i64,
    },

    /// A generated value does not fit in the bit width reserved for it.
    #[error("{generator}.generate() overflow {bits:b}")]
    Overflow {
        /// Type name of the generator whose output overflowed.
        generator: &'static str,
        /// The high-order bits that fell outside the allowed width.
        bits: i64,
    },

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
