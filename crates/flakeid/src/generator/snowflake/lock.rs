use core::fmt;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Error, Result,
    generator::{
        ClockTimestamp, Constant, Generator, NODE_BITS, NODE_SHIFT, OverflowChecker,
        SEQUENCE_BITS, Sequential, Shifted, TIMESTAMP_BITS, TIMESTAMP_SHIFT, range_error,
    },
    mutex::Mutex,
    time::{SystemClock, TimeSource},
};

/// A lock-based Snowflake ID generator safe to share across threads.
///
/// IDs are non-negative `i64`s laid out as documented on
/// [`SnowflakeParts`]: a 41-bit millisecond timestamp, a 10-bit node ID and a
/// 12-bit sequence. Each field is produced by its own small generator:
///
/// - timestamp: `Shifted(22, OverflowChecker(41, ClockTimestamp))`
/// - node ID: `Shifted(12, OverflowChecker(10, Constant(node_id)))`
/// - sequence: `OverflowChecker(12, Sequential)`, reset on every new tick
///
/// A whole call to [`Generator::generate`] runs under one mutex, so
/// concurrent callers never interleave within a tick.
///
/// ## Limitations
/// - The node ID is validated lazily: a node ID above [`MAX_NODE_ID`] only
///   fails once IDs are generated.
/// - More than 4096 IDs requested within one millisecond fail with
///   [`Error::Overflow`] until the clock advances.
/// - The first batch of a tick is not bounds checked, so a single batch
///   larger than 4096 spills into the node field.
/// - State is in memory only. Restarting a process restarts its sequences.
///
/// [`SnowflakeParts`]: crate::SnowflakeParts
/// [`MAX_NODE_ID`]: crate::MAX_NODE_ID
#[derive(Debug)]
pub struct Snowflake<T = SystemClock> {
    #[cfg(feature = "cache-padded")]
    state: crossbeam_utils::CachePadded<Mutex<SnowflakeState>>,
    #[cfg(not(feature = "cache-padded"))]
    state: Mutex<SnowflakeState>,
    timestamp: Shifted<OverflowChecker<ClockTimestamp<T>>>,
    node: Shifted<OverflowChecker<Constant>>,
    sequence: OverflowChecker<Sequential>,
}

#[derive(Debug, Default)]
struct SnowflakeState {
    /// Shifted timestamp field of the previous successful call.
    last_timestamp: Option<i64>,
}

impl Snowflake {
    /// Creates a generator for `node_id` reading the system clock relative to
    /// the Unix epoch.
    ///
    /// # Example
    /// ```
    /// use flakeid::{Generator, Snowflake, SnowflakeParts};
    ///
    /// let generator = Snowflake::new(7);
    /// let id = generator.generate(1).unwrap();
    /// assert_eq!(SnowflakeParts::from_id(id).node_id, 7);
    /// ```
    #[must_use]
    pub fn new(node_id: i64) -> Self {
        Self::with_time(node_id, SystemClock::default())
    }
}

impl<T: TimeSource> Snowflake<T> {
    /// Creates a generator for `node_id` reading timestamps from `time`.
    ///
    /// Use a [`SystemClock::with_epoch`] clock to move the 69 year window, or
    /// a mock [`TimeSource`] in tests.
    pub fn with_time(node_id: i64, time: T) -> Self {
        let state = Mutex::new(SnowflakeState::default());
        Self {
            #[cfg(feature = "cache-padded")]
            state: crossbeam_utils::CachePadded::new(state),
            #[cfg(not(feature = "cache-padded"))]
            state,
            timestamp: Shifted::new(
                TIMESTAMP_SHIFT,
                OverflowChecker::new(TIMESTAMP_BITS, ClockTimestamp::with_time(time)),
            ),
            node: Shifted::new(
                NODE_SHIFT,
                OverflowChecker::new(NODE_BITS, Constant::new(node_id)),
            ),
            sequence: OverflowChecker::new(SEQUENCE_BITS, Sequential::new()),
        }
    }

    /// The node ID this generator was built with, unvalidated.
    pub const fn node_id(&self) -> i64 {
        self.node.get_ref().get_ref().value()
    }

    /// The underlying time source.
    pub const fn time(&self) -> &T {
        self.timestamp.get_ref().get_ref().time()
    }
}

impl<T: TimeSource + fmt::Debug> Snowflake<T> {
    /// Advances the sequence within the current tick. On overflow the
    /// reservation is handed back so the counter is left untouched.
    fn advance_sequence(&self, count: i64) -> Result<i64> {
        self.sequence.generate(count).inspect_err(|err| {
            if matches!(err, Error::Overflow { .. }) {
                self.sequence.get_ref().rewind(count);
            }
        })
    }
}

impl<T: TimeSource + fmt::Debug> Generator for Snowflake<T> {
    /// Reserves `count` IDs within the current millisecond.
    ///
    /// # Errors
    /// - [`Error::Range`] if `count < 1`.
    /// - [`Error::Overflow`] if the clock is outside the 41-bit window, the
    ///   node ID does not fit in 10 bits, or the tick has no sequence room
    ///   left.
    /// - [`Error::LockPoisoned`] if the lock was poisoned (not with the
    ///   `parking-lot` feature).
    ///
    /// No state is modified when an error is returned.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn generate(&self, count: i64) -> Result<i64> {
        if count < 1 {
            return Err(range_error(self, "count>=1", count));
        }

        let mut state = {
            #[cfg(feature = "parking-lot")]
            {
                self.state.lock()
            }
            #[cfg(not(feature = "parking-lot"))]
            {
                self.state.lock()?
            }
        };

        let timestamp = self.timestamp.generate(1)?;
        let node = self.node.generate(1)?;

        let sequence = if state.last_timestamp == Some(timestamp) {
            self.advance_sequence(count)?
        } else {
            let sequence = count - 1;
            self.sequence.get_ref().reset(sequence);
            state.last_timestamp = Some(timestamp);
            #[cfg(feature = "tracing")]
            tracing::trace!(tick = timestamp >> TIMESTAMP_SHIFT, sequence, "sequence rolled over");
            sequence
        };

        Ok(timestamp | node | sequence)
    }
}

/// Builds a [`Snowflake`] generator for `node_id` over the system clock.
///
/// `node_id` must be in `0..=1023`; anything else surfaces as
/// [`Error::Overflow`] on the first call.
#[must_use]
pub fn snowflake(node_id: i64) -> Snowflake {
    Snowflake::new(node_id)
}

#[cfg(test)]
impl<T> Snowflake<T> {
    pub(crate) fn last_timestamp(&self) -> Option<i64> {
        #[cfg(feature = "parking-lot")]
        {
            self.state.lock().last_timestamp
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            self.state.lock().unwrap().last_timestamp
        }
    }

    pub(crate) fn sequence_value(&self) -> i64 {
        self.sequence.get_ref().current()
    }
}
