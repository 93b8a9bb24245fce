/// Width of the per-millisecond sequence field (least significant).
pub const SEQUENCE_BITS: u8 = 12;
/// Width of the node ID field.
pub const NODE_BITS: u8 = 10;
/// Width of the millisecond timestamp field. The sign bit above it stays
/// clear.
pub const TIMESTAMP_BITS: u8 = 41;

/// Position of the node ID field.
pub const NODE_SHIFT: u8 = SEQUENCE_BITS;
/// Position of the timestamp field.
pub const TIMESTAMP_SHIFT: u8 = SEQUENCE_BITS + NODE_BITS;

/// Largest sequence value within one millisecond (4096 IDs per tick).
pub const MAX_SEQUENCE: i64 = (1 << SEQUENCE_BITS) - 1;
/// Largest node ID (1024 nodes).
pub const MAX_NODE_ID: i64 = (1 << NODE_BITS) - 1;
/// Largest timestamp, roughly 69 years after the epoch.
pub const MAX_TIMESTAMP: i64 = (1 << TIMESTAMP_BITS) - 1;

/// The fields of a Snowflake ID.
///
/// ```text
///  Bit Index:  63           63 62            22 21             12 11             0
///              +--------------+----------------+-----------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | node ID (10)    | sequence (12) |
///              +--------------+----------------+-----------------+---------------+
///              |<----------- MSB ---------- 64 bits ----------- LSB ------------>|
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnowflakeParts {
    /// Milliseconds since the generator's epoch.
    pub timestamp: i64,
    /// The node that produced the ID.
    pub node_id: i64,
    /// Position within the millisecond.
    pub sequence: i64,
}

impl SnowflakeParts {
    /// Splits `id` into its fields by masking and shifting.
    ///
    /// ```
    /// use flakeid::SnowflakeParts;
    ///
    /// let parts = SnowflakeParts::from_id((42 << 22) | (3 << 12) | 7);
    /// assert_eq!(parts, SnowflakeParts { timestamp: 42, node_id: 3, sequence: 7 });
    /// ```
    #[must_use]
    pub const fn from_id(id: i64) -> Self {
        Self {
            timestamp: (id >> TIMESTAMP_SHIFT) & MAX_TIMESTAMP,
            node_id: (id >> NODE_SHIFT) & MAX_NODE_ID,
            sequence: id & MAX_SEQUENCE,
        }
    }

    /// Packs the fields back into an ID, truncating each to its width.
    #[must_use]
    pub const fn to_id(&self) -> i64 {
        ((self.timestamp & MAX_TIMESTAMP) << TIMESTAMP_SHIFT)
            | ((self.node_id & MAX_NODE_ID) << NODE_SHIFT)
            | (self.sequence & MAX_SEQUENCE)
    }
}

impl From<i64> for SnowflakeParts {
    fn from(id: i64) -> Self {
        Self::from_id(id)
    }
}

impl From<SnowflakeParts> for i64 {
    fn from(parts: SnowflakeParts) -> Self {
        parts.to_id()
    }
}
