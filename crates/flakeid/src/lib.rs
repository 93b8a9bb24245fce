//! Composable integer ID generators.
//!
//! Every generator implements [`Generator`], a single `generate(count)`
//! operation that reserves `count` consecutive IDs and returns the last one.
//! Small generators ([`Constant`], [`Sequential`], [`ClockTimestamp`]) are
//! combined through wrappers ([`OverflowChecker`], [`Shifted`]) into the
//! [`Snowflake`] generator, which packs a millisecond timestamp, a node ID
//! and a per-millisecond sequence into a non-negative `i64`.
//!
//! ```
//! use flakeid::{Generator, SnowflakeParts, snowflake};
//!
//! let generator = snowflake(3);
//! let id = generator.generate(1).unwrap();
//! let parts = SnowflakeParts::from_id(id);
//! assert_eq!(parts.node_id, 3);
//! assert!(id >= 0);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod mutex;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::time::*;
