//! Partial documents and the tombstone-aware deep merge.
//!
//! Every set of block changes in Folio has one encoding: a flat JSON object
//! keyed by `"{blockType}:{blockId}"` whose values are either a payload object
//! or `null` (a tombstone). The same [`Doc`] type carries a fragment in the log,
//! the shadow overlay, a block payload and the durable snapshot, and the same
//! [`Doc::merge`] folds all of them.
//!
//! # Core Types
//!
//! - [`Doc`] - An ordered string-keyed map of values
//! - [`Value`] - Leaf values, nested maps and the [`Value::Deleted`] tombstone
//! - [`TombstonePolicy`] - Whether a merge keeps tombstones or applies them

pub mod doc;
pub mod errors;

pub use doc::{Doc, TombstonePolicy, Value};
pub use errors::CRDTError;
