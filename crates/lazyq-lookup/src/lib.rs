#![forbid(unsafe_code)]
//! lazyq-lookup: the grouping engine behind set operators, joins and `group_by`.
//!
//! - `BucketSet`: hash-bucketed seen-set keyed by a `Comparer`.
//! - `Grouping`: one key plus its ordered elements.
//! - `Lookup`: eager, order-preserving multi-map from keys to groupings.

pub mod bucket;
pub mod grouping;
pub mod lookup;

pub use bucket::BucketSet;
pub use grouping::Grouping;
pub use lookup::{Lookup, LookupCursor};
