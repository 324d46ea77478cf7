#![forbid(unsafe_code)]
//! lazyq-operators: lazy operator sequences and terminal operators.
//!
//! Design intent:
//! - Every operator is a `Sequence` holding only its inputs (upstream
//!   sequences, shared closures, a `Comparer`); all iteration state lives in
//!   the cursor it hands out.
//! - Pre-scans (set operators, joins) happen on a cursor's first `advance`,
//!   never at construction. `group_by` is the exception: it groups when
//!   called and returns the resulting `Lookup`.
//! - `QueryOps` adds the chainable methods and `Aggregates` the terminal ones
//!   to every `Sequence`.

pub mod aggregate;
pub mod metrics;
pub mod traits;

pub mod concat;
pub mod default_if_empty;
pub mod filter;
pub mod flatten;
pub mod map;
pub mod skip;
pub mod take;
pub mod zip;

pub mod join;
pub mod set;

pub use aggregate::Aggregates;
pub use traits::QueryOps;

pub use concat::Concat;
pub use default_if_empty::DefaultIfEmpty;
pub use filter::Filter;
pub use flatten::SelectMany;
pub use join::{GroupJoin, Join};
pub use map::Select;
pub use set::{Distinct, Except, Intersect, Union};
pub use skip::{Skip, SkipWhile};
pub use take::{Take, TakeWhile};
pub use zip::Zip;
