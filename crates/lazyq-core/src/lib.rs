#![forbid(unsafe_code)]
//! lazyq-core: the cursor protocol and everything operators build on.
//!
//! - `Cursor` / `Sequence`: the pull-based iteration contract.
//! - `Comparer`: the `{equals, hash}` pair used by set operators and lookups.
//! - `List`: the mutable, indexable entry-point sequence.
//! - `empty` / `range` / `repeat`: generated sources.
//!
//! No operators live here; see `lazyq-operators`.

pub mod comparer;
pub mod config;
pub mod cursor;
pub mod error;
pub mod hash;
pub mod list;
pub mod prelude;
pub mod source;

pub use comparer::Comparer;
pub use config::QueryConfig;
pub use cursor::{Cursor, CursorIter, IntoSequence, Sequence};
pub use error::{Error, Result};
pub use list::{List, ListCursor};
pub use source::{empty, range, repeat, Empty, Range, Repeat};
