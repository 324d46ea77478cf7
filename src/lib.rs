#![forbid(unsafe_code)]
//! lazyq: lazy, restartable sequence combinators over an explicit cursor protocol.
//!
//! ```
//! use lazyq::prelude::*;
//!
//! let ages = List::from(vec![21, 46, 46, 55, 17, 21, 55, 55]);
//! let adults = ages.distinct().filter(|age| *age >= 18);
//! assert_eq!(adults.to_vec().unwrap(), vec![21, 46, 55]);
//! ```
//!
//! Nothing runs until a terminal operator (or a cursor) pulls. Each pull
//! builds fresh cursor state, so a query can be evaluated any number of times.

pub use lazyq_core::{
    empty, range, repeat, Comparer, Cursor, CursorIter, Error, IntoSequence, List, QueryConfig,
    Result, Sequence,
};
pub use lazyq_lookup::{Grouping, Lookup};
pub use lazyq_operators::{Aggregates, QueryOps};

/// Glob-import this to get every trait and entry point.
pub mod prelude {
    pub use lazyq_core::prelude::*;
    pub use lazyq_lookup::{Grouping, Lookup};
    pub use lazyq_operators::{Aggregates, QueryOps};
}
