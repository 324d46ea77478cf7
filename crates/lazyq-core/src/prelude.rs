//! Convenient re-exports for downstream crates.

pub use crate::comparer::Comparer;
pub use crate::config::QueryConfig;
pub use crate::cursor::{Cursor, IntoSequence, Sequence};
pub use crate::error::{Error, Result};
pub use crate::list::List;
pub use crate::source::{empty, range, repeat};
