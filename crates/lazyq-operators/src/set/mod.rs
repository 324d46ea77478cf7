//! Set operators: Distinct, Except, Intersect, Union.
//!
//! All four detect duplicates with a per-cursor `BucketSet` driven by the
//! operator's `Comparer`, so two cursors over the same operator never share
//! seen-state. `restart` clears the sets.

pub mod distinct;
pub mod except;
pub mod intersect;
pub mod union;

pub use distinct::{Distinct, DistinctCursor};
pub use except::{Except, ExceptCursor};
pub use intersect::{Intersect, IntersectCursor};
pub use union::{Union, UnionCursor};

use lazyq_core::{Cursor, Result};
use lazyq_lookup::BucketSet;

/// Drains `cursor` into `set`. If the drain fails part-way, the cursor is
/// restarted and the set cleared, so a retry starts from a clean slate.
pub(crate) fn drain_into<C: Cursor>(
    cursor: &mut C,
    set: &mut BucketSet<'_, C::Item>,
) -> Result<()> {
    let mut fill = || -> Result<()> {
        while cursor.advance()? {
            set.insert(cursor.current()?);
        }
        Ok(())
    };
    let drained = fill();
    if drained.is_err() {
        cursor.restart();
        set.clear();
    }
    drained
}
