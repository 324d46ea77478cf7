//! Join (inner join) and GroupJoin.
//!
//! Both build a `Lookup` over the inner side on the first `advance` of each
//! cursor, then stream the outer side against it.

pub mod group;
pub mod hash;

pub use group::{GroupJoin, GroupJoinCursor};
pub use hash::{Join, JoinCursor};

use lazyq_core::{Comparer, Cursor, Result};
use lazyq_lookup::Lookup;

use crate::metrics::emit_span;

/// Drains the inner cursor into a lookup keyed by `inner_key`.
///
/// A failed drain restarts `inner`, so the next attempt rebuilds from the
/// first element instead of from wherever the failure left the cursor.
pub(crate) fn build_inner<'a, C, IK, K>(
    inner: &mut C,
    inner_key: &IK,
    comparer: &Comparer<'a, K>,
    event: &str,
) -> Result<Lookup<'a, K, C::Item>>
where
    C: Cursor,
    C::Item: Clone,
    IK: Fn(&C::Item) -> K,
{
    let lookup = match Lookup::from_cursor(inner, inner_key, |item| item, comparer.clone()) {
        Ok(lookup) => lookup,
        Err(err) => {
            inner.restart();
            return Err(err);
        }
    };
    emit_span(event, &[("keys", lookup.len().to_string())]);
    Ok(lookup)
}
