use lazyq_core::{Comparer, Cursor, Result, Sequence};
use lazyq_lookup::BucketSet;

use super::drain_into;
use crate::metrics::emit_span;

/// Distinct elements of `first` that have no equal in `second`.
///
/// `second` is drained into the banned set on the first `advance`.
pub struct Except<'a, A: Sequence, B> {
    first: A,
    second: B,
    comparer: Comparer<'a, A::Item>,
}

impl<'a, A, B> Except<'a, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    pub fn new(first: A, second: B, comparer: Comparer<'a, A::Item>) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<A: Sequence + Clone, B: Clone> Clone for Except<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            comparer: self.comparer.clone(),
        }
    }
}

impl<'a, A, B> Sequence for Except<'a, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ExceptCursor<'a, A::Cursor, B::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        ExceptCursor {
            first: self.first.new_cursor(),
            second: self.second.new_cursor(),
            banned: BucketSet::new(self.comparer.clone()),
            primed: false,
        }
    }
}

pub struct ExceptCursor<'a, A: Cursor, B> {
    first: A,
    second: B,
    banned: BucketSet<'a, A::Item>,
    primed: bool,
}

impl<A, B> Cursor for ExceptCursor<'_, A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Result<bool> {
        if !self.primed {
            drain_into(&mut self.second, &mut self.banned)?;
            self.primed = true;
            emit_span("except.second", &[("banned", self.banned.len().to_string())]);
        }

        // Yielded elements join the banned set, which also dedups `first`.
        while self.first.advance()? {
            if self.banned.insert(self.first.current()?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn current(&self) -> Result<A::Item> {
        self.first.current()
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.banned.clear();
        self.primed = false;
    }
}
