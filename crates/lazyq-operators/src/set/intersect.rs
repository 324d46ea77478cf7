use lazyq_core::{Comparer, Cursor, Result, Sequence};
use lazyq_lookup::BucketSet;

use super::drain_into;
use crate::metrics::emit_span;

/// Elements of `first` that also occur in `second`, each yielded once,
/// in `first` order.
pub struct Intersect<'a, A: Sequence, B> {
    first: A,
    second: B,
    comparer: Comparer<'a, A::Item>,
}

impl<'a, A, B> Intersect<'a, A, B>
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

impl<A: Sequence + Clone, B: Clone> Clone for Intersect<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            comparer: self.comparer.clone(),
        }
    }
}

impl<'a, A, B> Sequence for Intersect<'a, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = IntersectCursor<'a, A::Cursor, B::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        IntersectCursor {
            first: self.first.new_cursor(),
            second: self.second.new_cursor(),
            seen: BucketSet::new(self.comparer.clone()),
            yielded: BucketSet::new(self.comparer.clone()),
            primed: false,
        }
    }
}

pub struct IntersectCursor<'a, A: Cursor, B> {
    first: A,
    second: B,
    /// Everything in `second`.
    seen: BucketSet<'a, A::Item>,
    /// Everything already handed out from `first`.
    yielded: BucketSet<'a, A::Item>,
    primed: bool,
}

impl<A, B> Cursor for IntersectCursor<'_, A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Result<bool> {
        if !self.primed {
            drain_into(&mut self.second, &mut self.seen)?;
            self.primed = true;
            emit_span("intersect.second", &[("seen", self.seen.len().to_string())]);
        }

        while self.first.advance()? {
            let item = self.first.current()?;
            if self.seen.contains(&item) && self.yielded.insert(item) {
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
        self.seen.clear();
        self.yielded.clear();
        self.primed = false;
    }
}
