use lazyq_core::{Comparer, Cursor, Result, Sequence};
use lazyq_lookup::BucketSet;

/// First occurrence of every equality class, in source order.
pub struct Distinct<'a, S: Sequence> {
    source: S,
    comparer: Comparer<'a, S::Item>,
}

impl<'a, S: Sequence> Distinct<'a, S> {
    pub fn new(source: S, comparer: Comparer<'a, S::Item>) -> Self {
        Self { source, comparer }
    }
}

impl<S: Sequence + Clone> Clone for Distinct<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparer: self.comparer.clone(),
        }
    }
}

impl<'a, S: Sequence> Sequence for Distinct<'a, S> {
    type Item = S::Item;
    type Cursor = DistinctCursor<'a, S::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        DistinctCursor {
            source: self.source.new_cursor(),
            seen: BucketSet::new(self.comparer.clone()),
        }
    }
}

pub struct DistinctCursor<'a, C: Cursor> {
    source: C,
    seen: BucketSet<'a, C::Item>,
}

impl<C: Cursor> Cursor for DistinctCursor<'_, C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        while self.source.advance()? {
            if self.seen.insert(self.source.current()?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn current(&self) -> Result<C::Item> {
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.seen.clear();
    }
}
