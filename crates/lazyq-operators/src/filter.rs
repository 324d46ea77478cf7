//! Where: keep upstream elements that satisfy a predicate.

use std::rc::Rc;

use lazyq_core::{Cursor, Result, Sequence};

/// Predicate receives the element and its zero-based position in the source.
pub struct Filter<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    pub fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<S: Clone, P> Clone for Filter<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn new_cursor(&self) -> Self::Cursor {
        FilterCursor {
            source: self.source.new_cursor(),
            predicate: Rc::clone(&self.predicate),
            index: 0,
        }
    }
}

pub struct FilterCursor<C, P> {
    source: C,
    predicate: Rc<P>,
    /// Source position of the next upstream element.
    index: usize,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        while self.source.advance()? {
            let item = self.source.current()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
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
        self.index = 0;
    }
}
