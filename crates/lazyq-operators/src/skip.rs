//! Skip and SkipWhile.
//!
//! Both do their discarding on the first `advance` and pass through afterwards.

use std::rc::Rc;

use lazyq_core::{Cursor, Result, Sequence};

/// Drops the first `count` elements. A source shorter than `count` is simply empty.
#[derive(Clone)]
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S: Sequence> Skip<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Cursor = SkipCursor<S::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        SkipCursor {
            source: self.source.new_cursor(),
            count: self.count,
            skipped: false,
        }
    }
}

pub struct SkipCursor<C> {
    source: C,
    count: usize,
    skipped: bool,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.count {
                if !self.source.advance()? {
                    return Ok(false);
                }
            }
        }
        self.source.advance()
    }

    fn current(&self) -> Result<C::Item> {
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.skipped = false;
    }
}

/// Drops elements while `predicate(element, index)` holds; the first failing
/// element and everything after it pass through.
pub struct SkipWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> SkipWhile<S, P>
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

impl<S: Clone, P> Clone for SkipWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for SkipWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = SkipWhileCursor<S::Cursor, P>;

    fn new_cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            source: self.source.new_cursor(),
            predicate: Rc::clone(&self.predicate),
            skipping: true,
        }
    }
}

pub struct SkipWhileCursor<C, P> {
    source: C,
    predicate: Rc<P>,
    skipping: bool,
}

impl<C, P> Cursor for SkipWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        if !self.skipping {
            return self.source.advance();
        }
        self.skipping = false;
        let mut index = 0;
        while self.source.advance()? {
            let item = self.source.current()?;
            if !(self.predicate)(&item, index) {
                return Ok(true);
            }
            index += 1;
        }
        Ok(false)
    }

    fn current(&self) -> Result<C::Item> {
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.skipping = true;
    }
}
