//! Take and TakeWhile.

use std::rc::Rc;

use lazyq_core::{Cursor, Error, Result, Sequence};

/// Yields at most `count` elements; never advances the source past them.
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S: Sequence> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Self { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeCursor<S::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        TakeCursor {
            source: self.source.new_cursor(),
            count: self.count,
            yielded: 0,
            ended: false,
        }
    }
}

pub struct TakeCursor<C> {
    source: C,
    count: usize,
    yielded: usize,
    ended: bool,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        if self.ended || self.yielded >= self.count {
            self.ended = true;
            return Ok(false);
        }
        if self.source.advance()? {
            self.yielded += 1;
            Ok(true)
        } else {
            self.ended = true;
            Ok(false)
        }
    }

    fn current(&self) -> Result<C::Item> {
        if self.ended {
            return Err(Error::InvalidPosition);
        }
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.yielded = 0;
        self.ended = false;
    }
}

/// Yields elements while `predicate(element, index)` holds, then ends for good.
pub struct TakeWhile<S, P> {
    source: S,
    predicate: Rc<P>,
}

impl<S, P> TakeWhile<S, P>
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

impl<S: Clone, P> Clone for TakeWhile<S, P> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            predicate: Rc::clone(&self.predicate),
        }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, P>;

    fn new_cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            source: self.source.new_cursor(),
            predicate: Rc::clone(&self.predicate),
            index: 0,
            ended: false,
        }
    }
}

pub struct TakeWhileCursor<C, P> {
    source: C,
    predicate: Rc<P>,
    index: usize,
    ended: bool,
}

impl<C, P> Cursor for TakeWhileCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        if self.ended {
            return Ok(false);
        }
        if self.source.advance()? {
            let item = self.source.current()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&item, index) {
                return Ok(true);
            }
        }
        self.ended = true;
        Ok(false)
    }

    fn current(&self) -> Result<C::Item> {
        if self.ended {
            return Err(Error::InvalidPosition);
        }
        self.source.current()
    }

    fn restart(&mut self) {
        self.source.restart();
        self.index = 0;
        self.ended = false;
    }
}
