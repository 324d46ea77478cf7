//! Zip: pairs two sources in lockstep, ending with the shorter one.

use std::marker::PhantomData;
use std::rc::Rc;

use lazyq_core::{Cursor, Error, Result, Sequence};

pub struct Zip<A, B, F, U> {
    first: A,
    second: B,
    selector: Rc<F>,
    _marker: PhantomData<fn() -> U>,
}

impl<A, B, F, U> Zip<A, B, F, U>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> U,
{
    pub fn new(first: A, second: B, selector: F) -> Self {
        Self {
            first,
            second,
            selector: Rc::new(selector),
            _marker: PhantomData,
        }
    }
}

impl<A: Clone, B: Clone, F, U> Clone for Zip<A, B, F, U> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            selector: Rc::clone(&self.selector),
            _marker: PhantomData,
        }
    }
}

impl<A, B, F, U> Sequence for Zip<A, B, F, U>
where
    A: Sequence,
    B: Sequence,
    F: Fn(A::Item, B::Item) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = ZipCursor<A::Cursor, B::Cursor, F, U>;

    fn new_cursor(&self) -> Self::Cursor {
        ZipCursor {
            first: self.first.new_cursor(),
            second: self.second.new_cursor(),
            selector: Rc::clone(&self.selector),
            ended: false,
            _marker: PhantomData,
        }
    }
}

pub struct ZipCursor<A, B, F, U> {
    first: A,
    second: B,
    selector: Rc<F>,
    ended: bool,
    _marker: PhantomData<fn() -> U>,
}

impl<A, B, F, U> Cursor for ZipCursor<A, B, F, U>
where
    A: Cursor,
    B: Cursor,
    F: Fn(A::Item, B::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<bool> {
        if self.ended {
            return Ok(false);
        }
        let paired = self.first.advance()? && self.second.advance()?;
        self.ended = !paired;
        Ok(paired)
    }

    fn current(&self) -> Result<U> {
        if self.ended {
            return Err(Error::InvalidPosition);
        }
        Ok((self.selector)(self.first.current()?, self.second.current()?))
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.ended = false;
    }
}
