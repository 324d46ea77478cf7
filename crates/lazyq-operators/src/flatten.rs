//! SelectMany: map each upstream element to a sequence and flatten.
//!
//! Each inner sequence is drained completely before the outer cursor moves
//! again. Empty inner sequences leave no trace in the output.

use std::marker::PhantomData;
use std::rc::Rc;

use lazyq_core::{Cursor, Error, IntoSequence, Result, Sequence};

type InnerCursor<I> = <<I as IntoSequence>::Sequence as Sequence>::Cursor;

/// `collection(outer, index)` yields the inner sequence; `result(outer, inner)`
/// builds each output element.
pub struct SelectMany<S, F, R, I, U> {
    source: S,
    collection: Rc<F>,
    result: Rc<R>,
    _marker: PhantomData<fn() -> (I, U)>,
}

impl<S, F, R, I, U> SelectMany<S, F, R, I, U>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> I,
    I: IntoSequence,
    R: Fn(S::Item, I::Item) -> U,
{
    pub fn new(source: S, collection: F, result: R) -> Self {
        Self {
            source,
            collection: Rc::new(collection),
            result: Rc::new(result),
            _marker: PhantomData,
        }
    }
}

impl<S: Clone, F, R, I, U> Clone for SelectMany<S, F, R, I, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            collection: Rc::clone(&self.collection),
            result: Rc::clone(&self.result),
            _marker: PhantomData,
        }
    }
}

impl<S, F, R, I, U> Sequence for SelectMany<S, F, R, I, U>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> I,
    I: IntoSequence,
    R: Fn(S::Item, I::Item) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = SelectManyCursor<S::Cursor, F, R, I, U>;

    fn new_cursor(&self) -> Self::Cursor {
        SelectManyCursor {
            outer: self.source.new_cursor(),
            collection: Rc::clone(&self.collection),
            result: Rc::clone(&self.result),
            index: 0,
            outer_item: None,
            inner: None,
            _marker: PhantomData,
        }
    }
}

pub struct SelectManyCursor<C: Cursor, F, R, I: IntoSequence, U> {
    outer: C,
    collection: Rc<F>,
    result: Rc<R>,
    index: usize,
    outer_item: Option<C::Item>,
    inner: Option<InnerCursor<I>>,
    _marker: PhantomData<fn() -> U>,
}

impl<C, F, R, I, U> Cursor for SelectManyCursor<C, F, R, I, U>
where
    C: Cursor,
    C::Item: Clone,
    F: Fn(C::Item, usize) -> I,
    I: IntoSequence,
    R: Fn(C::Item, I::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<bool> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance()? {
                    return Ok(true);
                }
                self.inner = None;
            }

            if !self.outer.advance()? {
                self.outer_item = None;
                return Ok(false);
            }
            let item = self.outer.current()?;
            let index = self.index;
            self.index += 1;
            let inner = (self.collection)(item.clone(), index).into_sequence();
            self.inner = Some(inner.new_cursor());
            self.outer_item = Some(item);
        }
    }

    fn current(&self) -> Result<U> {
        let outer = self.outer_item.as_ref().ok_or(Error::InvalidPosition)?;
        let inner = self
            .inner
            .as_ref()
            .ok_or(Error::InvalidPosition)?
            .current()?;
        Ok((self.result)(outer.clone(), inner))
    }

    fn restart(&mut self) {
        self.outer.restart();
        self.index = 0;
        self.outer_item = None;
        self.inner = None;
    }
}
