//! Select: project each upstream element.
//!
//! The selector runs on every `current()` read, not on `advance()`, so an
//! element that is skipped downstream is never projected.

use std::marker::PhantomData;
use std::rc::Rc;

use lazyq_core::{Cursor, Result, Sequence};

pub struct Select<S, F, U> {
    source: S,
    selector: Rc<F>,
    _marker: PhantomData<fn() -> U>,
}

impl<S, F, U> Select<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    pub fn new(source: S, selector: F) -> Self {
        Self {
            source,
            selector: Rc::new(selector),
            _marker: PhantomData,
        }
    }
}

impl<S: Clone, F, U> Clone for Select<S, F, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            selector: Rc::clone(&self.selector),
            _marker: PhantomData,
        }
    }
}

impl<S, F, U> Sequence for Select<S, F, U>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = SelectCursor<S::Cursor, F, U>;

    fn new_cursor(&self) -> Self::Cursor {
        SelectCursor {
            source: self.source.new_cursor(),
            selector: Rc::clone(&self.selector),
            position: None,
            _marker: PhantomData,
        }
    }
}

pub struct SelectCursor<C, F, U> {
    source: C,
    selector: Rc<F>,
    /// Zero-based index of the current element; `None` before the first advance.
    position: Option<usize>,
    _marker: PhantomData<fn() -> U>,
}

impl<C, F, U> Cursor for SelectCursor<C, F, U>
where
    C: Cursor,
    F: Fn(C::Item, usize) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<bool> {
        let advanced = self.source.advance()?;
        if advanced {
            self.position = Some(self.position.map_or(0, |p| p + 1));
        }
        Ok(advanced)
    }

    fn current(&self) -> Result<U> {
        let item = self.source.current()?;
        Ok((self.selector)(item, self.position.unwrap_or_default()))
    }

    fn restart(&mut self) {
        self.source.restart();
        self.position = None;
    }
}
