//! Generated sequences: `empty`, `range`, `repeat`.

use std::marker::PhantomData;

use crate::cursor::{Cursor, Sequence};
use crate::error::{Error, Result};

/// The empty sequence. Zero-sized, so every `Empty<T>` is the same constant value.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Returns the empty sequence for `T`.
pub const fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T: Clone> Sequence for Empty<T> {
    type Item = T;
    type Cursor = EmptyCursor<T>;

    fn new_cursor(&self) -> EmptyCursor<T> {
        EmptyCursor {
            _marker: PhantomData,
        }
    }
}

pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Result<bool> {
        Ok(false)
    }

    fn current(&self) -> Result<T> {
        Err(Error::InvalidPosition)
    }

    fn restart(&mut self) {}
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    count: i64,
}

/// Fails with `OutOfRange` for a negative `count` or when the last value
/// would overflow `i64`.
pub fn range(start: i64, count: i64) -> Result<Range> {
    if count < 0 {
        return Err(Error::out_of_range("count"));
    }
    if count > 0 && start.checked_add(count - 1).is_none() {
        return Err(Error::out_of_range("count"));
    }
    Ok(Range { start, count })
}

impl Sequence for Range {
    type Item = i64;
    type Cursor = RangeCursor;

    fn new_cursor(&self) -> RangeCursor {
        RangeCursor {
            start: self.start,
            count: self.count,
            yielded: 0,
            exhausted: false,
        }
    }
}

pub struct RangeCursor {
    start: i64,
    count: i64,
    /// Number of successful advances, never above `count`.
    yielded: i64,
    exhausted: bool,
}

impl Cursor for RangeCursor {
    type Item = i64;

    fn advance(&mut self) -> Result<bool> {
        if self.yielded < self.count {
            self.yielded += 1;
            return Ok(true);
        }
        self.exhausted = true;
        Ok(false)
    }

    fn current(&self) -> Result<i64> {
        if self.yielded == 0 || self.exhausted {
            return Err(Error::InvalidPosition);
        }
        Ok(self.start + (self.yielded - 1))
    }

    fn restart(&mut self) {
        self.yielded = 0;
        self.exhausted = false;
    }
}

/// One value repeated `count` times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    element: T,
    count: i64,
}

/// Fails with `OutOfRange` for a negative `count`.
pub fn repeat<T: Clone>(element: T, count: i64) -> Result<Repeat<T>> {
    if count < 0 {
        return Err(Error::out_of_range("count"));
    }
    Ok(Repeat { element, count })
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;
    type Cursor = RepeatCursor<T>;

    fn new_cursor(&self) -> RepeatCursor<T> {
        RepeatCursor {
            element: self.element.clone(),
            count: self.count,
            yielded: 0,
            exhausted: false,
        }
    }
}

pub struct RepeatCursor<T> {
    element: T,
    count: i64,
    yielded: i64,
    exhausted: bool,
}

impl<T: Clone> Cursor for RepeatCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Result<bool> {
        if self.yielded < self.count {
            self.yielded += 1;
            return Ok(true);
        }
        self.exhausted = true;
        Ok(false)
    }

    fn current(&self) -> Result<T> {
        if self.yielded == 0 || self.exhausted {
            return Err(Error::InvalidPosition);
        }
        Ok(self.element.clone())
    }

    fn restart(&mut self) {
        self.yielded = 0;
        self.exhausted = false;
    }
}
