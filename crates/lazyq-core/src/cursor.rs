//! Cursor and sequence interfaces.
//!
//! Concrete cursors live next to the sequences that produce them (`list`,
//! `source`, and every operator in `lazyq-operators`). Only the protocol is
//! defined here so any crate can build on it without pulling operators in.

use crate::error::Result;
use crate::list::List;

/// A single-pass position over a sequence.
///
/// Invariants:
/// - A fresh cursor is positioned *before* the first element.
/// - `current` succeeds only if the last `advance` returned `Ok(true)`;
///   otherwise it fails with `Error::InvalidPosition`.
/// - Once `advance` returns `Ok(false)` it keeps returning `Ok(false)`.
/// - `restart` puts the cursor back before the first element and is safe to
///   call at any time, including before the first `advance`.
pub trait Cursor {
    type Item;

    /// Move to the next element. Returns `Ok(false)` once the sequence is exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// The element at the current position.
    fn current(&self) -> Result<Self::Item>;

    /// Return to the pre-first-element state, dropping any auxiliary scan state.
    fn restart(&mut self);
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        (**self).advance()
    }

    fn current(&self) -> Result<Self::Item> {
        (**self).current()
    }

    fn restart(&mut self) {
        (**self).restart()
    }
}

/// Something that can hand out independent cursors over the same logical data.
///
/// Implementations hold only their constructor arguments. Every call to
/// `new_cursor` yields a cursor with its own position and its own auxiliary
/// state, so one sequence can be walked by several cursors at once
/// (nested loops, self-joins).
pub trait Sequence {
    type Item: Clone;
    type Cursor: Cursor<Item = Self::Item>;

    fn new_cursor(&self) -> Self::Cursor;

    /// Bridge to `std::iter`. Items are `Result`s because enumeration can fail.
    fn iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.new_cursor())
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn new_cursor(&self) -> Self::Cursor {
        (**self).new_cursor()
    }
}

/// Conversion into a sequence; used wherever an operator accepts "anything
/// enumerable" (e.g. the collection selector of `select_many`).
pub trait IntoSequence {
    type Item: Clone;
    type Sequence: Sequence<Item = Self::Item>;

    fn into_sequence(self) -> Self::Sequence;
}

impl<S: Sequence> IntoSequence for S {
    type Item = S::Item;
    type Sequence = S;

    fn into_sequence(self) -> S {
        self
    }
}

impl<T: Clone> IntoSequence for Vec<T> {
    type Item = T;
    type Sequence = List<T>;

    fn into_sequence(self) -> List<T> {
        List::from(self)
    }
}

impl<T: Clone, const N: usize> IntoSequence for [T; N] {
    type Item = T;
    type Sequence = List<T>;

    fn into_sequence(self) -> List<T> {
        List::from(Vec::from(self))
    }
}

/// `Iterator` adapter over a cursor. Stops after the first error.
pub struct CursorIter<C> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.advance() {
            Ok(true) => Some(self.cursor.current()),
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
