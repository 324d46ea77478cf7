//! DefaultIfEmpty: the source, or a single fallback value when the source is empty.

use lazyq_core::{Cursor, Error, Result, Sequence};

#[derive(Clone)]
pub struct DefaultIfEmpty<S: Sequence> {
    source: S,
    default: S::Item,
}

impl<S: Sequence> DefaultIfEmpty<S> {
    pub fn new(source: S, default: S::Item) -> Self {
        Self { source, default }
    }
}

impl<S: Sequence> Sequence for DefaultIfEmpty<S> {
    type Item = S::Item;
    type Cursor = DefaultIfEmptyCursor<S::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        DefaultIfEmptyCursor {
            source: self.source.new_cursor(),
            default: self.default.clone(),
            state: State::Pending,
        }
    }
}

/// Decided by the first `advance` and kept until `restart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Source,
    Default,
    Exhausted,
}

pub struct DefaultIfEmptyCursor<C: Cursor> {
    source: C,
    default: C::Item,
    state: State,
}

impl<C> Cursor for DefaultIfEmptyCursor<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn advance(&mut self) -> Result<bool> {
        match self.state {
            State::Pending => {
                self.state = if self.source.advance()? {
                    State::Source
                } else {
                    State::Default
                };
                Ok(true)
            }
            State::Source => self.source.advance(),
            State::Default | State::Exhausted => {
                self.state = State::Exhausted;
                Ok(false)
            }
        }
    }

    fn current(&self) -> Result<C::Item> {
        match self.state {
            State::Source => self.source.current(),
            State::Default => Ok(self.default.clone()),
            State::Pending | State::Exhausted => Err(Error::InvalidPosition),
        }
    }

    fn restart(&mut self) {
        self.source.restart();
        self.state = State::Pending;
    }
}
