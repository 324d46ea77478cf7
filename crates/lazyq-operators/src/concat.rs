//! Concat: all of `first`, then all of `second`.

use lazyq_core::{Cursor, Result, Sequence};

#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Sequence for Concat<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ConcatCursor<A::Cursor, B::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        ConcatCursor {
            first: self.first.new_cursor(),
            second: self.second.new_cursor(),
            on_second: false,
        }
    }
}

pub struct ConcatCursor<A, B> {
    first: A,
    second: B,
    on_second: bool,
}

impl<A, B> Cursor for ConcatCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Result<bool> {
        if !self.on_second {
            if self.first.advance()? {
                return Ok(true);
            }
            self.on_second = true;
        }
        self.second.advance()
    }

    fn current(&self) -> Result<A::Item> {
        if self.on_second {
            self.second.current()
        } else {
            self.first.current()
        }
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.on_second = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyq_core::{empty, Error, List};

    #[test]
    fn appends_second_after_first() {
        let both = Concat::new(List::from(vec![1, 2, 3]), List::from(vec![3, 4, 5]));
        let out: Vec<i32> = both.iter().collect::<Result<_>>().unwrap();
        assert_eq!(out, vec![1, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn empty_sides() {
        let only_second = Concat::new(empty(), List::from(vec!['z']));
        let out: Vec<char> = only_second.iter().collect::<Result<_>>().unwrap();
        assert_eq!(out, vec!['z']);

        let mut c = Concat::new(empty::<u8>(), empty()).new_cursor();
        assert!(!c.advance().unwrap());
        assert_eq!(c.current(), Err(Error::InvalidPosition));
    }
}
