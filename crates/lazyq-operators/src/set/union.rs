use lazyq_core::{Comparer, Cursor, Result, Sequence};
use lazyq_lookup::BucketSet;

/// Distinct elements of `first` followed by `second`, first occurrence wins.
pub struct Union<'a, A: Sequence, B> {
    first: A,
    second: B,
    comparer: Comparer<'a, A::Item>,
}

impl<'a, A, B> Union<'a, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    pub fn new(first: A, second: B, comparer: Comparer<'a, A::Item>) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<A: Sequence + Clone, B: Clone> Clone for Union<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            comparer: self.comparer.clone(),
        }
    }
}

impl<'a, A, B> Sequence for Union<'a, A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = UnionCursor<'a, A::Cursor, B::Cursor>;

    fn new_cursor(&self) -> Self::Cursor {
        UnionCursor {
            first: self.first.new_cursor(),
            second: self.second.new_cursor(),
            active: Active::First,
            seen: BucketSet::new(self.comparer.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Active {
    First,
    Second,
}

pub struct UnionCursor<'a, A: Cursor, B> {
    first: A,
    second: B,
    active: Active,
    seen: BucketSet<'a, A::Item>,
}

impl<A, B> Cursor for UnionCursor<'_, A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(&mut self) -> Result<bool> {
        loop {
            let advanced = match self.active {
                Active::First => {
                    if !self.first.advance()? {
                        self.active = Active::Second;
                        continue;
                    }
                    true
                }
                Active::Second => self.second.advance()?,
            };
            if !advanced {
                return Ok(false);
            }
            let item = self.current()?;
            if self.seen.insert(item) {
                return Ok(true);
            }
        }
    }

    fn current(&self) -> Result<A::Item> {
        match self.active {
            Active::First => self.first.current(),
            Active::Second => self.second.current(),
        }
    }

    fn restart(&mut self) {
        self.first.restart();
        self.second.restart();
        self.active = Active::First;
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyq_core::List;

    #[test]
    fn one_copy_per_value_across_both() {
        let first = List::from(vec![5, 3, 9, 7, 5, 9, 3, 7]);
        let second = List::from(vec![8, 3, 6, 4, 4, 9, 1, 0]);
        let union = Union::new(first, second, Comparer::default());
        let out: Vec<i32> = union.iter().collect::<Result<_>>().unwrap();
        assert_eq!(out, vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);
    }
}
