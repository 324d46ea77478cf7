//! Terminal operators: everything that drains a cursor into a value.
//!
//! Each call takes a fresh cursor from the receiver, so a sequence can be
//! queried any number of times. `first*`, `any*`, `all`, `contains*` and
//! `element_at*` stop pulling as soon as the answer is known; `last*`
//! always walks the whole sequence so the predicate sees every element in order.

use std::ops::Add;

use lazyq_core::config::QueryConfig;
use lazyq_core::{Comparer, Cursor, Error, List, Result, Sequence};
use lazyq_lookup::Lookup;

pub trait Aggregates: Sequence {
    /// Left fold seeded with the first element. Fails with `EmptySequence`
    /// on an empty source.
    fn aggregate<F>(&self, func: F) -> Result<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        let mut cursor = self.new_cursor();
        if !cursor.advance()? {
            return Err(Error::EmptySequence);
        }
        let mut acc = cursor.current()?;
        while cursor.advance()? {
            acc = func(acc, cursor.current()?);
        }
        Ok(acc)
    }

    /// Left fold from `seed`; an empty source returns `seed`.
    fn aggregate_seed<A, F>(&self, seed: A, func: F) -> Result<A>
    where
        F: Fn(A, Self::Item) -> A,
    {
        let mut cursor = self.new_cursor();
        let mut acc = seed;
        while cursor.advance()? {
            acc = func(acc, cursor.current()?);
        }
        Ok(acc)
    }

    fn aggregate_select<A, F, R, U>(&self, seed: A, func: F, result: R) -> Result<U>
    where
        F: Fn(A, Self::Item) -> A,
        R: FnOnce(A) -> U,
    {
        self.aggregate_seed(seed, func).map(result)
    }

    /// True for an empty source.
    fn all<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.new_cursor();
        while cursor.advance()? {
            if !predicate(&cursor.current()?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn any(&self) -> Result<bool> {
        self.new_cursor().advance()
    }

    fn any_where<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Ok(self.first_or_default_where(predicate)?.is_some())
    }

    fn contains(&self, value: &Self::Item) -> Result<bool>
    where
        Self::Item: PartialEq,
    {
        self.any_where(|item| item == value)
    }

    fn contains_by(&self, value: &Self::Item, comparer: &Comparer<'_, Self::Item>) -> Result<bool> {
        self.any_where(|item| comparer.equals(item, value))
    }

    fn count(&self) -> Result<usize> {
        self.count_where(|_| true)
    }

    fn count_where<P>(&self, predicate: P) -> Result<usize>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.new_cursor();
        let mut count = 0;
        while cursor.advance()? {
            if predicate(&cursor.current()?) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Zero-based; `OutOfRange` past the end.
    fn element_at(&self, index: usize) -> Result<Self::Item> {
        self.element_at_or_default(index)?
            .ok_or_else(|| Error::out_of_range("index"))
    }

    fn element_at_or_default(&self, index: usize) -> Result<Option<Self::Item>> {
        let mut cursor = self.new_cursor();
        let mut position = 0;
        while cursor.advance()? {
            if position == index {
                return cursor.current().map(Some);
            }
            position += 1;
        }
        Ok(None)
    }

    fn first(&self) -> Result<Self::Item> {
        self.first_where(|_| true)
    }

    fn first_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.first_or_default_where(predicate)?.ok_or(Error::NoMatch)
    }

    fn first_or_default(&self) -> Result<Option<Self::Item>> {
        self.first_or_default_where(|_| true)
    }

    fn first_or_default_where<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.new_cursor();
        while cursor.advance()? {
            let item = cursor.current()?;
            if predicate(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn last(&self) -> Result<Self::Item> {
        self.last_where(|_| true)
    }

    fn last_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.last_or_default_where(predicate)?.ok_or(Error::NoMatch)
    }

    fn last_or_default(&self) -> Result<Option<Self::Item>> {
        self.last_or_default_where(|_| true)
    }

    fn last_or_default_where<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.new_cursor();
        let mut found = None;
        while cursor.advance()? {
            let item = cursor.current()?;
            if predicate(&item) {
                found = Some(item);
            }
        }
        Ok(found)
    }

    fn single(&self) -> Result<Self::Item> {
        self.single_where(|_| true)
    }

    fn single_where<P>(&self, predicate: P) -> Result<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        self.single_or_default_where(predicate)?.ok_or(Error::NoMatch)
    }

    /// `Ok(None)` on zero matches; still `MultipleMatches` on two or more.
    fn single_or_default(&self) -> Result<Option<Self::Item>> {
        self.single_or_default_where(|_| true)
    }

    fn single_or_default_where<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        let mut cursor = self.new_cursor();
        let mut found = None;
        while cursor.advance()? {
            let item = cursor.current()?;
            if predicate(&item) {
                if found.is_some() {
                    return Err(Error::MultipleMatches);
                }
                found = Some(item);
            }
        }
        Ok(found)
    }

    /// Fails with `EmptySequence` on an empty source.
    fn sum(&self) -> Result<Self::Item>
    where
        Self::Item: Add<Output = Self::Item>,
    {
        self.sum_by(|item| item)
    }

    fn sum_by<U, F>(&self, selector: F) -> Result<U>
    where
        F: Fn(Self::Item) -> U,
        U: Add<Output = U>,
    {
        let mut cursor = self.new_cursor();
        if !cursor.advance()? {
            return Err(Error::EmptySequence);
        }
        let mut sum = selector(cursor.current()?);
        while cursor.advance()? {
            sum = sum + selector(cursor.current()?);
        }
        Ok(sum)
    }

    /// Fails with `EmptySequence` on an empty source.
    fn average(&self) -> Result<f64>
    where
        Self::Item: Into<f64>,
    {
        self.average_by(Into::into)
    }

    fn average_by<F>(&self, selector: F) -> Result<f64>
    where
        F: Fn(Self::Item) -> f64,
    {
        let mut cursor = self.new_cursor();
        let mut sum = 0.0;
        let mut count = 0usize;
        while cursor.advance()? {
            sum += selector(cursor.current()?);
            count += 1;
        }
        if count == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(sum / count as f64)
    }

    fn sequence_equal<O>(&self, other: &O) -> Result<bool>
    where
        O: Sequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        sequence_equal_with(self, other, |a, b| a == b)
    }

    fn sequence_equal_by<O>(&self, other: &O, comparer: &Comparer<'_, Self::Item>) -> Result<bool>
    where
        O: Sequence<Item = Self::Item> + ?Sized,
    {
        sequence_equal_with(self, other, |a, b| comparer.equals(a, b))
    }

    fn to_vec(&self) -> Result<Vec<Self::Item>> {
        let mut cursor = self.new_cursor();
        let mut out = Vec::with_capacity(QueryConfig::global().materialize_capacity_hint);
        while cursor.advance()? {
            out.push(cursor.current()?);
        }
        Ok(out)
    }

    /// Snapshot into a new, independent `List`.
    fn to_list(&self) -> Result<List<Self::Item>> {
        List::from_sequence(self)
    }

    /// Eagerly groups the sequence by key, default equality.
    fn to_lookup<'a, K, KF>(&self, key_selector: KF) -> Result<Lookup<'a, K, Self::Item>>
    where
        KF: Fn(&Self::Item) -> K,
        K: PartialEq + 'a,
    {
        Lookup::build(self, key_selector, |item| item, Comparer::default())
    }

    fn to_lookup_by<'a, K, E, KF, EF>(
        &self,
        key_selector: KF,
        element_selector: EF,
        comparer: Comparer<'a, K>,
    ) -> Result<Lookup<'a, K, E>>
    where
        KF: Fn(&Self::Item) -> K,
        EF: Fn(Self::Item) -> E,
        E: Clone,
    {
        Lookup::build(self, key_selector, element_selector, comparer)
    }
}

impl<S: Sequence + ?Sized> Aggregates for S {}

fn sequence_equal_with<A, B, F>(first: &A, second: &B, equals: F) -> Result<bool>
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    F: Fn(&A::Item, &A::Item) -> bool,
{
    let mut a = first.new_cursor();
    let mut b = second.new_cursor();
    loop {
        match (a.advance()?, b.advance()?) {
            (true, true) => {
                if !equals(&a.current()?, &b.current()?) {
                    return Ok(false);
                }
            }
            (false, false) => return Ok(true),
            _ => return Ok(false),
        }
    }
}
