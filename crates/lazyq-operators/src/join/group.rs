use std::marker::PhantomData;
use std::rc::Rc;

use lazyq_core::{Comparer, Cursor, Error, List, Result, Sequence};
use lazyq_lookup::Lookup;

use super::build_inner;

/// One `result(outer, matches)` per outer element that has at least one
/// inner match. Outer elements with no match are dropped, not paired with
/// an empty list.
pub struct GroupJoin<'a, O, I, OK, IK, R, K, U> {
    outer: O,
    inner: I,
    outer_key: Rc<OK>,
    inner_key: Rc<IK>,
    result: Rc<R>,
    comparer: Comparer<'a, K>,
    _marker: PhantomData<fn() -> U>,
}

impl<'a, O, I, OK, IK, R, K, U> GroupJoin<'a, O, I, OK, IK, R, K, U>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, List<I::Item>) -> U,
{
    pub fn new(
        outer: O,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
        comparer: Comparer<'a, K>,
    ) -> Self {
        Self {
            outer,
            inner,
            outer_key: Rc::new(outer_key),
            inner_key: Rc::new(inner_key),
            result: Rc::new(result),
            comparer,
            _marker: PhantomData,
        }
    }
}

impl<O: Clone, I: Clone, OK, IK, R, K, U> Clone for GroupJoin<'_, O, I, OK, IK, R, K, U> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            result: Rc::clone(&self.result),
            comparer: self.comparer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<'a, O, I, OK, IK, R, K, U> Sequence for GroupJoin<'a, O, I, OK, IK, R, K, U>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, List<I::Item>) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = GroupJoinCursor<'a, O::Cursor, I::Cursor, OK, IK, R, K, U>;

    fn new_cursor(&self) -> Self::Cursor {
        GroupJoinCursor {
            outer: self.outer.new_cursor(),
            inner: self.inner.new_cursor(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            result: Rc::clone(&self.result),
            comparer: self.comparer.clone(),
            lookup: None,
            current: None,
            _marker: PhantomData,
        }
    }
}

pub struct GroupJoinCursor<'a, OC: Cursor, IC: Cursor, OK, IK, R, K, U> {
    outer: OC,
    inner: IC,
    outer_key: Rc<OK>,
    inner_key: Rc<IK>,
    result: Rc<R>,
    comparer: Comparer<'a, K>,
    lookup: Option<Lookup<'a, K, IC::Item>>,
    current: Option<(OC::Item, List<IC::Item>)>,
    _marker: PhantomData<fn() -> U>,
}

impl<OC, IC, OK, IK, R, K, U> Cursor for GroupJoinCursor<'_, OC, IC, OK, IK, R, K, U>
where
    OC: Cursor,
    OC::Item: Clone,
    IC: Cursor,
    IC::Item: Clone,
    OK: Fn(&OC::Item) -> K,
    IK: Fn(&IC::Item) -> K,
    R: Fn(OC::Item, List<IC::Item>) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<bool> {
        let lookup = match &self.lookup {
            Some(lookup) => lookup.clone(),
            None => {
                let built = build_inner(
                    &mut self.inner,
                    &*self.inner_key,
                    &self.comparer,
                    "group_join.inner",
                )?;
                self.lookup = Some(built.clone());
                built
            }
        };

        while self.outer.advance()? {
            let item = self.outer.current()?;
            let matches = lookup.get(&(self.outer_key)(&item));
            if !matches.is_empty() {
                self.current = Some((item, matches));
                return Ok(true);
            }
        }
        self.current = None;
        Ok(false)
    }

    fn current(&self) -> Result<U> {
        let (outer, matches) = self.current.as_ref().ok_or(Error::InvalidPosition)?;
        Ok((self.result)(outer.clone(), matches.clone()))
    }

    fn restart(&mut self) {
        self.outer.restart();
        self.inner.restart();
        self.lookup = None;
        self.current = None;
    }
}
