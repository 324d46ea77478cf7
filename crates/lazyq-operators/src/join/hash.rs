use std::marker::PhantomData;
use std::rc::Rc;

use lazyq_core::{Comparer, Cursor, Error, ListCursor, Result, Sequence};
use lazyq_lookup::Lookup;

use super::build_inner;

/// Inner join: one `result(outer, inner)` per matching pair, outer order first,
/// then inner order within a key. Outer elements without a match produce nothing.
pub struct Join<'a, O, I, OK, IK, R, K, U> {
    outer: O,
    inner: I,
    outer_key: Rc<OK>,
    inner_key: Rc<IK>,
    result: Rc<R>,
    comparer: Comparer<'a, K>,
    _marker: PhantomData<fn() -> U>,
}

impl<'a, O, I, OK, IK, R, K, U> Join<'a, O, I, OK, IK, R, K, U>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> U,
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

impl<O: Clone, I: Clone, OK, IK, R, K, U> Clone for Join<'_, O, I, OK, IK, R, K, U> {
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

impl<'a, O, I, OK, IK, R, K, U> Sequence for Join<'a, O, I, OK, IK, R, K, U>
where
    O: Sequence,
    I: Sequence,
    OK: Fn(&O::Item) -> K,
    IK: Fn(&I::Item) -> K,
    R: Fn(O::Item, I::Item) -> U,
    U: Clone,
{
    type Item = U;
    type Cursor = JoinCursor<'a, O::Cursor, I::Cursor, OK, IK, R, K, U>;

    fn new_cursor(&self) -> Self::Cursor {
        JoinCursor {
            outer: self.outer.new_cursor(),
            inner: self.inner.new_cursor(),
            outer_key: Rc::clone(&self.outer_key),
            inner_key: Rc::clone(&self.inner_key),
            result: Rc::clone(&self.result),
            comparer: self.comparer.clone(),
            lookup: None,
            outer_item: None,
            matches: None,
            _marker: PhantomData,
        }
    }
}

pub struct JoinCursor<'a, OC: Cursor, IC: Cursor, OK, IK, R, K, U> {
    outer: OC,
    inner: IC,
    outer_key: Rc<OK>,
    inner_key: Rc<IK>,
    result: Rc<R>,
    comparer: Comparer<'a, K>,
    lookup: Option<Lookup<'a, K, IC::Item>>,
    outer_item: Option<OC::Item>,
    /// Inner elements matching `outer_item`.
    matches: Option<ListCursor<IC::Item>>,
    _marker: PhantomData<fn() -> U>,
}

impl<'a, OC, IC, OK, IK, R, K, U> JoinCursor<'a, OC, IC, OK, IK, R, K, U>
where
    OC: Cursor,
    IC: Cursor,
    IC::Item: Clone,
    IK: Fn(&IC::Item) -> K,
{
    fn lookup(&mut self) -> Result<Lookup<'a, K, IC::Item>> {
        if let Some(lookup) = &self.lookup {
            return Ok(lookup.clone());
        }
        let lookup = build_inner(&mut self.inner, &*self.inner_key, &self.comparer, "join.inner")?;
        self.lookup = Some(lookup.clone());
        Ok(lookup)
    }
}

impl<OC, IC, OK, IK, R, K, U> Cursor for JoinCursor<'_, OC, IC, OK, IK, R, K, U>
where
    OC: Cursor,
    OC::Item: Clone,
    IC: Cursor,
    IC::Item: Clone,
    OK: Fn(&OC::Item) -> K,
    IK: Fn(&IC::Item) -> K,
    R: Fn(OC::Item, IC::Item) -> U,
{
    type Item = U;

    fn advance(&mut self) -> Result<bool> {
        let lookup = self.lookup()?;
        loop {
            if let Some(matches) = self.matches.as_mut() {
                if matches.advance()? {
                    return Ok(true);
                }
            }
            if !self.outer.advance()? {
                self.matches = None;
                self.outer_item = None;
                return Ok(false);
            }
            let item = self.outer.current()?;
            let key = (self.outer_key)(&item);
            self.matches = Some(lookup.get(&key).new_cursor());
            self.outer_item = Some(item);
        }
    }

    fn current(&self) -> Result<U> {
        let outer = self.outer_item.as_ref().ok_or(Error::InvalidPosition)?;
        let inner = self
            .matches
            .as_ref()
            .ok_or(Error::InvalidPosition)?
            .current()?;
        Ok((self.result)(outer.clone(), inner))
    }

    fn restart(&mut self) {
        self.outer.restart();
        self.inner.restart();
        self.lookup = None;
        self.outer_item = None;
        self.matches = None;
    }
}
