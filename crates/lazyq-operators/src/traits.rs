//! `QueryOps`: chainable operators for every `Sequence`.
//!
//! Every method except the `group_by` family only wraps `self`; nothing is
//! pulled until a cursor is created and advanced. `group_by*` build their
//! `Lookup` on the spot and hand back a snapshot. Methods taking a plain predicate or selector have an
//! `_indexed` twin whose closure also receives the source position.
//!
//! Operators that compare elements default to structural equality with a
//! single hash bucket (`Comparer::default()`); the `_by` variants take an
//! explicit `Comparer`, e.g. `Comparer::hashing()` for large inputs.

use lazyq_core::{Comparer, IntoSequence, List, Result, Sequence};
use lazyq_lookup::{Grouping, Lookup};

use crate::concat::Concat;
use crate::default_if_empty::DefaultIfEmpty;
use crate::filter::Filter;
use crate::flatten::SelectMany;
use crate::join::{GroupJoin, Join};
use crate::map::Select;
use crate::set::{Distinct, Except, Intersect, Union};
use crate::skip::{Skip, SkipWhile};
use crate::take::{Take, TakeWhile};
use crate::zip::Zip;

pub trait QueryOps: Sequence + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, impl Fn(&Self::Item, usize) -> bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, move |item: &Self::Item, _: usize| predicate(item))
    }

    fn filter_indexed<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn select<U, F>(self, selector: F) -> Select<Self, impl Fn(Self::Item, usize) -> U, U>
    where
        F: Fn(Self::Item) -> U,
    {
        Select::new(self, move |item: Self::Item, _: usize| selector(item))
    }

    fn select_indexed<U, F>(self, selector: F) -> Select<Self, F, U>
    where
        F: Fn(Self::Item, usize) -> U,
    {
        Select::new(self, selector)
    }

    /// Flattens `collection(element)` for every element.
    #[allow(clippy::type_complexity)]
    fn select_many<I, F>(
        self,
        collection: F,
    ) -> SelectMany<
        Self,
        impl Fn(Self::Item, usize) -> I,
        impl Fn(Self::Item, I::Item) -> I::Item,
        I,
        I::Item,
    >
    where
        F: Fn(Self::Item) -> I,
        I: IntoSequence,
    {
        SelectMany::new(
            self,
            move |item: Self::Item, _: usize| collection(item),
            |_: Self::Item, inner: I::Item| inner,
        )
    }

    #[allow(clippy::type_complexity)]
    fn select_many_indexed<I, F>(
        self,
        collection: F,
    ) -> SelectMany<Self, F, impl Fn(Self::Item, I::Item) -> I::Item, I, I::Item>
    where
        F: Fn(Self::Item, usize) -> I,
        I: IntoSequence,
    {
        SelectMany::new(self, collection, |_: Self::Item, inner: I::Item| inner)
    }

    /// Flattens `collection(element, index)` and maps each
    /// `(element, inner)` pair through `result`.
    fn select_many_with<I, U, F, R>(self, collection: F, result: R) -> SelectMany<Self, F, R, I, U>
    where
        F: Fn(Self::Item, usize) -> I,
        I: IntoSequence,
        R: Fn(Self::Item, I::Item) -> U,
    {
        SelectMany::new(self, collection, result)
    }

    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, impl Fn(&Self::Item, usize) -> bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, move |item: &Self::Item, _: usize| predicate(item))
    }

    fn skip_while_indexed<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, impl Fn(&Self::Item, usize) -> bool>
    where
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, move |item: &Self::Item, _: usize| predicate(item))
    }

    fn take_while_indexed<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn distinct<'a>(self) -> Distinct<'a, Self>
    where
        Self::Item: PartialEq + 'a,
    {
        Distinct::new(self, Comparer::default())
    }

    fn distinct_by<'a>(self, comparer: Comparer<'a, Self::Item>) -> Distinct<'a, Self> {
        Distinct::new(self, comparer)
    }

    fn union<'a, B>(self, other: B) -> Union<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        Union::new(self, other, Comparer::default())
    }

    fn union_by<'a, B>(self, other: B, comparer: Comparer<'a, Self::Item>) -> Union<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Union::new(self, other, comparer)
    }

    fn intersect<'a, B>(self, other: B) -> Intersect<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        Intersect::new(self, other, Comparer::default())
    }

    fn intersect_by<'a, B>(self, other: B, comparer: Comparer<'a, Self::Item>) -> Intersect<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Intersect::new(self, other, comparer)
    }

    fn except<'a, B>(self, other: B) -> Except<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        Except::new(self, other, Comparer::default())
    }

    fn except_by<'a, B>(self, other: B, comparer: Comparer<'a, Self::Item>) -> Except<'a, Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Except::new(self, other, comparer)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        B: Sequence<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    fn default_if_empty(self, default: Self::Item) -> DefaultIfEmpty<Self> {
        DefaultIfEmpty::new(self, default)
    }

    fn zip<B, U, F>(self, other: B, selector: F) -> Zip<Self, B, F, U>
    where
        B: Sequence,
        F: Fn(Self::Item, B::Item) -> U,
    {
        Zip::new(self, other, selector)
    }

    /// Inner join on equal keys.
    fn join<'a, I, K, U, OK, IK, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Join<'a, Self, I, OK, IK, R, K, U>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, I::Item) -> U,
        K: PartialEq + 'a,
    {
        Join::new(self, inner, outer_key, inner_key, result, Comparer::default())
    }

    fn join_by<'a, I, K, U, OK, IK, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
        comparer: Comparer<'a, K>,
    ) -> Join<'a, Self, I, OK, IK, R, K, U>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, I::Item) -> U,
    {
        Join::new(self, inner, outer_key, inner_key, result, comparer)
    }

    /// One `result(outer, matches)` per outer element with at least one match.
    fn group_join<'a, I, K, U, OK, IK, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> GroupJoin<'a, Self, I, OK, IK, R, K, U>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, List<I::Item>) -> U,
        K: PartialEq + 'a,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, result, Comparer::default())
    }

    fn group_join_by<'a, I, K, U, OK, IK, R>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
        comparer: Comparer<'a, K>,
    ) -> GroupJoin<'a, Self, I, OK, IK, R, K, U>
    where
        I: Sequence,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, List<I::Item>) -> U,
    {
        GroupJoin::new(self, inner, outer_key, inner_key, result, comparer)
    }

    /// Groups the whole sequence right away, keyed by default equality.
    ///
    /// The returned `Lookup` is a sequence of groupings in key
    /// first-occurrence order. It is a snapshot: later changes to the source
    /// do not show up in it.
    fn group_by<'a, K, KF>(self, key_selector: KF) -> Result<Lookup<'a, K, Self::Item>>
    where
        KF: Fn(&Self::Item) -> K,
        K: PartialEq + 'a,
    {
        Lookup::build(&self, key_selector, |item| item, Comparer::default())
    }

    fn group_by_with<'a, K, E, KF, EF>(
        self,
        key_selector: KF,
        element_selector: EF,
        comparer: Comparer<'a, K>,
    ) -> Result<Lookup<'a, K, E>>
    where
        KF: Fn(&Self::Item) -> K,
        EF: Fn(Self::Item) -> E,
        E: Clone,
    {
        Lookup::build(&self, key_selector, element_selector, comparer)
    }

    /// `group_by_with` followed by a lazy `result(grouping)` per key.
    #[allow(clippy::type_complexity)]
    fn group_by_select<'a, K, E, U, KF, EF, R>(
        self,
        key_selector: KF,
        element_selector: EF,
        result: R,
        comparer: Comparer<'a, K>,
    ) -> Result<Select<Lookup<'a, K, E>, impl Fn(Grouping<K, E>, usize) -> U, U>>
    where
        KF: Fn(&Self::Item) -> K,
        EF: Fn(Self::Item) -> E,
        R: Fn(Grouping<K, E>) -> U,
        E: Clone,
    {
        let groups = Lookup::build(&self, key_selector, element_selector, comparer)?;
        Ok(Select::new(groups, move |group: Grouping<K, E>, _: usize| {
            result(group)
        }))
    }
}

impl<S: Sequence> QueryOps for S {}
