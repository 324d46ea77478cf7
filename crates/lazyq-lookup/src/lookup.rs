//! `Lookup`: an eagerly built multi-map from keys to `Grouping`s.
//!
//! Built in one pass over a source sequence. Keys are matched through a
//! `Comparer` (bucket by hash, then linear `equals` scan), and key order is
//! the order in which each key first appeared in the source.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use lazyq_core::config::QueryConfig;
use lazyq_core::{Comparer, Cursor, Error, List, Result, Sequence};

use crate::grouping::Grouping;

pub struct Lookup<'a, K, E> {
    inner: Rc<LookupInner<'a, K, E>>,
}

struct LookupInner<'a, K, E> {
    comparer: Comparer<'a, K>,
    /// hash code -> positions in `groupings`
    index: HashMap<u64, Vec<usize>>,
    groupings: Vec<Grouping<K, E>>,
}

impl<K, E> LookupInner<'_, K, E> {
    fn position(&self, key: &K) -> Option<usize> {
        let hash = self.comparer.hash_code(key);
        self.index.get(&hash).and_then(|slots| {
            slots
                .iter()
                .rev()
                .copied()
                .find(|&slot| self.comparer.equals(self.groupings[slot].key(), key))
        })
    }

    fn add(&mut self, key: K, element: E) {
        let slot = match self.position(&key) {
            Some(slot) => slot,
            None => {
                let hash = self.comparer.hash_code(&key);
                let slot = self.groupings.len();
                self.groupings.push(Grouping::new(key));
                self.index.entry(hash).or_default().push(slot);
                slot
            }
        };
        self.groupings[slot].push(element);
    }
}

impl<'a, K, E: Clone> Lookup<'a, K, E> {
    /// Groups every element of `source` under `key_selector(element)`,
    /// storing `element_selector(element)`.
    pub fn build<S, KF, EF>(
        source: &S,
        key_selector: KF,
        element_selector: EF,
        comparer: Comparer<'a, K>,
    ) -> Result<Self>
    where
        S: Sequence + ?Sized,
        KF: Fn(&S::Item) -> K,
        EF: Fn(S::Item) -> E,
    {
        Self::from_cursor(
            &mut source.new_cursor(),
            key_selector,
            element_selector,
            comparer,
        )
    }

    /// Like `build`, but drains a cursor the caller already owns.
    /// The cursor is left exhausted.
    pub fn from_cursor<C, KF, EF>(
        cursor: &mut C,
        key_selector: KF,
        element_selector: EF,
        comparer: Comparer<'a, K>,
    ) -> Result<Self>
    where
        C: Cursor + ?Sized,
        KF: Fn(&C::Item) -> K,
        EF: Fn(C::Item) -> E,
    {
        let mut inner = LookupInner {
            comparer,
            index: HashMap::with_capacity(QueryConfig::global().lookup_capacity_hint),
            groupings: Vec::new(),
        };

        #[cfg(feature = "tracing")]
        let mut elements = 0usize;
        while cursor.advance()? {
            let item = cursor.current()?;
            let key = key_selector(&item);
            inner.add(key, element_selector(item));
            #[cfg(feature = "tracing")]
            {
                elements += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(keys = inner.groupings.len(), elements, "built lookup");

        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    /// Elements grouped under `key`; an empty list for unknown keys.
    pub fn get(&self, key: &K) -> List<E> {
        self.inner
            .position(key)
            .map(|slot| self.inner.groupings[slot].elements().clone())
            .unwrap_or_default()
    }

    pub fn grouping(&self, key: &K) -> Option<Grouping<K, E>> {
        self.inner
            .position(key)
            .map(|slot| self.inner.groupings[slot].clone())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.position(key).is_some()
    }

    /// Distinct keys in first-occurrence order.
    pub fn keys(&self) -> List<K>
    where
        K: Clone,
    {
        self.inner
            .groupings
            .iter()
            .map(|g| g.key().clone())
            .collect()
    }

    /// Grouping at `index` in key order.
    pub fn grouping_at(&self, index: usize) -> Result<Grouping<K, E>> {
        self.inner
            .groupings
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_range("index"))
    }
}

impl<K, E> Lookup<'_, K, E> {
    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.groupings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.groupings.is_empty()
    }
}

impl<K, E> Clone for Lookup<'_, K, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<K: fmt::Debug, E: fmt::Debug> fmt::Debug for Lookup<'_, K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.groupings.iter()).finish()
    }
}

/// A lookup is itself a sequence of its groupings, in key order.
impl<'a, K, E: Clone> Sequence for Lookup<'a, K, E> {
    type Item = Grouping<K, E>;
    type Cursor = LookupCursor<'a, K, E>;

    fn new_cursor(&self) -> LookupCursor<'a, K, E> {
        LookupCursor {
            inner: Rc::clone(&self.inner),
            position: None,
        }
    }
}

pub struct LookupCursor<'a, K, E> {
    inner: Rc<LookupInner<'a, K, E>>,
    position: Option<usize>,
}

impl<K, E> Cursor for LookupCursor<'_, K, E> {
    type Item = Grouping<K, E>;

    fn advance(&mut self) -> Result<bool> {
        let len = self.inner.groupings.len();
        let next = self.position.map_or(0, |p| p.saturating_add(1)).min(len);
        self.position = Some(next);
        Ok(next < len)
    }

    fn current(&self) -> Result<Grouping<K, E>> {
        self.position
            .and_then(|p| self.inner.groupings.get(p))
            .cloned()
            .ok_or(Error::InvalidPosition)
    }

    fn restart(&mut self) {
        self.position = None;
    }
}
