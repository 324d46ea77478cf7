//! Hash-bucketed set driven by a `Comparer`.
//!
//! Values are bucketed by `Comparer::hash_code` and matched inside a bucket by
//! a linear `Comparer::equals` scan (newest first). With the default
//! constant-bucket comparer this degrades to a single linear list, which is
//! slow but still correct.

use std::collections::HashMap;

use lazyq_core::config::QueryConfig;
use lazyq_core::Comparer;

pub struct BucketSet<'a, T> {
    comparer: Comparer<'a, T>,
    buckets: HashMap<u64, Vec<T>>,
    len: usize,
}

impl<'a, T> BucketSet<'a, T> {
    pub fn new(comparer: Comparer<'a, T>) -> Self {
        Self::with_capacity(comparer, QueryConfig::global().seen_set_capacity_hint)
    }

    pub fn with_capacity(comparer: Comparer<'a, T>, capacity: usize) -> Self {
        Self {
            comparer,
            buckets: HashMap::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        let hash = self.comparer.hash_code(value);
        self.buckets
            .get(&hash)
            .map_or(false, |bucket| self.scan(bucket, value))
    }

    /// Adds `value` unless an equal value is already present.
    /// Returns `true` if it was added.
    pub fn insert(&mut self, value: T) -> bool {
        let hash = self.comparer.hash_code(&value);
        let comparer = &self.comparer;
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().rev().any(|seen| comparer.equals(&value, seen)) {
            return false;
        }
        bucket.push(value);
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value; the comparer is kept.
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }

    fn scan(&self, bucket: &[T], value: &T) -> bool {
        bucket
            .iter()
            .rev()
            .any(|seen| self.comparer.equals(value, seen))
    }
}
