//! Equality + hash contract shared by set operators and the grouping engine.
//!
//! Callers may supply nothing, an `equals` function alone, or a full
//! `{equals, hash}` pair. Each form is resolved once, at construction, into a
//! `Comparer`; a missing hash function becomes a constant bucket, which keeps
//! every bucketed algorithm correct at linear-scan cost.
//!
//! The lifetime `'a` bounds the stored functions, so comparers work over
//! borrowed elements (`&str` slices of a local `String`) as well as owned ones.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::hash::stable_hash;

/// Hash code handed out when the caller did not provide a hash function.
pub const DEFAULT_BUCKET: u64 = 1;

pub struct Comparer<'a, T: ?Sized> {
    equals: Rc<dyn Fn(&T, &T) -> bool + 'a>,
    hash: Rc<dyn Fn(&T) -> u64 + 'a>,
}

impl<'a, T: ?Sized + 'a> Comparer<'a, T> {
    pub fn new<E, H>(equals: E, hash: H) -> Self
    where
        E: Fn(&T, &T) -> bool + 'a,
        H: Fn(&T) -> u64 + 'a,
    {
        Self {
            equals: Rc::new(equals),
            hash: Rc::new(hash),
        }
    }

    /// Comparer from an `equals` function alone; every value lands in one bucket.
    pub fn from_equals<E>(equals: E) -> Self
    where
        E: Fn(&T, &T) -> bool + 'a,
    {
        Self::new(equals, |_| DEFAULT_BUCKET)
    }

    /// Structural equality with stable hashing.
    pub fn hashing() -> Self
    where
        T: Eq + Hash,
    {
        Self::new(|a, b| a == b, |v| stable_hash(v))
    }
}

impl<T: ?Sized> Comparer<'_, T> {
    pub fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    pub fn hash_code(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Structural equality, constant bucket.
impl<'a, T: PartialEq + ?Sized + 'a> Default for Comparer<'a, T> {
    fn default() -> Self {
        Self::from_equals(|a, b| a == b)
    }
}

impl<T: ?Sized> Clone for Comparer<'_, T> {
    fn clone(&self) -> Self {
        Self {
            equals: Rc::clone(&self.equals),
            hash: Rc::clone(&self.hash),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_single_bucket() {
        let c = Comparer::<i32>::default();
        assert!(c.equals(&3, &3));
        assert!(!c.equals(&3, &4));
        assert_eq!(c.hash_code(&3), DEFAULT_BUCKET);
        assert_eq!(c.hash_code(&4), DEFAULT_BUCKET);
    }

    #[test]
    fn equals_only_gets_default_hash() {
        let c = Comparer::<String>::from_equals(|a, b| a.eq_ignore_ascii_case(b));
        assert!(c.equals(&"Dog".to_string(), &"dog".to_string()));
        assert_eq!(c.hash_code(&"x".to_string()), DEFAULT_BUCKET);
    }

    #[test]
    fn works_over_borrowed_values() {
        let text = String::from("Red red BLUE");
        let words: Vec<&str> = text.split(' ').collect();
        let folded = Comparer::<&str>::new(
            |a, b| a.eq_ignore_ascii_case(b),
            |s| s.len() as u64,
        );
        assert!(folded.equals(&words[0], &words[1]));
        assert!(!folded.equals(&words[1], &words[2]));
    }

    #[test]
    fn hashing_spreads_values() {
        let c = Comparer::<u32>::hashing();
        assert_eq!(c.hash_code(&7), c.hash_code(&7));
        assert_ne!(c.hash_code(&7), c.hash_code(&8));
    }
}
