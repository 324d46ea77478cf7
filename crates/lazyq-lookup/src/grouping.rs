//! A key plus the ordered elements filed under it.

use std::fmt;
use std::rc::Rc;

use lazyq_core::{List, ListCursor, Sequence};

/// One group of a `Lookup`. The key is fixed at creation; elements keep
/// insertion order. Clones share both the key and the element storage.
pub struct Grouping<K, T> {
    key: Rc<K>,
    elements: List<T>,
}

impl<K, T> Grouping<K, T> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key: Rc::new(key),
            elements: List::new(),
        }
    }

    pub(crate) fn push(&self, element: T) {
        self.elements.add(element);
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn elements(&self) -> &List<T> {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<K, T> Clone for Grouping<K, T> {
    fn clone(&self) -> Self {
        Self {
            key: Rc::clone(&self.key),
            elements: self.elements.clone(),
        }
    }
}

impl<K: fmt::Debug, T: fmt::Debug> fmt::Debug for Grouping<K, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.key)
            .field("elements", &self.elements)
            .finish()
    }
}

impl<K, T: Clone> Sequence for Grouping<K, T> {
    type Item = T;
    type Cursor = ListCursor<T>;

    fn new_cursor(&self) -> ListCursor<T> {
        self.elements.new_cursor()
    }
}
