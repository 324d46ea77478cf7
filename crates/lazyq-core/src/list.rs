//! `List`: the concrete, mutable, indexable sequence.
//!
//! Storage is shared (`Rc<RefCell<Vec<T>>>`) between the list handle, its
//! clones, and every cursor handed out by it. Constructing a list *from* a
//! sequence or slice copies the elements (a snapshot, not a live view).
//! Mutating a list while one of its cursors is mid-iteration is allowed; the
//! cursor then observes unspecified (but memory-safe) results.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::QueryConfig;
use crate::cursor::{Cursor, Sequence};
use crate::error::{Error, Result};

pub struct List<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Adds an element to the end of the list.
    pub fn add(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    /// Removes all elements.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Inserts an element at `index`; `index == len()` appends.
    pub fn insert(&self, index: usize, item: T) -> Result<()> {
        let mut items = self.items.borrow_mut();
        if index > items.len() {
            return Err(Error::out_of_range("index"));
        }
        items.insert(index, item);
        Ok(())
    }

    /// Reverses the whole list in place.
    pub fn reverse(&self) {
        self.items.borrow_mut().reverse();
    }

    /// Reverses `count` elements starting at `index`.
    pub fn reverse_range(&self, index: usize, count: usize) -> Result<()> {
        let mut items = self.items.borrow_mut();
        let end = index
            .checked_add(count)
            .filter(|end| *end <= items.len())
            .ok_or_else(|| Error::out_of_range("count"))?;
        items[index..end].reverse();
        Ok(())
    }

    /// Whether two handles share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: Clone> List<T> {
    /// Snapshot of `source` taken now; later changes to the source are not seen.
    pub fn from_sequence<S>(source: &S) -> Result<Self>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let list = Self::with_capacity(QueryConfig::global().materialize_capacity_hint);
        list.add_range(source)?;
        Ok(list)
    }

    pub fn from_slice(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }

    /// Element at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    /// Element at `index` in O(1); fails with `OutOfRange` past the end.
    pub fn element_at(&self, index: usize) -> Result<T> {
        self.get(index).ok_or_else(|| Error::out_of_range("index"))
    }

    /// Appends every element of `items`.
    ///
    /// The source is drained before the list is touched, so a list may be
    /// extended with a view of itself.
    pub fn add_range<S>(&self, items: &S) -> Result<()>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        let drained = drain(items)?;
        self.items.borrow_mut().extend(drained);
        Ok(())
    }

    /// Inserts every element of `items` at `index`, preserving their order.
    pub fn insert_range<S>(&self, index: usize, items: &S) -> Result<()>
    where
        S: Sequence<Item = T> + ?Sized,
    {
        if index > self.len() {
            return Err(Error::out_of_range("index"));
        }
        let drained = drain(items)?;
        let mut store = self.items.borrow_mut();
        if index > store.len() {
            return Err(Error::out_of_range("index"));
        }
        store.splice(index..index, drained);
        Ok(())
    }

    /// Copies elements starting at `index` into `dest[dest_index..]`.
    ///
    /// `count = None` copies to the end of the list. Returns the number of
    /// elements copied.
    pub fn copy_to(
        &self,
        index: usize,
        dest: &mut [T],
        dest_index: usize,
        count: Option<usize>,
    ) -> Result<usize> {
        let items = self.items.borrow();
        if index > items.len() {
            return Err(Error::out_of_range("index"));
        }
        if dest_index > dest.len() {
            return Err(Error::out_of_range("arrayIndex"));
        }
        let available = items.len() - index;
        let n = count.map_or(available, |c| c.min(available));
        if dest.len() - dest_index < n {
            return Err(Error::invalid_argument("array"));
        }
        dest[dest_index..dest_index + n].clone_from_slice(&items[index..index + n]);
        Ok(n)
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

fn drain<S>(source: &S) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized,
{
    let mut cursor = source.new_cursor();
    let mut out = Vec::new();
    while cursor.advance()? {
        out.push(cursor.current()?);
    }
    Ok(out)
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones share storage; use `from_sequence` or `from_slice` for a copy.
impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Rc::new(RefCell::new(items)),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.borrow().iter()).finish()
    }
}

impl<T: Serialize> Serialize for List<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.items.borrow().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for List<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(List::from)
    }
}

impl<T: Clone> Sequence for List<T> {
    type Item = T;
    type Cursor = ListCursor<T>;

    fn new_cursor(&self) -> ListCursor<T> {
        ListCursor {
            items: Rc::clone(&self.items),
            position: None,
        }
    }
}

/// Cursor over a `List`. Reads the live length on every step.
pub struct ListCursor<T> {
    items: Rc<RefCell<Vec<T>>>,
    /// `None` = before first; `Some(len)` = past the end.
    position: Option<usize>,
}

impl<T: Clone> Cursor for ListCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Result<bool> {
        let len = self.items.borrow().len();
        let next = self.position.map_or(0, |p| p.saturating_add(1)).min(len);
        self.position = Some(next);
        Ok(next < len)
    }

    fn current(&self) -> Result<T> {
        let index = self.position.ok_or(Error::InvalidPosition)?;
        self.items
            .borrow()
            .get(index)
            .cloned()
            .ok_or(Error::InvalidPosition)
    }

    fn restart(&mut self) {
        self.position = None;
    }
}
