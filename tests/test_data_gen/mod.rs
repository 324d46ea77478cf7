//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use lazyq::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub user_id: u32,
    pub name: &'static str,
}

pub fn users() -> List<User> {
    List::from(vec![
        User { id: 1, name: "User1" },
        User { id: 2, name: "User2" },
        User { id: 3, name: "User3" },
    ])
}

pub fn pets() -> List<Pet> {
    List::from(vec![
        Pet { user_id: 1, name: "cat" },
        Pet { user_id: 1, name: "dog" },
        Pet { user_id: 2, name: "bunny" },
    ])
}

/// Invocation counter shared between a closure and the test body.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Rc<Cell<usize>>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Drains a sequence, failing the test on any enumeration error.
pub fn drain<S: Sequence>(sequence: &S) -> Vec<S::Item> {
    sequence.to_vec().expect("enumeration failed")
}

/// Drains through an explicit cursor.
pub fn drain_cursor<C: Cursor>(cursor: &mut C) -> Vec<C::Item> {
    let mut out = Vec::new();
    while cursor.advance().expect("advance failed") {
        out.push(cursor.current().expect("current failed"));
    }
    out
}

/// Checks that a cursor left mid-stream is unaffected by a second cursor
/// draining the same sequence, and that `restart` starts over from the top.
/// Returns the full enumeration.
pub fn check_restartable<S>(sequence: &S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: PartialEq + Debug,
{
    let full = drain(sequence);

    let mut ahead = sequence.new_cursor();
    let mut behind = sequence.new_cursor();
    let mut from_ahead = Vec::new();
    if ahead.advance().expect("advance") {
        from_ahead.push(ahead.current().expect("current"));
    }
    assert_eq!(drain_cursor(&mut behind), full);
    from_ahead.extend(drain_cursor(&mut ahead));
    assert_eq!(from_ahead, full);

    let mut restarted = sequence.new_cursor();
    for _ in 0..=full.len() / 2 {
        restarted.advance().expect("advance");
    }
    restarted.restart();
    assert_eq!(drain_cursor(&mut restarted), full);
    full
}

/// Sequence over `items` whose `current()` fails exactly once, at
/// `fail_at`, across all of its cursors. Later reads succeed.
#[derive(Clone)]
pub struct FailOnce<T> {
    items: Rc<Vec<T>>,
    fail_at: usize,
    tripped: Rc<Cell<bool>>,
}

impl<T: Clone> FailOnce<T> {
    pub fn new(items: Vec<T>, fail_at: usize) -> Self {
        Self {
            items: Rc::new(items),
            fail_at,
            tripped: Rc::new(Cell::new(false)),
        }
    }
}

impl<T: Clone> Sequence for FailOnce<T> {
    type Item = T;
    type Cursor = FailOnceCursor<T>;

    fn new_cursor(&self) -> FailOnceCursor<T> {
        FailOnceCursor {
            source: self.clone(),
            position: None,
        }
    }
}

pub struct FailOnceCursor<T> {
    source: FailOnce<T>,
    position: Option<usize>,
}

impl<T: Clone> Cursor for FailOnceCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Result<bool> {
        let len = self.source.items.len();
        let next = self.position.map_or(0, |p| p + 1).min(len);
        self.position = Some(next);
        Ok(next < len)
    }

    fn current(&self) -> Result<T> {
        let position = self.position.ok_or(Error::InvalidPosition)?;
        if position == self.source.fail_at && !self.source.tripped.get() {
            self.source.tripped.set(true);
            return Err(Error::InvalidPosition);
        }
        self.source
            .items
            .get(position)
            .cloned()
            .ok_or(Error::InvalidPosition)
    }

    fn restart(&mut self) {
        self.position = None;
    }
}
