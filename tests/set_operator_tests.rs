//! Distinct, Union, Intersect, Except.

mod test_data_gen;

use lazyq::prelude::*;
use test_data_gen::{drain, drain_cursor, CallCounter, FailOnce};

fn case_insensitive<'a>() -> Comparer<'a, &'a str> {
    Comparer::new(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b), |s: &&str| s.len() as u64)
}

#[test]
fn test_distinct_scenario() {
    let ages = List::from(vec![21, 46, 46, 55, 17, 21, 55, 55]);
    assert_eq!(drain(&ages.distinct()), vec![21, 46, 55, 17]);
}

#[test]
fn test_distinct_is_idempotent() {
    let words = List::from(vec!["b", "A", "a", "B", "c", "b"]);
    let once = words.clone().distinct_by(case_insensitive());
    let twice = words.distinct_by(case_insensitive()).distinct_by(case_insensitive());
    assert_eq!(drain(&once), vec!["b", "A", "c"]);
    assert_eq!(drain(&once), drain(&twice));
}

#[test]
fn test_distinct_all_duplicates_does_not_recurse() {
    let same = repeat(7u8, 200_000).expect("repeat");
    assert_eq!(drain(&same.distinct()), vec![7]);
}

#[test]
fn test_intersect_scenario() {
    let first = List::from(vec![44, 26, 92, 30, 71, 38]);
    let second = List::from(vec![39, 59, 83, 47, 26, 4, 30]);
    assert_eq!(drain(&first.intersect(second)), vec![26, 30]);
}

#[test]
fn test_intersect_yields_each_value_once() {
    let first = List::from(vec![1, 2, 2, 3, 1]);
    let second = List::from(vec![2, 1, 1]);
    assert_eq!(drain(&first.intersect_by(second, Comparer::hashing())), vec![1, 2]);
}

#[test]
fn test_except_removes_second_and_dedups_first() {
    let first = List::from(vec![1, 1, 2, 3, 3, 4]);
    let second = List::from(vec![3]);
    assert_eq!(drain(&first.except(second)), vec![1, 2, 4]);

    let names = List::from(vec!["Ann", "bob", "ANN", "Cy"]);
    let banned = List::from(vec!["BOB"]);
    assert_eq!(drain(&names.except_by(banned, case_insensitive())), vec!["Ann", "Cy"]);
}

#[test]
fn test_union_first_occurrence_order() {
    let first = List::from(vec![5, 3, 9, 7, 5, 9, 3, 7]);
    let second = List::from(vec![8, 3, 6, 4, 4, 9, 1, 0]);
    assert_eq!(drain(&first.union(second)), vec![5, 3, 9, 7, 8, 6, 4, 1, 0]);

    let mixed = List::from(vec!["a", "B"]).union_by(List::from(vec!["b", "C"]), case_insensitive());
    assert_eq!(drain(&mixed), vec!["a", "B", "C"]);
}

#[test]
fn test_second_side_is_drained_lazily() {
    let drained = CallCounter::new();
    let counter = drained.clone();
    let second = List::from(vec![1, 2]).select(move |x| {
        counter.hit();
        x
    });
    let query = List::from(vec![1, 2, 3]).except(second);
    let mut cursor = query.new_cursor();
    assert_eq!(drained.get(), 0);
    assert!(cursor.advance().expect("advance"));
    assert_eq!(drained.get(), 2);
    assert_eq!(cursor.current().expect("current"), 3);
}

#[test]
fn test_set_operators_restart_cleanly() {
    let first = List::from(vec![1, 2, 2, 3]);
    let second = List::from(vec![2, 4]);

    let mut distinct = first.clone().distinct().new_cursor();
    let mut union = first.clone().union(second.clone()).new_cursor();
    let mut intersect = first.clone().intersect(second.clone()).new_cursor();
    let mut except = first.except(second).new_cursor();

    for _ in 0..2 {
        assert_eq!(drain_cursor(&mut distinct), vec![1, 2, 3]);
        assert_eq!(drain_cursor(&mut union), vec![1, 2, 3, 4]);
        assert_eq!(drain_cursor(&mut intersect), vec![2]);
        assert_eq!(drain_cursor(&mut except), vec![1, 3]);
        distinct.restart();
        union.restart();
        intersect.restart();
        except.restart();
    }
}

#[test]
fn test_interleaved_cursors_keep_separate_seen_sets() {
    let query = List::from(vec![1, 1, 2, 2]).distinct();
    let mut a = query.new_cursor();
    let mut b = query.new_cursor();
    assert!(a.advance().expect("a"));
    assert!(b.advance().expect("b"));
    assert_eq!(a.current().expect("a"), 1);
    assert_eq!(b.current().expect("b"), 1);
    assert_eq!(drain_cursor(&mut a), vec![2]);
    assert_eq!(drain_cursor(&mut b), vec![2]);
}

#[test]
fn test_set_operators_over_borrowed_text() {
    let text = String::from("a b a c b");
    let shouted = String::from("A C");
    let words: List<&str> = text.split(' ').collect();
    assert_eq!(drain(&(&words).distinct()), vec!["a", "b", "c"]);

    let stop = String::from("b");
    let kept = (&words).except(List::from(vec![stop.as_str()]));
    assert_eq!(drain(&kept), vec!["a", "c"]);

    let upper: List<&str> = shouted.split(' ').collect();
    let common = (&words).intersect_by(upper, case_insensitive());
    assert_eq!(drain(&common), vec!["a", "c"]);
}

#[test]
fn test_failed_second_scan_is_retried_from_the_start() {
    let first = List::from(vec![1, 2, 3, 4]);
    let kept = (&first).except(FailOnce::new(vec![2, 3], 1));
    let mut cursor = kept.new_cursor();
    assert_eq!(cursor.advance(), Err(Error::InvalidPosition));
    assert_eq!(drain_cursor(&mut cursor), vec![1, 4]);

    let common = (&first).intersect(FailOnce::new(vec![3, 2], 0));
    let mut cursor = common.new_cursor();
    assert_eq!(cursor.advance(), Err(Error::InvalidPosition));
    assert_eq!(drain_cursor(&mut cursor), vec![2, 3]);
}
