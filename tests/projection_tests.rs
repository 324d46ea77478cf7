//! Filter, Select, SelectMany, Skip/Take, Concat, Zip, DefaultIfEmpty.

mod test_data_gen;

use lazyq::prelude::*;
use test_data_gen::{check_restartable, drain, drain_cursor, CallCounter};

#[test]
fn test_concat_scenario() {
    let joined = List::from(vec![1, 2, 3]).concat(List::from(vec![3, 4, 5]));
    assert_eq!(drain(&joined), vec![1, 2, 3, 3, 4, 5]);
}

#[test]
fn test_concat_flattens_like_vec_concat() {
    let a = range(0, 4).expect("range").filter(|x| x % 2 == 0);
    let b = repeat(9, 2).expect("repeat");
    let expected = [drain(&a), drain(&b)].concat();
    assert_eq!(drain(&a.clone().concat(b.clone())), expected);
}

#[test]
fn test_chain_construction_is_lazy() {
    let throwing = List::from(vec![1, 2, 3])
        .filter(|_| panic!("predicate evaluated"))
        .select(|x| x * 2)
        .skip(1)
        .take(1);
    // Building and creating a cursor pulls nothing.
    let _cursor = throwing.new_cursor();
}

#[test]
#[should_panic(expected = "predicate evaluated")]
fn test_chain_panics_only_when_enumerated() {
    let throwing = List::from(vec![1, 2, 3]).filter(|_| panic!("predicate evaluated"));
    let _ = throwing.to_vec();
}

#[test]
fn test_filter_indexed_sees_source_positions() {
    let words = List::from(vec!["a", "bb", "c", "dd", "e"]);
    let picked = words.filter(|w| w.len() == 1).filter_indexed(|_, i| i != 1);
    // Second filter indexes its own source (the first filter's output).
    assert_eq!(drain(&picked), vec!["a", "e"]);
}

#[test]
fn test_select_runs_selector_on_each_read() {
    let calls = CallCounter::new();
    let seen = calls.clone();
    let projected = List::from(vec![10, 20]).select(move |x| {
        seen.hit();
        x + 1
    });
    let mut cursor = projected.new_cursor();
    assert!(cursor.advance().expect("advance"));
    assert_eq!(cursor.current().expect("current"), 11);
    assert_eq!(cursor.current().expect("current"), 11);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_select_indexed() {
    let tagged = List::from(vec!["x", "y"]).select_indexed(|s, i| format!("{s}{i}"));
    assert_eq!(drain(&tagged), vec!["x0", "y1"]);
}

#[test]
fn test_select_many_variants() {
    let nested = List::from(vec![vec![1, 2], vec![], vec![3]]);
    assert_eq!(drain(&nested.clone().select_many(|v| v)), vec![1, 2, 3]);

    let with_index = nested.clone().select_many_indexed(|v, i| vec![i; v.len()]);
    assert_eq!(drain(&with_index), vec![0, 0, 2]);

    let owners = List::from(vec![("ann", vec!["rex"]), ("bo", vec!["tom", "kit"])]);
    let pairs = owners.select_many_with(|(_, pets), _| pets, |(owner, _), pet| format!("{owner}/{pet}"));
    assert_eq!(drain(&pairs), vec!["ann/rex", "bo/tom", "bo/kit"]);
}

#[test]
fn test_select_many_accepts_arrays_and_sequences() {
    let from_arrays = range(1, 2).expect("range").select_many(|x| [x, -x]);
    assert_eq!(drain(&from_arrays), vec![1, -1, 2, -2]);

    let from_ranges = range(1, 3)
        .expect("range")
        .select_many(|n| range(0, n).expect("inner range"));
    assert_eq!(drain(&from_ranges), vec![0, 0, 1, 0, 1, 2]);
}

#[test]
fn test_skip_and_take_family() {
    let numbers = range(1, 10).expect("range");
    assert_eq!(drain(&numbers.skip(7)), vec![8, 9, 10]);
    assert!(drain(&numbers.skip(20)).is_empty());
    assert_eq!(drain(&numbers.take(2)), vec![1, 2]);
    assert_eq!(drain(&numbers.skip_while(|x| *x < 9)), vec![9, 10]);
    assert_eq!(drain(&numbers.take_while(|x| *x < 3)), vec![1, 2]);
    assert_eq!(drain(&numbers.skip_while_indexed(|_, i| i < 8)), vec![9, 10]);
    assert_eq!(drain(&numbers.take_while_indexed(|x, i| *x as usize > i && i < 2)), vec![1, 2]);
}

#[test]
fn test_take_while_current_after_end_is_invalid() {
    let mut cursor = List::from(vec![1, 5, 2]).take_while(|x| *x < 3).new_cursor();
    assert_eq!(drain_cursor(&mut cursor), vec![1]);
    assert_eq!(cursor.current(), Err(Error::InvalidPosition));
}

#[test]
fn test_take_does_not_over_pull() {
    let pulls = CallCounter::new();
    let counter = pulls.clone();
    let taken = range(0, 1_000)
        .expect("range")
        .filter(move |_| {
            counter.hit();
            true
        })
        .take(3);
    assert_eq!(drain(&taken), vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_zip_stops_at_shorter() {
    let letters = List::from(vec!['a', 'b', 'c']);
    let zipped = range(1, 10).expect("range").zip(letters, |n, c| format!("{c}{n}"));
    assert_eq!(drain(&zipped), vec!["a1", "b2", "c3"]);
}

#[test]
fn test_default_if_empty() {
    assert_eq!(drain(&empty::<i32>().default_if_empty(7)), vec![7]);
    assert_eq!(drain(&List::from(vec![1, 2]).default_if_empty(7)), vec![1, 2]);
}

#[test]
fn test_restart_and_interleaved_cursors_agree() {
    let query = range(1, 6)
        .expect("range")
        .filter(|x| x % 2 == 1)
        .select(|x| x * 10)
        .concat(repeat(0, 2).expect("repeat"))
        .skip(1)
        .take(3);

    let mut a = query.new_cursor();
    let mut b = query.new_cursor();
    let mut left = Vec::new();
    let mut right = Vec::new();
    loop {
        let more_a = a.advance().expect("advance a");
        let more_b = b.advance().expect("advance b");
        assert_eq!(more_a, more_b);
        if !more_a {
            break;
        }
        left.push(a.current().expect("current a"));
        right.push(b.current().expect("current b"));
    }
    assert_eq!(left, vec![30, 50, 0]);
    assert_eq!(left, right);

    a.restart();
    assert_eq!(drain_cursor(&mut a), left);
}

#[test]
fn test_current_before_advance_is_invalid() {
    let cursor = List::from(vec![1]).select(|x| x).new_cursor();
    assert_eq!(cursor.current(), Err(Error::InvalidPosition));
}

#[test]
fn test_select_many_restarts_mid_inner() {
    let words = List::from(vec!["ab", "", "cde"]);
    let chars = words.select_many(|w| w.chars().collect::<Vec<char>>());
    assert_eq!(check_restartable(&chars), vec!['a', 'b', 'c', 'd', 'e']);

    // Restart while the second inner sequence is half read.
    let mut cursor = chars.new_cursor();
    for _ in 0..4 {
        assert!(cursor.advance().expect("advance"));
    }
    assert_eq!(cursor.current(), Ok('d'));
    cursor.restart();
    assert!(cursor.advance().expect("advance"));
    assert_eq!(cursor.current(), Ok('a'));
}

#[test]
fn test_skip_while_restarts_into_skipping_state() {
    let tail = List::from(vec![1, 2, 5, 1, 7]).skip_while(|x| *x < 3);
    assert_eq!(check_restartable(&tail), vec![5, 1, 7]);

    let indexed = List::from(vec![9, 9, 9, 9]).skip_while_indexed(|_, i| i < 2);
    assert_eq!(check_restartable(&indexed), vec![9, 9]);
}

#[test]
fn test_take_while_restarts_out_of_terminal_state() {
    let head = List::from(vec![1, 2, 5, 1, 7]).take_while(|x| *x < 3);
    let mut cursor = head.new_cursor();
    assert_eq!(drain_cursor(&mut cursor), vec![1, 2]);
    assert_eq!(cursor.current(), Err(Error::InvalidPosition));
    cursor.restart();
    assert_eq!(drain_cursor(&mut cursor), vec![1, 2]);
    assert_eq!(check_restartable(&head), vec![1, 2]);

    let indexed = range(10, 5).expect("range").take_while_indexed(|_, i| i < 3);
    assert_eq!(check_restartable(&indexed), vec![10, 11, 12]);
}

#[test]
fn test_zip_restarts_both_sides() {
    let letters = List::from(vec!["a", "b", "c"]);
    let zipped = range(1, 5)
        .expect("range")
        .zip(letters, |n, s| format!("{n}{s}"));
    assert_eq!(check_restartable(&zipped), vec!["1a", "2b", "3c"]);
}
