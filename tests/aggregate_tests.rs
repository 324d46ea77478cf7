//! Terminal operators over lazy pipelines.

mod test_data_gen;

use lazyq::prelude::*;
use test_data_gen::{pets, users, CallCounter};

/// Panics if an element past `limit` is ever projected.
fn guarded(limit: i64) -> impl Sequence<Item = i64> {
    range(1, 10).expect("range").select(move |x| {
        assert!(x <= limit, "pulled {x} past the deciding element");
        x
    })
}

#[test]
fn test_sum_and_average() {
    let empty: List<i32> = List::new();
    assert_eq!(empty.sum(), Err(Error::EmptySequence));
    assert_eq!(empty.average(), Err(Error::EmptySequence));

    let values = List::from(vec![4, 4, 5, 7, 8, 10, 18]);
    assert_eq!(values.sum().expect("sum"), 56);
    assert_eq!(values.average().expect("average"), 8.0);
    assert_eq!(users().sum_by(|u| u.id).expect("sum_by"), 6);
    let mean_name = pets().average_by(|p| p.name.len() as f64).expect("average_by");
    assert!((mean_name - 11.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_aggregate_reverses_words() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    let words: List<String> = sentence.split(' ').map(String::from).collect();
    let reversed = words
        .aggregate(|acc, word| format!("{word} {acc}"))
        .expect("aggregate");
    assert_eq!(reversed, "dog lazy the over jumps fox brown quick the");

    let longest = words
        .aggregate_select(String::new(), |best, w| if w.len() > best.len() { w } else { best }, |w| {
            w.to_uppercase()
        })
        .expect("aggregate_select");
    assert_eq!(longest, "QUICK");

    let none: List<String> = List::new();
    assert_eq!(none.aggregate(|a, b| a + &b), Err(Error::EmptySequence));
    assert_eq!(none.aggregate_seed(7usize, |n, w| n + w.len()), Ok(7));
}

#[test]
fn test_short_circuiting_terminals() {
    assert!(guarded(2).any_where(|x| *x == 2).expect("any_where"));
    assert!(!guarded(3).all(|x| *x < 3).expect("all"));
    assert_eq!(guarded(4).first_where(|x| x % 4 == 0), Ok(4));
    assert_eq!(guarded(5).first_or_default_where(|x| *x == 5), Ok(Some(5)));
    assert!(guarded(1).any().expect("any"));
    assert!(guarded(6).contains(&6).expect("contains"));
    assert_eq!(guarded(3).element_at(2), Ok(3));
}

#[test]
fn test_empty_source_terminals() {
    let empty = empty::<u8>();
    assert!(!empty.any().expect("any"));
    assert!(empty.all(|_| false).expect("all"));
    assert_eq!(empty.count(), Ok(0));
    assert_eq!(empty.first(), Err(Error::NoMatch));
    assert_eq!(empty.last(), Err(Error::NoMatch));
    assert_eq!(empty.single(), Err(Error::NoMatch));
    assert_eq!(empty.first_or_default(), Ok(None));
    assert_eq!(empty.last_or_default(), Ok(None));
    assert_eq!(empty.single_or_default(), Ok(None));
}

#[test]
fn test_last_scans_whole_sequence() {
    let reads = CallCounter::new();
    let counter = reads.clone();
    let numbers = List::from(vec![3, 8, 5, 8, 1]).select(move |x| {
        counter.hit();
        x
    });
    assert_eq!(numbers.last_where(|x| *x > 4), Ok(8));
    assert_eq!(reads.get(), 5);
    assert_eq!(numbers.last_or_default_where(|x| *x > 100), Ok(None));
    assert_eq!(numbers.last(), Ok(1));
}

#[test]
fn test_single_variants() {
    let numbers = List::from(vec![1, 2, 3, 2]);
    assert_eq!(numbers.single_where(|x| *x == 3), Ok(3));
    assert_eq!(numbers.single_where(|x| *x == 2), Err(Error::MultipleMatches));
    assert_eq!(numbers.single_where(|x| *x == 9), Err(Error::NoMatch));
    assert_eq!(numbers.single_or_default_where(|x| *x == 9), Ok(None));
    assert_eq!(
        numbers.single_or_default_where(|x| *x == 2),
        Err(Error::MultipleMatches)
    );
    assert_eq!(numbers.single(), Err(Error::MultipleMatches));
    assert_eq!(List::from(vec!["only"]).single(), Ok("only"));
}

#[test]
fn test_single_fails_at_second_match() {
    // Elements past the second match are never projected.
    let seq = range(1, 10).expect("range").select(|x| {
        assert!(x <= 3, "pulled {x} after the second match");
        x
    });
    assert_eq!(seq.single_where(|x| x % 2 == 1), Err(Error::MultipleMatches));
}

#[test]
fn test_element_at_variants() {
    let names = users().select(|u| u.name);
    assert_eq!(names.element_at(0), Ok("User1"));
    assert_eq!(names.element_at(2), Ok("User3"));
    assert_eq!(names.element_at(3), Err(Error::out_of_range("index")));
    assert_eq!(names.element_at_or_default(1), Ok(Some("User2")));
    assert_eq!(names.element_at_or_default(30), Ok(None));
}

#[test]
fn test_counting_and_membership() {
    let numbers = range(0, 10).expect("range");
    assert_eq!(numbers.count(), Ok(10));
    assert_eq!(numbers.count_where(|x| x % 3 == 0), Ok(4));
    assert!(numbers.contains(&9).expect("contains"));
    assert!(!numbers.contains(&10).expect("contains"));

    let words = List::from(vec!["Alpha", "beta"]);
    let case_blind = Comparer::new(
        |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
        |s: &&str| s.len() as u64,
    );
    assert!(words.contains_by(&"BETA", &case_blind).expect("contains_by"));
    assert!(!words.contains(&"BETA").expect("contains"));
}

#[test]
fn test_sequence_equality() {
    let numbers = List::from(vec![1i64, 2, 3]);
    let counted = |count| range(1, count).expect("range");
    assert!(counted(3).sequence_equal(&numbers).expect("equal"));
    assert!(!counted(2).sequence_equal(&numbers).expect("shorter"));
    assert!(!counted(4).sequence_equal(&numbers).expect("longer"));
    assert!(empty::<i64>().sequence_equal(&List::new()).expect("both empty"));

    let parity = Comparer::from_equals(|a: &i64, b: &i64| a % 2 == b % 2);
    assert!(List::from(vec![5, 8, 9])
        .sequence_equal_by(&numbers, &parity)
        .expect("equal_by"));
}

#[test]
fn test_materializing_is_a_snapshot() {
    let source = List::from(vec![1, 2]);
    let copied = (&source).filter(|_| true).to_list().expect("to_list");
    source.add(3);
    assert_eq!(copied.snapshot(), vec![1, 2]);
    assert!(!copied.ptr_eq(&source));
    assert_eq!(source.to_vec(), Ok(vec![1, 2, 3]));
}
