//! Integration tests for the predicate library.

use std::collections::{BTreeSet, HashMap};

use chrono::{Days, NaiveDate};
use fieldcheck::predicates::{
    before_1905, before_date, exceeds_length, future_date, future_date_at, max_length,
    must_be_entered, past_date, past_date_at, HasLength, MAX_LENGTH,
};
use fieldcheck::{Clock, SystemClock};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_must_be_entered_ignores_content() {
    assert!(must_be_entered::<String>(None));
    assert!(!must_be_entered(Some(&String::new())));
    assert!(!must_be_entered(Some(&ymd(1986, 4, 17))));
    assert!(!must_be_entered(Some(&-1)));
}

#[test]
fn test_max_length_threshold_is_32() {
    assert_eq!(MAX_LENGTH, 32);

    // Exactly 32 characters - should pass
    assert!(!max_length(Some(&"x".repeat(32))));

    // 33 characters - should fail
    assert!(max_length(Some(&"x".repeat(33))));
}

#[test]
fn test_max_length_same_rule_for_text_and_sequences() {
    let lengths = [0usize, 1, 31, 32, 33, 67];

    for len in lengths {
        let text = "a".repeat(len);
        let seq: Vec<u32> = (0..len as u32).collect();
        assert_eq!(max_length(Some(text.as_str())), max_length(Some(&seq)));
        assert_eq!(max_length(Some(&seq)), len > 32);
    }
}

#[test]
fn test_max_length_other_collections() {
    let map: HashMap<u32, u32> = (0..40).map(|i| (i, i)).collect();
    assert!(max_length(Some(&map)));

    let set: BTreeSet<u32> = (0..10).collect();
    assert!(!max_length(Some(&set)));

    let slice: &[u8] = &[1, 2, 3];
    assert!(!max_length(Some(slice)));
}

#[test]
fn test_custom_length_type() {
    struct Queue(usize);

    impl HasLength for Queue {
        fn length(&self) -> usize {
            self.0
        }
    }

    assert!(max_length(Some(&Queue(100))));
    assert!(!max_length(Some(&Queue(2))));
    assert!(exceeds_length(Some(&Queue(3)), 2));
}

#[test]
fn test_absent_values_never_exceed_length() {
    assert!(!max_length::<str>(None));
    assert!(!exceeds_length::<Vec<u8>>(None, 0));
}

#[test]
fn test_future_date_relative_to_today() {
    let today = SystemClock.today();

    assert!(!future_date(Some(today)));
    assert!(future_date(today.checked_add_days(Days::new(1))));
    assert!(!future_date(today.checked_sub_days(Days::new(1))));
}

#[test]
fn test_past_date_relative_to_today() {
    let today = SystemClock.today();

    assert!(!past_date(Some(today)));
    assert!(past_date(today.checked_sub_days(Days::new(1))));
    assert!(!past_date(today.checked_add_days(Days::new(1))));
}

#[test]
fn test_date_predicates_with_explicit_reference() {
    let today = ymd(2020, 2, 29);

    assert!(future_date_at(Some(ymd(2020, 3, 1)), today));
    assert!(!future_date_at(Some(today), today));
    assert!(past_date_at(Some(ymd(2020, 2, 28)), today));
    assert!(!past_date_at(Some(today), today));
}

#[test]
fn test_before_1905() {
    assert!(before_1905(Some(ymd(1904, 11, 4))));
    assert!(before_1905(Some(NaiveDate::MIN)));
    assert!(!before_1905(Some(ymd(1905, 1, 1))));
    assert!(!before_1905(Some(NaiveDate::MAX)));
}

#[test]
fn test_before_custom_threshold() {
    let threshold = ymd(2000, 1, 1);

    assert!(before_date(Some(ymd(1999, 12, 31)), threshold));
    assert!(!before_date(Some(threshold), threshold));
}

#[test]
fn test_date_predicates_treat_absence_as_invalid() {
    assert!(future_date(None));
    assert!(past_date(None));
    assert!(before_1905(None));
}
