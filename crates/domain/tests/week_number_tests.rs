//! Tests for week-number validation
//!
//! Ranking queries validate the week before any request is built.

use footprint_domain::{ranking::WeekNumber, ValidationError};
use proptest::prelude::*;

#[test]
fn test_blank_week_means_latest() {
    assert_eq!(WeekNumber::parse("").unwrap(), None);
    assert_eq!(WeekNumber::parse("   ").unwrap(), None);
}

#[test]
fn test_positive_week_is_accepted() {
    let week = WeekNumber::parse(" 12 ").unwrap().unwrap();
    assert_eq!(week.get(), 12);
}

#[test]
fn test_invalid_weeks_are_rejected() {
    for input in ["0", "-3", "abc", "2.5", "1e3"] {
        let err = WeekNumber::parse(input).unwrap_err();
        assert!(
            matches!(err, ValidationError::InvalidWeek { .. }),
            "expected InvalidWeek for {:?}",
            input
        );
    }
}

#[test]
fn test_invalid_week_message_is_bilingual() {
    let message = WeekNumber::parse("abc").unwrap_err().to_string();
    assert!(message.contains("week must be a positive integer"));
    assert!(message.contains("周次必须为正整数"));
}

proptest! {
    #[test]
    fn prop_any_positive_u32_parses(week in 1u32..=u32::MAX) {
        let parsed = WeekNumber::parse(&week.to_string()).unwrap().unwrap();
        prop_assert_eq!(parsed.get(), week);
    }
}
