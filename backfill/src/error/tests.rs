//! Unit tests for error rendering and conversions.

use rstest::rstest;
use std::error::Error as _;

use super::{FillError, SettingsError};
use crate::duration::DurationError;
use crate::literal::LiteralError;

#[rstest]
#[case(FillError::unparsable("abc", "i64"), "cannot parse 'abc' as i64")]
#[case(FillError::out_of_range("300", "u8"), "'300' is out of range for u8")]
#[case(
    FillError::from(LiteralError::Unbalanced("[1".to_owned())),
    "unbalanced brackets in '[1'"
)]
#[case(FillError::from(DurationError::Empty), "empty duration literal")]
fn renders_messages(#[case] err: FillError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn timestamp_errors_keep_their_source() {
    let source = chrono::DateTime::parse_from_rfc3339("yesterday").expect_err("invalid");
    let err = FillError::timestamp("yesterday", source);
    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("cannot parse timestamp 'yesterday'"));
}

#[test]
fn figment_errors_round_trip_through_settings_errors() {
    let err = SettingsError::from(figment::Error::from("boom"));
    assert!(err.to_string().contains("boom"));
    let back = figment::Error::from(err);
    assert_eq!(back.to_string(), "boom");
}
