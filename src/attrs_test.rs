#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

#[test]
fn parses_plain_numbers() {
    assert_eq!(parse_float_prefix("12"), Some(12.0));
    assert_eq!(parse_float_prefix("-3.5"), Some(-3.5));
    assert_eq!(parse_float_prefix("+0.25"), Some(0.25));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("7."), Some(7.0));
}

#[test]
fn parses_numeric_prefix_of_css_length() {
    assert_eq!(parse_float_prefix("120px"), Some(120.0));
    assert_eq!(parse_float_prefix("  -42.75px"), Some(-42.75));
}

#[test]
fn parses_exponent_only_when_complete() {
    assert_eq!(parse_float_prefix("1.5e2"), Some(150.0));
    assert_eq!(parse_float_prefix("2e-1px"), Some(0.2));
    assert_eq!(parse_float_prefix("3em"), Some(3.0));
    assert_eq!(parse_float_prefix("4e+"), Some(4.0));
}

#[test]
fn rejects_non_numeric() {
    assert_eq!(parse_float_prefix(""), None);
    assert_eq!(parse_float_prefix("px"), None);
    assert_eq!(parse_float_prefix("-"), None);
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix("NaN"), None);
}

#[test]
fn float_or_uses_default_when_missing_or_invalid() {
    assert_eq!(float_or(None, 3.0), 3.0);
    assert_eq!(float_or(Some("abc"), 3.0), 3.0);
    assert_eq!(float_or(Some("0"), 3.0), 0.0);
    assert_eq!(float_or(Some("9px"), 3.0), 9.0);
}

#[test]
fn nonzero_float_or_rejects_zero() {
    assert_eq!(nonzero_float_or(Some("0"), 1.0), 1.0);
    assert_eq!(nonzero_float_or(Some("-0.0"), 1.0), 1.0);
    assert_eq!(nonzero_float_or(Some("0.5"), 1.0), 0.5);
    assert_eq!(nonzero_float_or(None, 1.0), 1.0);
}

#[test]
fn hashmap_provides_data_attrs() {
    let mut attrs = HashMap::new();
    attrs.insert("card-id".to_owned(), "c-1".to_owned());
    assert_eq!(attrs.data("card-id").as_deref(), Some("c-1"));
    assert_eq!(attrs.data("zoom"), None);
}
