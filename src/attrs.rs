//! Lenient parsing of element data attributes and inline style lengths.
//!
//! Attribute values arrive as strings written by the server template or by
//! earlier style writes (`"120px"`). Parsing follows the browser's
//! `parseFloat`: leading whitespace is skipped and the longest numeric prefix
//! wins, so `"120px"` reads as `120.0`. Anything without a numeric prefix is
//! treated as absent.

#[cfg(test)]
#[path = "attrs_test.rs"]
mod attrs_test;

/// Read-only access to an element's `data-*` attributes.
///
/// Keys are the attribute name without the `data-` prefix, in kebab case
/// (`"viewport-x"` for `data-viewport-x`).
pub trait DataAttrs {
    fn data(&self, key: &str) -> Option<String>;
}

impl DataAttrs for std::collections::HashMap<String, String> {
    fn data(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Parse the longest finite float prefix of `raw`.
#[must_use]
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse an attribute, falling back to `default` when it is missing or not numeric.
#[must_use]
pub fn float_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(parse_float_prefix).unwrap_or(default)
}

/// Like [`float_or`], but a parsed zero also falls back to `default`.
///
/// Used for zoom factors, where zero would divide by zero downstream.
#[must_use]
pub fn nonzero_float_or(raw: Option<&str>, default: f64) -> f64 {
    match raw.and_then(parse_float_prefix) {
        Some(v) if v.abs() > 0.0 => v,
        _ => default,
    }
}
