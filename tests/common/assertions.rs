//! Predicates for status line output
//!
//! The binary always emits ANSI colors for the status line, so predicates
//! compare against the output with escape sequences removed.

#![allow(dead_code)]

use predicates::prelude::*;
use statusline::strip_ansi_codes;

/// The plain text of the line equals `expected`
pub fn plain_line_eq(expected: &str) -> impl Predicate<[u8]> {
    let expected = expected.to_string();
    predicate::function(move |out: &[u8]| {
        strip_ansi_codes(&String::from_utf8_lossy(out)) == expected
    })
}

/// The plain text of the line contains `fragment`
pub fn plain_line_contains(fragment: &str) -> impl Predicate<[u8]> {
    let fragment = fragment.to_string();
    predicate::function(move |out: &[u8]| {
        strip_ansi_codes(&String::from_utf8_lossy(out)).contains(&fragment)
    })
}

pub fn json_parse_error() -> impl Predicate<str> {
    predicates::str::contains("Error parsing JSON")
}

pub fn missing_token() -> impl Predicate<str> {
    predicates::str::contains("GITHUB_TOKEN not set in .env file")
}
