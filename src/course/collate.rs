//! Natural ordering for section and video names
//!
//! Digit runs compare by value so `Lesson 2` sorts before `Lesson 10`.
//! Letters compare without case or accents (`Éclair` sits with the E's),
//! and punctuation and spaces sort before digits, which sort before
//! letters.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A run of ASCII digits, ordered by value then by zero-padding
#[derive(Debug, PartialEq, Eq)]
struct Number<'a>(&'a str);

impl Ord for Number<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.0.trim_start_matches('0');
        let b = other.0.trim_start_matches('0');
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            // equal values: less zero-padding first
            .then_with(|| self.0.len().cmp(&other.0.len()))
    }
}

impl PartialOrd for Number<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Primary collation element. Variant order is the class order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Key<'a> {
    Symbol(char),
    Number(Number<'a>),
    /// Lowercased base letter with diacritics removed
    Letter(char),
}

fn primary_keys(s: &str) -> Vec<Key<'_>> {
    let mut keys = Vec::with_capacity(s.len());
    let mut digits_start = None;

    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            digits_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = digits_start.take() {
            keys.push(Key::Number(Number(&s[start..i])));
        }

        if c.is_alphanumeric() {
            let mut buf = [0u8; 4];
            for base in c.encode_utf8(&mut buf).nfd().filter(|m| !is_combining_mark(*m)) {
                keys.extend(base.to_lowercase().map(Key::Letter));
            }
        } else {
            keys.push(Key::Symbol(c));
        }
    }
    if let Some(start) = digits_start {
        keys.push(Key::Number(Number(&s[start..])));
    }
    keys
}

/// Compare two names with numeric-aware, accent- and case-insensitive
/// collation.
///
/// Ties are broken by accents (unaccented first), then by case (lowercase
/// first), so the result is a total order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(&primary_keys(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}
