//! Partial obscuring of string values
//!
//! A string is cut into segments on `@`, space and `.`. Each segment keeps its
//! leading characters (and its last one when long enough) and the rest becomes
//! `*`. Delimiters are copied through untouched, so `john.doe@example.com`
//! still reads like an email address after masking.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

const MASK_CHAR: char = '*';

lazy_static! {
    // Single source for both the segment split and the skeleton split.
    static ref DELIMITERS: Regex = Regex::new(r"[@ .]").unwrap();
}

/// Obscure a value destined for a masked field
///
/// Only non-empty strings are transformed. Numbers, booleans, null, arrays and
/// objects come back as they are.
pub fn obscure(value: &Value) -> Value {
    match value {
        Value::String(text) if !text.is_empty() => Value::String(obscure_str(text)),
        other => other.clone(),
    }
}

/// Obscure every segment of `text`, keeping delimiters in place
pub fn obscure_str(text: &str) -> String {
    let mut obscured = DELIMITERS.split(text).map(obscure_segment);

    let mut out = String::with_capacity(text.len());
    for part in split_keeping_delimiters(text) {
        if is_delimiter(part) {
            out.push_str(part);
        } else {
            match obscured.next() {
                Some(segment) => out.push_str(&segment),
                None => out.push_str(part),
            }
        }
    }
    out
}

/// Apply the length rule to a single segment
///
/// Lengths count chars, not bytes.
/// - up to 2: unchanged
/// - 3 or 4: first two kept, rest masked
/// - 5 and up: first two and last one kept, middle masked
pub fn obscure_segment(segment: &str) -> String {
    let len = segment.chars().count();
    if len <= 2 {
        return segment.to_string();
    }

    let head: String = segment.chars().take(2).collect();
    if len <= 4 {
        return format!("{}{}", head, mask_run(len - 2));
    }

    // len > 4 guarantees a last char
    let tail = segment.chars().next_back().unwrap_or_default();
    format!("{}{}{}", head, mask_run(len - 3), tail)
}

fn mask_run(len: usize) -> String {
    std::iter::repeat_n(MASK_CHAR, len).collect()
}

fn is_delimiter(part: &str) -> bool {
    DELIMITERS
        .find(part)
        .is_some_and(|found| found.as_str() == part)
}

/// Split on delimiters, keeping each delimiter as its own element
fn split_keeping_delimiters(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;

    for found in DELIMITERS.find_iter(text) {
        parts.push(&text[last..found.start()]);
        parts.push(found.as_str());
        last = found.end();
    }
    parts.push(&text[last..]);

    parts
}
