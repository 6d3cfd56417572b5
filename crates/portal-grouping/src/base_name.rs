//! Base-name normalization: strip size and weight variant tokens from a
//! product name while keeping its colour and descriptive words.
//!
//! The normalizer is an ordered list of `&str -> String` rewrites folded over
//! the name. Order matters: the colour-preserving rewrites run before the
//! blunt token strippers so the colour is still attached to its size when
//! they look for it. Each rewrite only ever removes text, which lets
//! [`extract_base_name`] re-run the whole list until nothing changes.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::COLOR_WORDS;
use crate::label::{MAX_WEIGHT_PATTERN, WEIGHT_RANGE_PATTERN};
use crate::size::{SizeCode, SIZE_TOKENS, SIZE_WORDS};

type Rewrite = fn(&str) -> String;

/// The rewrite passes in application order.
const PIPELINE: [Rewrite; 14] = [
    strip_parenthetical_size,
    strip_trailing_color_size,
    strip_size_dash_color,
    strip_dash_size_color,
    strip_dashed_size,
    strip_dash_size_before_space,
    strip_trailing_dash_size,
    strip_standalone_sizes,
    strip_bracketed_size,
    strip_shoe_size,
    strip_measurement,
    strip_size_attached_to_color,
    strip_weight_annotations,
    tidy_separators,
];

static PARENTHETICAL_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s*[(（]\s*(?:{SIZE_WORDS}|{SIZE_TOKENS})\s*/[^)）]*[)）]"
    ))
    .expect("valid regex")
});

static TRAILING_COLOR_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)-(?P<color>[a-z]+)-(?:{SIZE_TOKENS})\s*$"
    ))
    .expect("valid regex")
});

static SIZE_DASH_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{SIZE_TOKENS})\s+-\s+(?P<color>[a-z]+)\b"
    ))
    .expect("valid regex")
});

static DASH_SIZE_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)-\s+(?:{SIZE_TOKENS})\s+(?P<color>[a-z]+)\b"
    ))
    .expect("valid regex")
});

static DASHED_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)-(?:{SIZE_TOKENS})-")).expect("valid regex")
});

static DASH_SIZE_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)-(?:{SIZE_TOKENS})\s")).expect("valid regex")
});

static TRAILING_DASH_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)-(?:{SIZE_TOKENS})\s*$")).expect("valid regex")
});

static BRACKETED_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\s*[(（]\s*(?:{SIZE_WORDS}|{SIZE_TOKENS})\s*[)）]"
    ))
    .expect("valid regex")
});

static SHOE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\d+\b").expect("valid regex"));

static MEASUREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*mm\b").expect("valid regex"));

static SIZE_ATTACHED_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{SIZE_TOKENS})-(?P<color>{COLOR_WORDS})\b"
    ))
    .expect("valid regex")
});

static MAX_WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\s*[(（]\s*{MAX_WEIGHT_PATTERN}\s*[)）]")).expect("valid regex")
});

static WEIGHT_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\s*[(（]\s*{WEIGHT_RANGE_PATTERN}\s*[)）]")).expect("valid regex")
});

static SPACED_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+-(?:\s*-)*\s+").expect("valid regex"));

static EDGE_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s-]+|[\s-]+$").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes a product name to the base name shared by its size variants.
///
/// `"FIDA AUTOBRAKE Leash 5M - S White (Max 12kgs)"` becomes
/// `"FIDA AUTOBRAKE Leash 5M White"`. Colour and every other word survive;
/// letter sizes, shoe sizes (`#4`), measurements (`4.5mm`) and weight
/// annotations (`(Max 12kgs)`, `(5-10kg)`) are removed.
///
/// Idempotent: the result is a fixed point of the rewrite pipeline.
#[must_use]
pub fn extract_base_name(name: &str) -> String {
    // Every rewrite is length-non-increasing and the only same-length change
    // is turning other whitespace into ' ', so this reaches a fixed point.
    let mut current = normalize_once(name);
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Returns `true` when two distinct names normalize to the same base name,
/// ignoring case.
#[must_use]
pub fn should_group(a: &str, b: &str) -> bool {
    a != b && extract_base_name(a).to_lowercase() == extract_base_name(b).to_lowercase()
}

fn normalize_once(name: &str) -> String {
    PIPELINE
        .iter()
        .fold(name.to_string(), |acc, rewrite| rewrite(&acc))
}

/// `(XL/48CM)`, `（M/32CM）`, `(Small/30CM)`.
fn strip_parenthetical_size(s: &str) -> String {
    PARENTHETICAL_SIZE_RE.replace_all(s, " ").into_owned()
}

/// `Harness-Red-XL` keeps `Red`.
fn strip_trailing_color_size(s: &str) -> String {
    TRAILING_COLOR_SIZE_RE.replace(s, " ${color}").into_owned()
}

/// `Harness M - Red` keeps `Red`.
fn strip_size_dash_color(s: &str) -> String {
    SIZE_DASH_COLOR_RE.replace_all(s, "${color}").into_owned()
}

/// `Leash 5M - S White` keeps `White`.
fn strip_dash_size_color(s: &str) -> String {
    DASH_SIZE_COLOR_RE.replace_all(s, "${color}").into_owned()
}

fn strip_dashed_size(s: &str) -> String {
    DASHED_SIZE_RE.replace_all(s, " ").into_owned()
}

fn strip_dash_size_before_space(s: &str) -> String {
    DASH_SIZE_SPACE_RE.replace_all(s, " ").into_owned()
}

fn strip_trailing_dash_size(s: &str) -> String {
    TRAILING_DASH_SIZE_RE.replace(s, "").into_owned()
}

/// Drops whitespace-delimited tokens that are exactly a size abbreviation.
fn strip_standalone_sizes(s: &str) -> String {
    s.split_whitespace()
        .filter(|token| SizeCode::from_abbreviation(token).is_none())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Raincoat (XL)`.
fn strip_bracketed_size(s: &str) -> String {
    BRACKETED_SIZE_RE.replace_all(s, " ").into_owned()
}

fn strip_shoe_size(s: &str) -> String {
    SHOE_SIZE_RE.replace_all(s, "").into_owned()
}

fn strip_measurement(s: &str) -> String {
    MEASUREMENT_RE.replace_all(s, "").into_owned()
}

/// `Collar M-Red` keeps `Red`.
fn strip_size_attached_to_color(s: &str) -> String {
    SIZE_ATTACHED_COLOR_RE
        .replace_all(s, "${color}")
        .into_owned()
}

fn strip_weight_annotations(s: &str) -> String {
    let without_max = MAX_WEIGHT_RE.replace_all(s, " ");
    WEIGHT_RANGE_RE.replace_all(&without_max, " ").into_owned()
}

fn tidy_separators(s: &str) -> String {
    let spaced = SPACED_DASH_RE.replace_all(s, " - ");
    let trimmed = EDGE_DASH_RE.replace_all(&spaced, "");
    WHITESPACE_RE.replace_all(&trimmed, " ").trim().to_string()
}

#[cfg(test)]
#[path = "base_name_test.rs"]
mod tests;
