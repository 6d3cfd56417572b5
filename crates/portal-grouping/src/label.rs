//! Variant labels: the short tag ("S", "#4", "4.5mm", "Standard") shown for
//! each member of a product group.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::size::{find_size_code, SizeCode, SIZE_TOKENS, SIZE_WORDS};

/// `Max 12kgs`, `max. 5 kg`.
pub(crate) const MAX_WEIGHT_PATTERN: &str = r"max\.?\s*\d+(?:\.\d+)?\s*kgs?";

/// `5-10kg`, `10 - 25 kgs`.
pub(crate) const WEIGHT_RANGE_PATTERN: &str = r"\d+(?:\.\d+)?\s*-\s*\d+(?:\.\d+)?\s*kgs?";

static PARENTHETICAL_SIZE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)[(（]\s*(?P<size>{SIZE_WORDS}|{SIZE_TOKENS})\s*[/)）]"
    ))
    .expect("valid regex")
});

static SIZE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?P<size>{SIZE_WORDS})\b")).expect("valid regex")
});

static SHOE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?P<n>\d+)\b").expect("valid regex"));

static MEASUREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?P<n>\d+(?:\.\d+)?)\s*mm\b").expect("valid regex")
});

static WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)[(（]\s*(?P<weight>{MAX_WEIGHT_PATTERN}|{WEIGHT_RANGE_PATTERN})\s*[)）]"
    ))
    .expect("valid regex")
});

/// The variant a product name denotes within its group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantLabel {
    /// No variant token; the plain parent product.
    Standard,
    Size(SizeCode),
    /// `#4`
    ShoeSize(u32),
    /// `4.5mm`
    Measurement(Decimal),
}

impl VariantLabel {
    /// Display-order key.
    ///
    /// `Standard` comes first, then letter sizes by size rank, then numeric
    /// labels (shoe sizes and measurements together) by value. The last
    /// element only separates `#4` from `4mm`.
    #[must_use]
    pub fn sort_key(&self) -> (u8, u8, Decimal, u8) {
        match self {
            VariantLabel::Standard => (0, 0, Decimal::ZERO, 0),
            VariantLabel::Size(code) => (1, code.rank(), Decimal::ZERO, 0),
            VariantLabel::ShoeSize(n) => (2, 0, Decimal::from(*n), 0),
            VariantLabel::Measurement(value) => (2, 0, *value, 1),
        }
    }

    #[must_use]
    pub fn is_standard(&self) -> bool {
        matches!(self, VariantLabel::Standard)
    }
}

impl Ord for VariantLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for VariantLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for VariantLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantLabel::Standard => f.write_str("Standard"),
            VariantLabel::Size(code) => f.write_str(code.as_str()),
            VariantLabel::ShoeSize(n) => write!(f, "#{n}"),
            VariantLabel::Measurement(value) => write!(f, "{}mm", value.normalize()),
        }
    }
}

impl Serialize for VariantLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Derives the variant label for a product name.
///
/// Checked in order: a parenthetical size (`(XL/48CM)`, `(Large)`), an
/// uppercase size token, a spelled-out size (`X-Large` → `XL`), a shoe size
/// (`#4`), a measurement (`4.5mm`). Falls back to [`VariantLabel::Standard`].
///
/// Bare size words come after the abbreviation because the normalizer keeps
/// them in the base name: in `Small Animal Hutch - M` the variant is `M`.
#[must_use]
pub fn extract_variant_label(name: &str) -> VariantLabel {
    parenthetical_size(name)
        .or_else(|| find_size_code(name))
        .or_else(|| size_word(name))
        .map(VariantLabel::Size)
        .or_else(|| shoe_size(name).map(VariantLabel::ShoeSize))
        .or_else(|| measurement(name).map(VariantLabel::Measurement))
        .unwrap_or(VariantLabel::Standard)
}

/// Label text for a name, or `None` when the name has no variant token.
#[must_use]
pub fn extract_size(name: &str) -> Option<String> {
    let label = extract_variant_label(name);
    (!label.is_standard()).then(|| label.to_string())
}

/// Inner text of a weight annotation such as `(Max 12kgs)` or `(5-10kg)`.
#[must_use]
pub fn extract_weight(name: &str) -> Option<String> {
    WEIGHT_RE
        .captures(name)
        .and_then(|caps| caps.name("weight"))
        .map(|m| m.as_str().trim().to_string())
}

fn parenthetical_size(name: &str) -> Option<SizeCode> {
    PARENTHETICAL_SIZE_RE
        .captures(name)
        .and_then(|caps| caps.name("size"))
        .and_then(|m| SizeCode::parse(m.as_str()))
}

fn size_word(name: &str) -> Option<SizeCode> {
    SIZE_WORD_RE
        .captures(name)
        .and_then(|caps| caps.name("size"))
        .and_then(|m| SizeCode::from_word(m.as_str()))
}

fn shoe_size(name: &str) -> Option<u32> {
    SHOE_SIZE_RE
        .captures(name)
        .and_then(|caps| caps.name("n"))
        .and_then(|m| m.as_str().parse().ok())
}

fn measurement(name: &str) -> Option<Decimal> {
    MEASUREMENT_RE
        .captures(name)
        .and_then(|caps| caps.name("n"))
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
}

#[cfg(test)]
#[path = "label_test.rs"]
mod tests;
