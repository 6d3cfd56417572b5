//! Letter-size vocabulary shared by the base-name normalizer, the group sort
//! and the variant-label extractor.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Size-order rank for names that carry no recognizable letter size.
/// Sorts after every real size.
pub const NO_SIZE_RANK: u8 = 99;

/// Letter-size alternation, longest token first so `XL` never wins inside `XXL`.
pub(crate) const SIZE_TOKENS: &str = "XXXXL|XXXL|XXL|XL|XXXXS|XXXS|XXS|XS|S|M|L";

/// Spelled-out sizes accepted where a size annotation is expected.
pub(crate) const SIZE_WORDS: &str =
    "XXX-Large|XX-Large|X-Large|XXX-Small|XX-Small|X-Small|Small|Medium|Large";

static SIZE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b(?:{SIZE_TOKENS})\b")).expect("valid regex"));

/// A canonical letter size, declared smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SizeCode {
    #[serde(rename = "XXXXS")]
    Xxxxs,
    #[serde(rename = "XXXS")]
    Xxxs,
    #[serde(rename = "XXS")]
    Xxs,
    #[serde(rename = "XS")]
    Xs,
    S,
    M,
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
    #[serde(rename = "XXXL")]
    Xxxl,
    #[serde(rename = "XXXXL")]
    Xxxxl,
}

impl SizeCode {
    pub const ALL: [SizeCode; 11] = [
        SizeCode::Xxxxs,
        SizeCode::Xxxs,
        SizeCode::Xxs,
        SizeCode::Xs,
        SizeCode::S,
        SizeCode::M,
        SizeCode::L,
        SizeCode::Xl,
        SizeCode::Xxl,
        SizeCode::Xxxl,
        SizeCode::Xxxxl,
    ];

    /// Canonical abbreviation, e.g. `"XXL"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizeCode::Xxxxs => "XXXXS",
            SizeCode::Xxxs => "XXXS",
            SizeCode::Xxs => "XXS",
            SizeCode::Xs => "XS",
            SizeCode::S => "S",
            SizeCode::M => "M",
            SizeCode::L => "L",
            SizeCode::Xl => "XL",
            SizeCode::Xxl => "XXL",
            SizeCode::Xxxl => "XXXL",
            SizeCode::Xxxxl => "XXXXL",
        }
    }

    /// Position in the size table: `XXXXS` is 1, `XXXXL` is 11.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            SizeCode::Xxxxs => 1,
            SizeCode::Xxxs => 2,
            SizeCode::Xxs => 3,
            SizeCode::Xs => 4,
            SizeCode::S => 5,
            SizeCode::M => 6,
            SizeCode::L => 7,
            SizeCode::Xl => 8,
            SizeCode::Xxl => 9,
            SizeCode::Xxxl => 10,
            SizeCode::Xxxxl => 11,
        }
    }

    /// Parses an abbreviation such as `"xl"` or `"XXS"`, ignoring ASCII case.
    #[must_use]
    pub fn from_abbreviation(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(token))
    }

    /// Parses a spelled-out size such as `"X-Large"` or `"medium"`.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let code = match word.to_ascii_lowercase().as_str() {
            "xxx-small" => SizeCode::Xxxs,
            "xx-small" => SizeCode::Xxs,
            "x-small" => SizeCode::Xs,
            "small" => SizeCode::S,
            "medium" => SizeCode::M,
            "large" => SizeCode::L,
            "x-large" => SizeCode::Xl,
            "xx-large" => SizeCode::Xxl,
            "xxx-large" => SizeCode::Xxxl,
            _ => return None,
        };
        Some(code)
    }

    /// Accepts either form.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        Self::from_abbreviation(token).or_else(|| Self::from_word(token))
    }
}

impl std::fmt::Display for SizeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First uppercase, word-bounded letter size in `name`.
pub(crate) fn find_size_code(name: &str) -> Option<SizeCode> {
    SIZE_TOKEN_RE
        .find(name)
        .and_then(|m| SizeCode::from_abbreviation(m.as_str()))
}

/// Ranks a product name by the letter size it mentions.
///
/// Returns [`NO_SIZE_RANK`] when no size token is present. Matching is
/// case-sensitive: `"S"` ranks, a stray lowercase `"s"` does not.
#[must_use]
pub fn size_order(name: &str) -> u8 {
    find_size_code(name).map_or(NO_SIZE_RANK, SizeCode::rank)
}
