//! Colour heuristics.

/// Colour words recognized when a size is glued to a colour with a dash,
/// e.g. `"M-Red"`. Anything outside this list (`"L-Theanine"`) is left alone.
pub(crate) const COLOR_WORDS: &str = "Black|White|Red|Blue|Green|Yellow|Orange|Pink|Purple|Violet|\
Brown|Grey|Gray|Navy|Beige|Cream|Silver|Gold|Maroon|Teal|Turquoise|Olive|Khaki|Tan|Coral|Mint|\
Lavender|Peach|Burgundy|Charcoal|Camo|Multicolou?r";

/// Best-effort colour of a product: the last word before the first `(`.
///
/// This is positional, not a vocabulary lookup. Whatever word sits there is
/// returned, so a trailing size such as `"Tee XL (Max 5kg)"` yields `"XL"`.
/// Returns an empty string when there is no word.
#[must_use]
pub fn extract_color(name: &str) -> String {
    let head = name.split('(').next().unwrap_or_default();
    head.split_whitespace()
        .next_back()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_word_before_parenthesis() {
        assert_eq!(
            extract_color("FIDA AUTOBRAKE Leash 5M - S White (Max 12kgs)"),
            "White"
        );
    }

    #[test]
    fn takes_last_word_without_parenthesis() {
        assert_eq!(extract_color("Harness M Red"), "Red");
    }

    #[test]
    fn empty_name_yields_empty_color() {
        assert_eq!(extract_color(""), "");
        assert_eq!(extract_color("   "), "");
    }

    #[test]
    fn leading_parenthesis_yields_empty_color() {
        assert_eq!(extract_color("(Max 12kgs)"), "");
    }

    #[test]
    fn trailing_size_leaks_into_color() {
        // Known limitation: the word before the parenthesis is taken as is.
        assert_eq!(extract_color("Tee - XL (Max 5kg)"), "XL");
        assert_eq!(extract_color("Product - XXL"), "XXL");
    }

    #[test]
    fn only_ascii_parenthesis_splits() {
        assert_eq!(extract_color("Jacket Navy（M/32CM）"), "Navy（M/32CM）");
    }
}
