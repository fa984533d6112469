//! Feature-word derivation.
//!
//! The poster renders one word from the quote large and letter-spaced. The
//! choice is deterministic: the longest whitespace-delimited token wins,
//! leftmost on ties, uppercased, with a middle dot between adjacent letters.

/// Separator inserted between the letters of the decorated feature word.
pub const LETTER_SEPARATOR: &str = " · ";

/// The word from a quote chosen for prominent display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureWord {
    /// The chosen word, uppercased.
    pub raw: String,
    /// `raw` with [`LETTER_SEPARATOR`] between adjacent letters, no leading
    /// or trailing separator.
    pub decorated: String,
}

/// Derive the feature word for a quote.
///
/// Tokens are whitespace-delimited; length is counted in characters, not
/// bytes, so accented letters weigh the same as ASCII. An empty or
/// whitespace-only quote yields an empty feature word.
pub fn derive_feature_word(text: &str) -> FeatureWord {
    let mut longest = "";
    let mut longest_len = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if len > longest_len {
            longest = word;
            longest_len = len;
        }
    }

    let raw = longest.to_uppercase();
    let decorated = raw
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(LETTER_SEPARATOR);

    FeatureWord { raw, decorated }
}
