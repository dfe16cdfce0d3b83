//! Character classification for answer text.
//!
//! Decides which characters of an answer are letters (eligible for masking),
//! punctuation, or whitespace, and normalizes answers so accented letters
//! are single characters.

use unicode_normalization::UnicodeNormalization;

/// Typographic punctuation beyond the ASCII set.
const TYPOGRAPHIC_PUNCTUATION: &[char] = &[
    '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', // Curly quotes
    '„', '‚', // Low quotes
    '«', '»', '‹', '›', // Guillemets
    '—', '–', '…', // Dashes, ellipsis
    '¡', '¿', '·', // Inverted marks, middle dot
];

/// Coarse class of a single answer character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Punctuation,
    Space,
}

/// Classify one character.
///
/// Anything that is neither whitespace nor punctuation counts as a letter,
/// digits included.
pub fn classify(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if is_punctuation(c) {
        CharClass::Punctuation
    } else {
        CharClass::Letter
    }
}

/// Whether `c` belongs to the punctuation set (ASCII plus typographic marks).
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TYPOGRAPHIC_PUNCTUATION.contains(&c)
}

/// Compose an answer to NFC so `a` + combining acute becomes a single `á`.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_letters() {
        assert_eq!(classify('a'), CharClass::Letter);
        assert_eq!(classify('Z'), CharClass::Letter);
        assert_eq!(classify('ő'), CharClass::Letter);
        assert_eq!(classify('7'), CharClass::Letter);
    }

    #[test]
    fn test_classify_punctuation() {
        for c in ['.', ',', '!', '?', '\'', '-', '(', ')', '"', '&'] {
            assert_eq!(classify(c), CharClass::Punctuation, "{:?}", c);
        }
        for c in ['«', '»', '„', '—', '–', '\u{2019}', '…'] {
            assert_eq!(classify(c), CharClass::Punctuation, "{:?}", c);
        }
    }

    #[test]
    fn test_classify_whitespace() {
        assert_eq!(classify(' '), CharClass::Space);
        assert_eq!(classify('\t'), CharClass::Space);
        assert_eq!(classify('\u{a0}'), CharClass::Space);
    }

    #[test]
    fn test_compose_merges_combining_marks() {
        let decomposed = "Budapesti Mu\u{0308}\u{0301}vek";
        let composed = compose("Bara\u{0301}t");
        assert_eq!(composed, "Barát");
        assert_eq!(composed.chars().count(), 5);
        assert!(compose(decomposed).chars().count() < decomposed.chars().count());
    }

    #[test]
    fn test_compose_leaves_plain_text() {
        assert_eq!(compose("New York"), "New York");
    }
}
