//! Unicode-aware segmentation of raw text.
//!
//! Splitting happens on Unicode word boundaries, which keeps decimals
//! ("3.5"), grouped digits ("2,020") and internal apostrophes
//! ("company's") intact while separating punctuation into its own
//! segments. Whitespace is dropped; everything else is kept with its byte
//! offset so spans can report exact source slices.

use unicode_segmentation::UnicodeSegmentation;

/// A non-whitespace segment of the source text, before tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Segment<'_> {
    /// Byte offset one past the last byte of this segment.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Splits `text` into word and punctuation segments.
pub(crate) fn segments(text: &str) -> Vec<Segment<'_>> {
    text.split_word_bound_indices()
        .filter(|(_, piece)| !piece.chars().all(char::is_whitespace))
        .map(|(start, piece)| Segment { text: piece, start })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        segments(input).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn splits_words_and_punctuation() {
        assert_eq!(texts("The car, finally."), vec!["The", "car", ",", "finally", "."]);
    }

    #[test]
    fn keeps_numbers_whole() {
        assert_eq!(texts("grew 3.5% in 2,020"), vec!["grew", "3.5", "%", "in", "2,020"]);
    }

    #[test]
    fn keeps_internal_apostrophes() {
        assert_eq!(texts("the company's revenue"), vec!["the", "company's", "revenue"]);
    }

    #[test]
    fn byte_offsets_slice_the_source() {
        let input = "The naïve café";
        for segment in segments(input) {
            assert_eq!(&input[segment.start..segment.end()], segment.text);
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(segments("").is_empty());
        assert!(segments("   \t\n").is_empty());
    }
}
