//! Tokens and part-of-speech tags.
//!
//! A [`Token`] is a single word or punctuation mark together with its
//! position in the source text, its [`PosTag`], and its lemma. Tokens are
//! produced by an analyzer and never borrow from the analyzed text, so they
//! can be stored and passed around freely.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Coarse part-of-speech category assigned to a token.
///
/// The set mirrors the universal tag inventory commonly used by
/// part-of-speech taggers. Tags are assigned by rule, not by a trained
/// model, so they are a best-effort classification: unknown words default
/// to [`PosTag::Noun`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Adjective: "big", "notable", "useful".
    Adj,
    /// Adposition: "in", "of", "under".
    Adp,
    /// Adverb: "quickly", "very".
    Adv,
    /// Auxiliary verb: "is", "was", "will".
    Aux,
    /// Coordinating conjunction: "and", "or".
    Cconj,
    /// Determiner: "the", "a", "these".
    Det,
    /// Interjection: "oh", "wow".
    Intj,
    /// Noun: "car", "revenue". The default for unrecognized words.
    Noun,
    /// Numeral: "2020", "3.5", "seven".
    Num,
    /// Particle: "not".
    Part,
    /// Pronoun: "it", "they".
    Pron,
    /// Proper noun: "Paris", "Humpty".
    Propn,
    /// Punctuation: ",", ".", "(".
    Punct,
    /// Subordinating conjunction: "if", "because".
    Sconj,
    /// Symbol: "%", "$", "+".
    Sym,
    /// Verb: "grew", "increased", "running".
    Verb,
    /// Anything that fits no other category.
    #[serde(rename = "X")]
    Other,
}

impl PosTag {
    /// Whether this tag participates in noun-like phrases.
    pub fn is_nounish(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }

    /// Whether tokens with this tag carry lexical content, as opposed to
    /// punctuation and symbols.
    pub fn is_word(self) -> bool {
        !matches!(self, PosTag::Punct | PosTag::Sym)
    }

    /// The conventional uppercase name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            PosTag::Adj => "ADJ",
            PosTag::Adp => "ADP",
            PosTag::Adv => "ADV",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Det => "DET",
            PosTag::Intj => "INTJ",
            PosTag::Noun => "NOUN",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Pron => "PRON",
            PosTag::Propn => "PROPN",
            PosTag::Punct => "PUNCT",
            PosTag::Sconj => "SCONJ",
            PosTag::Sym => "SYM",
            PosTag::Verb => "VERB",
            PosTag::Other => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single token of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The token exactly as it appears in the source text.
    pub text: String,
    /// Normalized dictionary form, always lowercase: "cars" becomes "car",
    /// "increased" becomes "increase".
    pub lemma: String,
    /// Part-of-speech category.
    pub tag: PosTag,
    /// Byte offset of the first byte of this token in the source text.
    pub start: usize,
    /// Byte offset one past the last byte of this token.
    pub end: usize,
}

impl Token {
    /// Byte range of this token in the source text.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether this token is a word rather than punctuation or a symbol.
    pub fn is_word(&self) -> bool {
        self.tag.is_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nounish_tags() {
        assert!(PosTag::Noun.is_nounish());
        assert!(PosTag::Propn.is_nounish());
        assert!(!PosTag::Verb.is_nounish());
        assert!(!PosTag::Det.is_nounish());
    }

    #[test]
    fn word_tags() {
        assert!(PosTag::Noun.is_word());
        assert!(PosTag::Num.is_word());
        assert!(!PosTag::Punct.is_word());
        assert!(!PosTag::Sym.is_word());
    }

    #[test]
    fn token_range() {
        let token = Token {
            text: "car".into(),
            lemma: "car".into(),
            tag: PosTag::Noun,
            start: 4,
            end: 7,
        };
        assert_eq!(token.range(), 4..7);
        assert!(token.is_word());
    }
}
