//! The analysis entry point.
//!
//! [`Analyze`] is the seam between templatization and whatever produces
//! tokens. The built-in [`RuleAnalyzer`] is deterministic, dependency-free
//! and always available; an alternative backed by an external service
//! would implement the same trait and report [`AnalyzeError::Unavailable`]
//! when it cannot run.

use thiserror::Error;

use crate::doc::Doc;
use crate::lemmatizer;
use crate::span::Span;
use crate::tagger;
use crate::token::{PosTag, Token};
use crate::tokenizer;

/// Reasons an analyzer can fail to produce a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// The analyzer backend cannot run, for example a missing model or an
    /// unreachable service.
    #[error("analyzer unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Turns raw text into analyzed documents.
pub trait Analyze {
    /// Analyzes `text` into tokens and entity spans.
    fn analyze(&self, text: &str) -> Result<Doc, AnalyzeError>;

    /// Lemmas of the word tokens in `text`, skipping punctuation and
    /// symbols. This is how labels and argument values are normalized for
    /// matching.
    fn word_lemmas(&self, text: &str) -> Result<Vec<String>, AnalyzeError> {
        Ok(self
            .analyze(text)?
            .tokens()
            .iter()
            .filter(|t| t.is_word())
            .map(|t| t.lemma.clone())
            .collect())
    }
}

/// The built-in rule-based analyzer.
///
/// Tokenization follows Unicode word boundaries, tags come from the
/// closed-class lexicon and suffix shape, and lemmas from the heuristic
/// suffix stripper. Stateless and infallible.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleAnalyzer;

static SHARED: RuleAnalyzer = RuleAnalyzer;

impl RuleAnalyzer {
    pub fn new() -> Self {
        RuleAnalyzer
    }

    /// The process-wide shared instance. The analyzer is stateless, so
    /// there is never a reason to hold more than one.
    pub fn shared() -> &'static Self {
        &SHARED
    }
}

impl Analyze for RuleAnalyzer {
    fn analyze(&self, text: &str) -> Result<Doc, AnalyzeError> {
        let mut tokens = Vec::new();
        for segment in tokenizer::segments(text) {
            let lower = segment.text.to_lowercase();
            let tag = tagger::tag(segment.text, &lower);
            let lemma = if tag.is_word() {
                lemmatizer::lemma(segment.text)
            } else {
                lower
            };
            tokens.push(Token {
                text: segment.text.to_string(),
                lemma,
                tag,
                start: segment.start,
                end: segment.end(),
            });
        }
        let entities = proper_noun_runs(text, &tokens);
        Ok(Doc::new(text.to_string(), tokens, entities))
    }
}

// Maximal runs of consecutive proper nouns, as spans over the source.
fn proper_noun_runs(text: &str, tokens: &[Token]) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].tag != PosTag::Propn {
            i += 1;
            continue;
        }
        let start = i;
        while i < tokens.len() && tokens[i].tag == PosTag::Propn {
            i += 1;
        }
        let slice = &text[tokens[start].start..tokens[i - 1].end];
        runs.push(Span::new(slice.to_string(), tokens[start..i].to_vec()));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzes_tokens_with_offsets() {
        let doc = RuleAnalyzer::shared()
            .analyze("The revenue in 2020 was notable.")
            .unwrap();
        let tags: Vec<PosTag> = doc.tokens().iter().map(|t| t.tag).collect();
        assert_eq!(
            tags,
            vec![
                PosTag::Det,
                PosTag::Noun,
                PosTag::Adp,
                PosTag::Num,
                PosTag::Aux,
                PosTag::Adj,
                PosTag::Punct,
            ]
        );
        for token in doc.tokens() {
            assert_eq!(&doc.text()[token.range()], token.text);
        }
    }

    #[test]
    fn entities_are_proper_noun_runs() {
        let doc = RuleAnalyzer::shared()
            .analyze("Humpty Dumpty sat on a wall in Paris.")
            .unwrap();
        let names: Vec<&str> = doc.entities().iter().map(Span::text).collect();
        assert_eq!(names, vec!["Humpty Dumpty", "Paris"]);
    }

    #[test]
    fn word_lemmas_skip_punctuation() {
        let lemmas = RuleAnalyzer::shared()
            .word_lemmas("The cars, increased!")
            .unwrap();
        assert_eq!(lemmas, vec!["the", "car", "increase"]);
    }

    #[test]
    fn empty_text_analyzes_to_empty_doc() {
        let doc = RuleAnalyzer::shared().analyze("").unwrap();
        assert!(doc.is_empty());
        assert!(doc.entities().is_empty());
    }
}
