//! Analyzed documents.

use std::ops::Range;

use serde::Serialize;

use crate::span::Span;
use crate::token::Token;

/// A fully analyzed piece of text: the original string, its tokens, and
/// the entity spans recognized in it.
#[derive(Debug, Clone, Serialize)]
pub struct Doc {
    text: String,
    tokens: Vec<Token>,
    entities: Vec<Span>,
}

impl Doc {
    pub(crate) fn new(text: String, tokens: Vec<Token>, entities: Vec<Span>) -> Self {
        Doc { text, tokens, entities }
    }

    /// The text that was analyzed, unchanged.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tokens in source order, punctuation included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Named-entity spans, currently the maximal proper-noun runs.
    pub fn entities(&self) -> &[Span] {
        &self.entities
    }

    /// Number of tokens in the document.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Builds the span covering the tokens at `range` (token indices).
    /// Returns `None` for an empty or out-of-bounds range.
    pub fn span(&self, range: Range<usize>) -> Option<Span> {
        if range.is_empty() || range.end > self.tokens.len() {
            return None;
        }
        let tokens = self.tokens[range.clone()].to_vec();
        let first = &self.tokens[range.start];
        let last = &self.tokens[range.end - 1];
        let text = self.text[first.start..last.end].to_string();
        Some(Span::new(text, tokens))
    }
}
