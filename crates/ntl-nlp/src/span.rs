//! Contiguous token runs.

use std::fmt;

use serde::Serialize;

use crate::token::Token;

/// A contiguous run of tokens together with the exact slice of source
/// text it covers.
///
/// The text is taken verbatim from the analyzed string, so whatever
/// spacing the source used between the tokens is preserved. That matters
/// downstream: replacing a span's text inside the original string must
/// actually find it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    text: String,
    tokens: Vec<Token>,
}

impl Span {
    pub(crate) fn new(text: String, tokens: Vec<Token>) -> Self {
        Span { text, tokens }
    }

    /// The covered source text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The tokens in this span, in source order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens in the span.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Byte offset of the span's first token in the source text.
    pub fn start(&self) -> usize {
        self.tokens.first().map_or(0, |t| t.start)
    }

    /// Byte offset one past the span's last token.
    pub fn end(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.end)
    }

    /// Lemmas of the span's tokens, in order.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.lemma.as_str())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
