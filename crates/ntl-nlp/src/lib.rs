//! Rule-based text analysis: tokenization, part-of-speech tagging,
//! lemmatization and entity spans.
//!
//! This crate has no models and no runtime data files. Everything is
//! driven by word lists and suffix rules, which keeps analysis
//! deterministic and cheap enough to run on every templatization call.

mod analyzer;
mod doc;
mod lemmatizer;
mod lexicon;
mod span;
mod tagger;
mod token;
mod tokenizer;

pub use analyzer::{Analyze, AnalyzeError, RuleAnalyzer};
pub use doc::Doc;
pub use span::Span;
pub use token::{PosTag, Token};
