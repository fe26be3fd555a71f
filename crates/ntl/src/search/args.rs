//! Argument-list search.

use ntl_nlp::{Analyze, AnalyzeError, Span, Token};
use tracing::debug;

use super::ResolutionMap;
use crate::types::{Arguments, Coordinate, Datum};

/// Resolves span tokens to argument coordinates by lemma equality.
///
/// Every value list is rendered to its string forms, joined, and
/// word-tokenized into one flattened sequence per key; a token whose lemma
/// equals a flattened word's lemma resolves to that key and word position.
/// Resolutions are keyed by the span *token's* literal text, and a later
/// match overwrites an earlier one for the same text (last match wins —
/// the counterpart dataset search keeps the first). Keys keep their
/// original map position when overwritten.
pub fn search_args<A: Analyze + ?Sized>(
    analyzer: &A,
    spans: &[Span],
    args: &Arguments,
) -> Result<ResolutionMap, AnalyzeError> {
    let mut flattened: Vec<(String, Vec<Token>)> = Vec::with_capacity(args.len());
    for (key, values) in args.iter() {
        let stripped = key.trim_start_matches('?').to_string();
        flattened.push((stripped, value_words(analyzer, values)?));
    }

    let mut found = ResolutionMap::new();
    for span in spans {
        for token in span.tokens().iter().filter(|t| t.is_word()) {
            for (key, words) in &flattened {
                for (index, word) in words.iter().enumerate() {
                    if token.lemma == word.lemma {
                        debug!(token = %token.text, key = %key, index, "argument match");
                        found.insert(
                            token.text.clone(),
                            Coordinate::Argument {
                                key: key.clone(),
                                index: index as i64,
                            },
                        );
                    }
                }
            }
        }
    }
    debug!(spans = spans.len(), resolved = found.len(), "argument search done");
    Ok(found)
}

// One word token sequence for a whole value list: string forms joined by
// a space, then analyzed. Word positions count across the join.
fn value_words<A: Analyze + ?Sized>(
    analyzer: &A,
    values: &[Datum],
) -> Result<Vec<Token>, AnalyzeError> {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(analyzer
        .analyze(&joined)?
        .tokens()
        .iter()
        .filter(|t| t.is_word())
        .cloned()
        .collect())
}
