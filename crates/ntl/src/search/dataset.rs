//! Tabular coordinate search.

use ntl_nlp::{Analyze, AnalyzeError, Span};
use tracing::debug;

use super::ResolutionMap;
use crate::types::{Coordinate, Dataset, LabelKind, RowIndex};

/// Resolves spans to dataset coordinates.
///
/// Works through four stages in priority order, first match per literal
/// text wins: column labels, then row labels, then cell values, then a
/// lemma-equality fallback of span tokens against column labels. Spans
/// that match nothing are simply absent from the result; that is not an
/// error.
///
/// The first three stages compare the span's literal text against the
/// label or cell's canonical string form. The fallback stage is keyed by
/// the matching *token's* text rather than the whole span, so a partly
/// recognized span still contributes a resolution.
pub fn search_dataset<A: Analyze + ?Sized>(
    analyzer: &A,
    spans: &[Span],
    dataset: &Dataset,
) -> Result<ResolutionMap, AnalyzeError> {
    let mut found = ResolutionMap::new();
    let texts: Vec<&str> = spans.iter().map(Span::text).collect();

    // Column labels, in column order.
    for (position, column) in dataset.columns().iter().enumerate() {
        if texts.contains(&column.as_str()) && !found.contains_key(column) {
            found.insert(
                column.clone(),
                Coordinate::Column {
                    index: sanitize_index(dataset.columns().len(), position),
                },
            );
        }
    }

    // Row labels, quoted iff the axis is text-labeled.
    let quoted = dataset.row_kind() == LabelKind::Text;
    for row in dataset.rows() {
        if texts.contains(&row.as_str()) && !found.contains_key(row) {
            found.insert(
                row.clone(),
                Coordinate::Row {
                    label: row.clone(),
                    quoted,
                },
            );
        }
    }

    // Cell values. The first row and the first column containing the
    // value are located independently of each other.
    let column_quoted = dataset.column_kind() == LabelKind::Text;
    for span in spans {
        let text = span.text();
        if found.contains_key(text) {
            continue;
        }
        let Some(column) = first_column_containing(dataset, text) else {
            continue;
        };
        let Some(row) = first_row_containing(dataset, text) else {
            continue;
        };
        debug!(text, row, column, "cell match");
        found.insert(
            text.to_string(),
            Coordinate::Cell {
                row: RowIndex::Position(sanitize_index(dataset.rows().len(), row)),
                column: dataset.columns()[column].clone(),
                quoted: column_quoted,
            },
        );
    }

    // Lemma fallback: span tokens against the word lemmas of each column
    // label, keyed by token text. The first matching column wins and its
    // position stays unsanitized.
    if spans.iter().any(|s| !found.contains_key(s.text())) {
        let mut column_lemmas: Vec<Vec<String>> = Vec::with_capacity(dataset.columns().len());
        for column in dataset.columns() {
            column_lemmas.push(analyzer.word_lemmas(column)?);
        }
        for span in spans {
            if found.contains_key(span.text()) {
                continue;
            }
            for token in span.tokens().iter().filter(|t| t.is_word()) {
                if found.contains_key(&token.text) {
                    continue;
                }
                if let Some(position) = column_lemmas
                    .iter()
                    .position(|lemmas| lemmas.contains(&token.lemma))
                {
                    debug!(token = %token.text, column = position, "lemma fallback match");
                    found.insert(
                        token.text.clone(),
                        Coordinate::Column {
                            index: position as i64,
                        },
                    );
                }
            }
        }
    }

    debug!(spans = spans.len(), resolved = found.len(), "dataset search done");
    Ok(found)
}

/// Folds an axis position into the equivalent back-index: positions up to
/// and including the midpoint of an axis of length `len` stay as they
/// are, later ones become `position - len`. Both forms address the same
/// element.
pub fn sanitize_index(len: usize, position: usize) -> i64 {
    if 2 * position <= len {
        position as i64
    } else {
        position as i64 - len as i64
    }
}

fn first_column_containing(dataset: &Dataset, text: &str) -> Option<usize> {
    (0..dataset.columns().len())
        .find(|&column| (0..dataset.rows().len()).any(|row| cell_is(dataset, row, column, text)))
}

fn first_row_containing(dataset: &Dataset, text: &str) -> Option<usize> {
    (0..dataset.rows().len())
        .find(|&row| (0..dataset.columns().len()).any(|column| cell_is(dataset, row, column, text)))
}

fn cell_is(dataset: &Dataset, row: usize, column: usize, text: &str) -> bool {
    dataset
        .cell(row, column)
        .is_some_and(|datum| datum.to_string() == text)
}
