//! Integration tests for tabular coordinate search.
//!
//! Each test runs the whole front half of the pipeline: analyze a text,
//! extract candidate spans, then resolve them against a dataset. The
//! assertions pin the stage precedence, the label quoting convention, and
//! the index sanitization behavior.

use ntl::types::{Coordinate, Dataset, Datum, RowIndex};
use ntl::{extract_phrases, search_dataset, ExtractOptions, ResolutionMap};
use ntl_nlp::{Analyze, RuleAnalyzer};

fn resolve(text: &str, dataset: &Dataset) -> ResolutionMap {
    let analyzer = RuleAnalyzer::shared();
    let doc = analyzer.analyze(text).unwrap();
    let spans = extract_phrases(&doc, &ExtractOptions::default());
    search_dataset(analyzer, &spans, dataset).unwrap()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

// =============================================================================
// Column, row, and cell matches
// =============================================================================

#[test]
fn test_column_and_cell_matches() {
    let dataset = Dataset::new(
        labels(&["revenue", "year"]),
        labels(&["0"]),
        vec![vec![Datum::Int(100), Datum::Int(2020)]],
    )
    .unwrap();
    let found = resolve("The revenue in 2020 was notable.", &dataset);

    assert_eq!(found.len(), 2);
    assert_eq!(found["revenue"], Coordinate::Column { index: 0 });
    assert_eq!(
        found["2020"],
        Coordinate::Cell {
            row: RowIndex::Position(0),
            column: "year".to_string(),
            quoted: true,
        }
    );
}

#[test]
fn test_text_row_labels_render_quoted() {
    let dataset = Dataset::new(
        labels(&["revenue"]),
        labels(&["east", "west"]),
        vec![vec![Datum::Float(3.5)], vec![Datum::Float(4.1)]],
    )
    .unwrap();
    let found = resolve("Results for the west improved.", &dataset);

    assert_eq!(found.len(), 1);
    assert_eq!(
        found["west"],
        Coordinate::Row {
            label: "west".to_string(),
            quoted: true,
        }
    );
    assert_eq!(found["west"].to_string(), "df.loc['west']");
}

#[test]
fn test_numeric_row_labels_render_bare() {
    let dataset = Dataset::new(
        labels(&["revenue"]),
        labels(&["2020", "2021"]),
        vec![vec![Datum::Float(3.5)], vec![Datum::Float(4.1)]],
    )
    .unwrap();
    let found = resolve("Things changed in 2021.", &dataset);

    assert_eq!(found.len(), 1);
    assert_eq!(
        found["2021"],
        Coordinate::Row {
            label: "2021".to_string(),
            quoted: false,
        }
    );
    assert_eq!(found["2021"].to_string(), "df.loc[2021]");
}

#[test]
fn test_cell_row_and_column_are_located_independently() {
    // "zeta" occurs at (0, 1) and (1, 0). The first column containing it
    // is alpha, the first row containing it is row 0; the recorded cell
    // is their combination even though (0, alpha) holds "omega".
    let dataset = Dataset::new(
        labels(&["alpha", "beta"]),
        labels(&["0", "1"]),
        vec![
            vec![Datum::Str("omega".into()), Datum::Str("zeta".into())],
            vec![Datum::Str("zeta".into()), Datum::Str("omega".into())],
        ],
    )
    .unwrap();
    let found = resolve("The zeta appeared.", &dataset);

    assert_eq!(
        found["zeta"],
        Coordinate::Cell {
            row: RowIndex::Position(0),
            column: "alpha".to_string(),
            quoted: true,
        }
    );
}

#[test]
fn test_numeric_column_labels_render_bare_in_cells() {
    let dataset = Dataset::new(
        labels(&["2020", "2021"]),
        labels(&["0"]),
        vec![vec![Datum::Str("zeta".into()), Datum::Str("omega".into())]],
    )
    .unwrap();
    let found = resolve("The zeta appeared.", &dataset);

    assert_eq!(
        found["zeta"],
        Coordinate::Cell {
            row: RowIndex::Position(0),
            column: "2020".to_string(),
            quoted: false,
        }
    );
    assert_eq!(found["zeta"].to_string(), "df.loc[0, 2020]");
}

// =============================================================================
// Stage precedence
// =============================================================================

#[test]
fn test_column_match_beats_row_match() {
    let dataset = Dataset::new(
        labels(&["total"]),
        labels(&["total"]),
        vec![vec![Datum::Int(5)]],
    )
    .unwrap();
    let found = resolve("The total was small.", &dataset);

    assert_eq!(found.len(), 1);
    assert_eq!(found["total"], Coordinate::Column { index: 0 });
}

// =============================================================================
// Index sanitization
// =============================================================================

#[test]
fn test_column_positions_past_the_midpoint_fold_negative() {
    let dataset = Dataset::new(
        labels(&["year", "region", "total", "sales"]),
        labels(&["0"]),
        vec![vec![
            Datum::Int(2020),
            Datum::Int(1),
            Datum::Int(2),
            Datum::Int(3),
        ]],
    )
    .unwrap();
    let found = resolve("The sales dropped.", &dataset);

    assert_eq!(found["sales"], Coordinate::Column { index: -1 });
}

#[test]
fn test_cell_row_positions_are_sanitized() {
    let dataset = Dataset::new(
        labels(&["alpha"]),
        labels(&["0", "1", "2"]),
        vec![
            vec![Datum::Str("one".into())],
            vec![Datum::Str("two".into())],
            vec![Datum::Str("zeta".into())],
        ],
    )
    .unwrap();
    let found = resolve("The zeta appeared.", &dataset);

    assert_eq!(
        found["zeta"],
        Coordinate::Cell {
            row: RowIndex::Position(-1),
            column: "alpha".to_string(),
            quoted: true,
        }
    );
}

// =============================================================================
// Lemma fallback
// =============================================================================

#[test]
fn test_lemma_fallback_keeps_unsanitized_positions() {
    let dataset = Dataset::new(
        labels(&["year", "region", "total", "sales"]),
        labels(&["0"]),
        vec![vec![
            Datum::Int(2020),
            Datum::Int(1),
            Datum::Int(2),
            Datum::Int(3),
        ]],
    )
    .unwrap();
    // "sale" matches no label or cell exactly; the lemma fallback finds
    // column "sales" and keeps its plain position.
    let found = resolve("Each sale mattered.", &dataset);

    assert_eq!(found["sale"], Coordinate::Column { index: 3 });
}

#[test]
fn test_lemma_fallback_reaches_into_multiword_labels() {
    let dataset = Dataset::new(
        labels(&["annual sales", "year"]),
        labels(&["0"]),
        vec![vec![Datum::Int(5), Datum::Int(2020)]],
    )
    .unwrap();
    let found = resolve("Every sale counted.", &dataset);

    assert_eq!(found["sale"], Coordinate::Column { index: 0 });
}

#[test]
fn test_unmatched_spans_are_absent_not_errors() {
    let dataset = Dataset::new(
        labels(&["revenue"]),
        labels(&["0"]),
        vec![vec![Datum::Int(100)]],
    )
    .unwrap();
    let found = resolve("A quiet harbor at dusk.", &dataset);

    assert!(found.is_empty());
}
