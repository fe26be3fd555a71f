//! Integration tests for end-to-end templatization.

use ntl::types::{Arguments, Coordinate, Dataset, Datum};
use ntl::{resolve_references, substitute, templatize, ExtractOptions, ResolutionMap};
use ntl_nlp::RuleAnalyzer;

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn revenue_by_year() -> Dataset {
    Dataset::new(
        labels(&["revenue", "year"]),
        labels(&["0"]),
        vec![vec![Datum::Int(100), Datum::Int(2020)]],
    )
    .unwrap()
}

// =============================================================================
// Core scenarios
// =============================================================================

#[test]
fn test_tabular_references_become_placeholders() {
    let template = templatize(
        RuleAnalyzer::shared(),
        "The revenue in 2020 was notable.",
        &Arguments::new(),
        &revenue_by_year(),
    )
    .unwrap();
    assert_eq!(
        template,
        "The {{ df.columns[0] }} in {{ df.loc[0, 'year'] }} was notable."
    );
}

#[test]
fn test_argument_references_become_placeholders() {
    let mut args = Arguments::new();
    args.insert("?color", vec![Datum::from("red"), Datum::from("blue")]);
    let empty = Dataset::new(Vec::new(), Vec::new(), Vec::new()).unwrap();

    let template = templatize(RuleAnalyzer::shared(), "The red car", &args, &empty).unwrap();
    assert_eq!(template, "The {{ args['color'][0] }} car");
}

#[test]
fn test_text_without_matches_is_unchanged() {
    let template = templatize(
        RuleAnalyzer::shared(),
        "Nothing matches here.",
        &Arguments::new(),
        &revenue_by_year(),
    )
    .unwrap();
    assert_eq!(template, "Nothing matches here.");
}

// =============================================================================
// Merge precedence
// =============================================================================

#[test]
fn test_argument_matches_beat_tabular_matches() {
    let mut args = Arguments::new();
    args.insert("?when", vec![Datum::Int(2020)]);

    let analyzer = RuleAnalyzer::shared();
    let text = "The revenue in 2020 was notable.";
    let dataset = revenue_by_year();

    let resolved = resolve_references(
        analyzer,
        text,
        &args,
        &dataset,
        &ExtractOptions::default(),
    )
    .unwrap();
    assert_eq!(
        resolved["2020"],
        Coordinate::Argument {
            key: "when".to_string(),
            index: 0,
        }
    );
    // The overwritten entry keeps its original position in the map.
    let keys: Vec<&String> = resolved.keys().collect();
    assert_eq!(keys, ["revenue", "2020"]);

    let template = templatize(analyzer, text, &args, &dataset).unwrap();
    assert_eq!(
        template,
        "The {{ df.columns[0] }} in {{ args['when'][0] }} was notable."
    );
}

// =============================================================================
// Substitution mechanics
// =============================================================================

#[test]
fn test_substitution_is_plain_text_replacement() {
    let mut resolutions = ResolutionMap::new();
    resolutions.insert("a+b*(c)".to_string(), Coordinate::Column { index: 0 });

    let template = substitute("totals: a+b*(c) done", &resolutions);
    assert_eq!(template, "totals: {{ df.columns[0] }} done");
}

#[test]
fn test_every_occurrence_of_a_literal_is_replaced() {
    let mut args = Arguments::new();
    args.insert("?color", vec![Datum::from("red"), Datum::from("blue")]);
    let empty = Dataset::new(Vec::new(), Vec::new(), Vec::new()).unwrap();

    let template =
        templatize(RuleAnalyzer::shared(), "The red car is red.", &args, &empty).unwrap();
    assert_eq!(
        template,
        "The {{ args['color'][0] }} car is {{ args['color'][0] }}."
    );
}
