//! Integration tests for argument-list search.

use ntl::types::{Arguments, Coordinate, Datum};
use ntl::{extract_phrases, search_args, ExtractOptions, ResolutionMap};
use ntl_nlp::{Analyze, RuleAnalyzer};

fn resolve(text: &str, args: &Arguments) -> ResolutionMap {
    let analyzer = RuleAnalyzer::shared();
    let doc = analyzer.analyze(text).unwrap();
    let spans = extract_phrases(&doc, &ExtractOptions::default());
    search_args(analyzer, &spans, args).unwrap()
}

fn strings(values: &[&str]) -> Vec<Datum> {
    values.iter().map(|v| Datum::from(*v)).collect()
}

// =============================================================================
// Key handling
// =============================================================================

#[test]
fn test_question_markers_are_stripped_from_keys() {
    let mut args = Arguments::new();
    args.insert("?color", strings(&["red", "blue"]));

    let found = resolve("The red car", &args);
    assert_eq!(found.len(), 1);
    assert_eq!(
        found["red"],
        Coordinate::Argument {
            key: "color".to_string(),
            index: 0,
        }
    );
}

// =============================================================================
// Word positions
// =============================================================================

#[test]
fn test_positions_count_across_the_flattened_value_list() {
    let mut args = Arguments::new();
    args.insert("?shades", strings(&["dark red", "light blue"]));

    let found = resolve("a red shirt and blue coat", &args);
    // Keyed by the matching token's text, not the surrounding span.
    assert!(!found.contains_key("red shirt"));
    assert_eq!(
        found["red"],
        Coordinate::Argument {
            key: "shades".to_string(),
            index: 1,
        }
    );
    assert_eq!(
        found["blue"],
        Coordinate::Argument {
            key: "shades".to_string(),
            index: 3,
        }
    );
}

#[test]
fn test_numeric_values_match_number_tokens() {
    let mut args = Arguments::new();
    args.insert("?when", vec![Datum::Int(2020)]);

    let found = resolve("It happened in 2020.", &args);
    assert_eq!(
        found["2020"],
        Coordinate::Argument {
            key: "when".to_string(),
            index: 0,
        }
    );
}

// =============================================================================
// Collision policy
// =============================================================================

#[test]
fn test_later_keys_overwrite_earlier_matches() {
    let mut args = Arguments::new();
    args.insert("?color", strings(&["red"]));
    args.insert("?accent", strings(&["red"]));

    let found = resolve("The red car", &args);
    assert_eq!(found.len(), 1);
    assert_eq!(
        found["red"],
        Coordinate::Argument {
            key: "accent".to_string(),
            index: 0,
        }
    );
}
