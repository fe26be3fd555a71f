//! Prose formatting helpers.
//!
//! Small English-inflection utilities for turning values and sequences into
//! readable fragments. Dictionary and suffix-rule lookups, no engine logic.

use std::fmt::Display;

use ntl_nlp::{Analyze, RuleAnalyzer};
use rand::seq::SliceRandom;

/// Singular to plural pairs the suffix rules get wrong.
const IRREGULAR_PLURALS: [(&str, &str); 28] = [
    ("child", "children"),
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("index", "indices"),
    ("axis", "axes"),
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("hypothesis", "hypotheses"),
    ("diagnosis", "diagnoses"),
    ("criterion", "criteria"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("shelf", "shelves"),
    ("wolf", "wolves"),
    ("thief", "thieves"),
    ("loaf", "loaves"),
    ("quiz", "quizzes"),
];

/// Nouns whose singular and plural forms coincide.
const INVARIANT_NOUNS: [&str; 7] = [
    "series", "species", "news", "data", "media", "sheep", "fish",
];

/// Joins a sequence into an English list.
///
/// The `", "` separator inserts `" and "` before the final item; any other
/// separator joins plainly.
///
/// ```
/// use ntl::format::join_items;
///
/// assert_eq!(join_items(&["a", "b", "c"], ", "), "a, b and c");
/// assert_eq!(join_items(&["a", "b"], "; "), "a; b");
/// ```
pub fn join_items<T: Display>(items: &[T], sep: &str) -> String {
    let rendered: Vec<String> = items.iter().map(ToString::to_string).collect();
    if rendered.len() < 2 || sep != ", " {
        return rendered.join(sep);
    }
    let Some((last, rest)) = rendered.split_last() else {
        return String::new();
    };
    format!("{} and {last}", rest.join(sep))
}

/// The plural form of an English noun. Words that are already plural pass
/// through unchanged.
pub fn plural(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let lower = word.to_lowercase();
    if INVARIANT_NOUNS.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural_form)) = IRREGULAR_PLURALS.iter().find(|(s, _)| *s == lower) {
        return (*plural_form).to_string();
    }
    if IRREGULAR_PLURALS.iter().any(|(_, p)| *p == lower) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix(['y', 'Y']) {
        let vowel_before = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
        if stem.is_empty() || vowel_before {
            return format!("{word}s");
        }
        return format!("{stem}ies");
    }
    let sibilant = ["ss", "sh", "ch", "x", "z", "us", "is"]
        .iter()
        .any(|ending| lower.ends_with(ending));
    if sibilant {
        return format!("{word}es");
    }
    if lower.ends_with('s') {
        return word.to_string();
    }
    format!("{word}s")
}

/// The singular dictionary form of an English noun. Words that are already
/// singular pass through, lowercased.
pub fn singular(word: &str) -> String {
    match RuleAnalyzer::shared().word_lemmas(word) {
        Ok(mut lemmas) if !lemmas.is_empty() => lemmas.remove(0),
        Ok(_) | Err(_) => word.to_lowercase(),
    }
}

/// Inflects a noun by count: plural for counts above one, singular otherwise.
/// A count of zero takes the singular form.
pub fn pluralize_by_count(word: &str, count: usize) -> String {
    if count > 1 { plural(word) } else { singular(word) }
}

/// Inflects a noun by the length of a sequence.
pub fn pluralize_by_seq<T>(word: &str, items: &[T]) -> String {
    pluralize_by_count(word, items.len())
}

/// Describes how `y` compares to `x` in prose.
///
/// Equal values read as "the same" or "identical". Otherwise a comparative
/// is chosen at random and intensified when one of the caller's threshold
/// predicates holds: `a_lot` wins over `a_bit`.
pub fn humanize_comparison<B, L>(x: f64, y: f64, a_bit: B, a_lot: L) -> String
where
    B: Fn(f64, f64) -> bool,
    L: Fn(f64, f64) -> bool,
{
    if (x - y).abs() < f64::EPSILON {
        return pick(&["the same", "identical"]).to_string();
    }
    let comparative = if x < y {
        pick(&["higher", "more", "greater"])
    } else {
        pick(&["less", "lower"])
    };
    let intensifier = if a_lot(x, y) {
        pick(&["a lot", "much"])
    } else if a_bit(x, y) {
        pick(&["a little", "a bit"])
    } else {
        ""
    };
    if intensifier.is_empty() {
        comparative.to_string()
    } else {
        format!("{intensifier} {comparative}")
    }
}

fn pick<'a>(options: &[&'a str]) -> &'a str {
    let mut rng = rand::thread_rng();
    options.choose(&mut rng).copied().unwrap_or_default()
}
