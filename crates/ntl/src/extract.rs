//! Candidate phrase extraction.
//!
//! Extraction runs a small fixed table of part-of-speech sequence rules
//! over an analyzed document and keeps the maximal, non-nested candidates.
//! No grammar, no learned model: referring expressions in data prose are
//! overwhelmingly short noun-ish runs, and the downstream searches discard
//! anything that matches nothing.

use bon::Builder;
use indexmap::IndexMap;
use ntl_nlp::{Doc, PosTag, Span};

/// A part-of-speech sequence rule. Each element of a rule's sequence
/// matches one or more consecutive tokens of that tag, greedily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseRule {
    /// One or more proper nouns: "Humpty Dumpty".
    ProperNouns,
    /// One or more nouns: "red car", "annual revenue".
    Nouns,
    /// Adverbs followed by verbs: "steadily increased".
    AdverbVerb,
    /// Adjectives followed by verbs: "slow moving".
    AdjectiveVerb,
    /// One or more numerals: "2020", "3.5".
    Numbers,
}

impl PhraseRule {
    /// Every rule, in the order they run by default.
    pub const ALL: [PhraseRule; 5] = [
        PhraseRule::ProperNouns,
        PhraseRule::Nouns,
        PhraseRule::AdverbVerb,
        PhraseRule::AdjectiveVerb,
        PhraseRule::Numbers,
    ];

    fn sequence(self) -> &'static [PosTag] {
        match self {
            PhraseRule::ProperNouns => &[PosTag::Propn],
            PhraseRule::Nouns => &[PosTag::Noun],
            PhraseRule::AdverbVerb => &[PosTag::Adv, PosTag::Verb],
            PhraseRule::AdjectiveVerb => &[PosTag::Adj, PosTag::Verb],
            PhraseRule::Numbers => &[PosTag::Num],
        }
    }
}

/// What to do with the analyzer's entity spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntityPolicy {
    /// Use rule candidates only; entity spans are covered by the rules
    /// themselves when relevant.
    #[default]
    Exclude,
    /// Admit the analyzer's entity spans as candidates alongside the
    /// rules.
    Union,
}

/// Options for [`extract_phrases`].
///
/// # Example
///
/// ```
/// use ntl::extract::{ExtractOptions, PhraseRule};
///
/// let options = ExtractOptions::builder()
///     .rules(vec![PhraseRule::Nouns, PhraseRule::Numbers])
///     .build();
/// assert_eq!(options.rules.as_deref(), Some(&[PhraseRule::Nouns, PhraseRule::Numbers][..]));
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct ExtractOptions {
    /// Restrict candidates to these rules; every rule runs when absent.
    pub rules: Option<Vec<PhraseRule>>,

    /// Whether entity spans join the candidate set.
    #[builder(default)]
    pub entities: EntityPolicy,
}

/// Extracts candidate phrase spans from an analyzed document.
///
/// Candidates are deduplicated by literal text and any candidate whose
/// text appears inside a strictly longer candidate's text is dropped, so
/// the output contains only maximal spans. Order follows candidate
/// emission order: entity spans first under [`EntityPolicy::Union`], then
/// each rule's matches left to right.
///
/// # Example
///
/// ```
/// use ntl::extract::{ExtractOptions, extract_phrases};
/// use ntl_nlp::{Analyze, RuleAnalyzer};
///
/// let doc = RuleAnalyzer::shared().analyze("The red car won in Paris.")?;
/// let spans = extract_phrases(&doc, &ExtractOptions::default());
/// let texts: Vec<&str> = spans.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, vec!["Paris", "red car"]);
/// # Ok::<(), ntl_nlp::AnalyzeError>(())
/// ```
pub fn extract_phrases(doc: &Doc, options: &ExtractOptions) -> Vec<Span> {
    let mut candidates: Vec<Span> = Vec::new();
    if options.entities == EntityPolicy::Union {
        candidates.extend(doc.entities().iter().cloned());
    }
    let selected: &[PhraseRule] = match &options.rules {
        Some(rules) => rules,
        None => &PhraseRule::ALL,
    };
    for &rule in selected {
        rule_matches(doc, rule, &mut candidates);
    }
    unoverlap(candidates)
}

// Greedy left-to-right matching: at each start position the rule consumes
// a maximal run per sequence element, so sub-runs are never emitted.
fn rule_matches(doc: &Doc, rule: PhraseRule, out: &mut Vec<Span>) {
    let tokens = doc.tokens();
    let mut i = 0;
    while i < tokens.len() {
        let mut end = i;
        let mut matched = true;
        for &tag in rule.sequence() {
            let run_start = end;
            while end < tokens.len() && tokens[end].tag == tag {
                end += 1;
            }
            if end == run_start {
                matched = false;
                break;
            }
        }
        if matched {
            if let Some(span) = doc.span(i..end) {
                out.push(span);
            }
            i = end;
        } else {
            i += 1;
        }
    }
}

// Dedupe by literal text (later duplicates replace earlier spans but keep
// their position), then drop every text contained in a longer one.
fn unoverlap(candidates: Vec<Span>) -> Vec<Span> {
    let mut by_text: IndexMap<String, Span> = IndexMap::new();
    for span in candidates {
        by_text.insert(span.text().to_string(), span);
    }
    let texts: Vec<String> = by_text.keys().cloned().collect();
    by_text
        .into_iter()
        .filter(|(text, _)| {
            !texts
                .iter()
                .any(|other| other != text && other.contains(text.as_str()))
        })
        .map(|(_, span)| span)
        .collect()
}
