//! End-to-end templatization: analyze, extract, resolve, substitute.

use ntl_nlp::{Analyze, AnalyzeError};
use tracing::debug;

use crate::extract::{ExtractOptions, extract_phrases};
use crate::search::{ResolutionMap, search_args, search_dataset};
use crate::types::{Arguments, Dataset};

/// Resolves every matchable phrase in `text` to a coordinate.
///
/// Runs extraction once, then both searches over the same spans, and
/// merges the results with argument matches taking precedence on literal
/// collision. Overwritten entries keep their original map position; new
/// ones append.
pub fn resolve_references<A: Analyze + ?Sized>(
    analyzer: &A,
    text: &str,
    args: &Arguments,
    dataset: &Dataset,
    options: &ExtractOptions,
) -> Result<ResolutionMap, AnalyzeError> {
    let doc = analyzer.analyze(text)?;
    let spans = extract_phrases(&doc, options);
    debug!(spans = spans.len(), "extracted candidate spans");
    let mut resolved = search_dataset(analyzer, &spans, dataset)?;
    let from_args = search_args(analyzer, &spans, args)?;
    resolved.extend(from_args);
    Ok(resolved)
}

/// Applies a resolution map to `text`, replacing every occurrence of each
/// resolved literal with its `{{ <coordinate> }}` placeholder, in map order.
///
/// Replacement is plain substring substitution. No pattern language is
/// involved, so dataset content full of regex metacharacters is handled
/// verbatim.
pub fn substitute(text: &str, resolutions: &ResolutionMap) -> String {
    let mut template = text.to_string();
    for (literal, coordinate) in resolutions {
        template = template.replace(literal, &format!("{{{{ {coordinate} }}}}"));
    }
    template
}

/// Rewrites `text` into a template, replacing each resolved literal with
/// its `{{ <coordinate> }}` placeholder. Unresolved phrases stay as
/// ordinary text.
///
/// # Example
///
/// ```
/// use ntl::types::{Arguments, Dataset, Datum};
/// use ntl_nlp::RuleAnalyzer;
///
/// let dataset = Dataset::new(
///     vec!["revenue".into(), "year".into()],
///     vec!["0".into()],
///     vec![vec![Datum::Int(100), Datum::Int(2020)]],
/// )?;
/// let template = ntl::templatize(
///     RuleAnalyzer::shared(),
///     "The revenue in 2020 was notable.",
///     &Arguments::new(),
///     &dataset,
/// )?;
/// assert_eq!(
///     template,
///     "The {{ df.columns[0] }} in {{ df.loc[0, 'year'] }} was notable."
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn templatize<A: Analyze + ?Sized>(
    analyzer: &A,
    text: &str,
    args: &Arguments,
    dataset: &Dataset,
) -> Result<String, AnalyzeError> {
    templatize_with(analyzer, text, args, dataset, &ExtractOptions::default())
}

/// [`templatize`] with explicit extraction options.
pub fn templatize_with<A: Analyze + ?Sized>(
    analyzer: &A,
    text: &str,
    args: &Arguments,
    dataset: &Dataset,
    options: &ExtractOptions,
) -> Result<String, AnalyzeError> {
    let resolved = resolve_references(analyzer, text, args, dataset, options)?;
    debug!(replacements = resolved.len(), "templatized");
    Ok(substitute(text, &resolved))
}
