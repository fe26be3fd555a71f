//! Template error types.

use thiserror::Error;

/// An error from parsing a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

/// An error from rendering a template against a dataset and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Column position outside the column axis.
    #[error("column index {index} out of range for {count} columns")]
    ColumnIndex { index: i64, count: usize },

    /// No row with the requested label.
    #[error("no row labeled '{label}'{}", did_you_mean(.suggestion))]
    RowLabel {
        label: String,
        suggestion: Option<String>,
    },

    /// No column with the requested label.
    #[error("no column labeled '{label}'{}", did_you_mean(.suggestion))]
    ColumnLabel {
        label: String,
        suggestion: Option<String>,
    },

    /// Row position outside the row axis.
    #[error("row index {index} out of range for {count} rows")]
    RowIndex { index: i64, count: usize },

    /// No argument with the requested key, bare or `?`-marked.
    #[error("unknown argument '{key}'{}", did_you_mean(.suggestion))]
    ArgumentKey {
        key: String,
        suggestion: Option<String>,
    },

    /// Value index outside an argument's value list.
    #[error("argument '{key}' has {count} values, index {index} is out of range")]
    ArgumentIndex {
        key: String,
        index: i64,
        count: usize,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean '{candidate}'?)"),
        None => String::new(),
    }
}

/// The closest candidate by Jaro-Winkler similarity, if any scores above
/// the suggestion threshold.
pub(crate) fn closest_match<'a, I>(target: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| (strsim::jaro_winkler(target, candidate), candidate))
        .filter(|(score, _)| *score > 0.7)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}
