//! Miette diagnostic wrapper for template syntax errors.

use miette::{Diagnostic, NamedSource, SourceSpan};
use ntl::TemplateError;
use thiserror::Error;

/// A miette-compatible diagnostic for template syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(ntl::template::syntax))]
pub struct SyntaxDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl SyntaxDiagnostic {
    /// Create a diagnostic from a template error with source context.
    pub fn new(name: &str, content: &str, err: &TemplateError) -> Self {
        let TemplateError::Syntax {
            line,
            column,
            message,
        } = err;

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        SyntaxDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, 1).into(),
            message: message.clone(),
            help: Some(
                "placeholders look like {{ df.columns[0] }}, {{ df.loc['label'] }}, \
                 {{ df.loc[0, 'col'] }}, or {{ args['key'][0] }}"
                    .to_string(),
            ),
        }
    }
}
