//! CLI output formatting.

mod diagnostic;
mod table;

pub use diagnostic::SyntaxDiagnostic;
pub use table::{span_table, token_table};
