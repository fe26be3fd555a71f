//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use ntl_nlp::{Span, Token};

/// Format analyzed tokens as an ASCII table.
pub fn token_table(tokens: &[Token]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Text", "Lemma", "Tag", "Start", "End"]);

    for token in tokens {
        table.add_row(vec![
            token.text.clone(),
            token.lemma.clone(),
            token.tag.to_string(),
            token.start.to_string(),
            token.end.to_string(),
        ]);
    }

    table
}

/// Format extracted phrases as an ASCII table.
pub fn span_table(spans: &[Span]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Phrase", "Start", "End"]);

    for span in spans {
        table.add_row(vec![
            span.text().to_string(),
            span.start().to_string(),
            span.end().to_string(),
        ]);
    }

    table
}
