//! Placeholder syntax parser using winnow.
//!
//! Literal text is anything outside `{{ }}`. A single `{` or `}` is
//! literal; an opening `{{` commits to a placeholder, and failing to find
//! a well-formed coordinate expression behind it is a syntax error.

use winnow::combinator::{alt, delimited, opt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::error::TemplateError;
use super::{Segment, Template};
use crate::types::{Coordinate, RowIndex};

/// Parse a template string into segments.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(template) => {
            if remaining.is_empty() {
                Ok(template)
            } else {
                // The only way to get stuck is an opening "{{" without a
                // well-formed expression behind it.
                let (line, column) = calculate_position(input, remaining);
                Err(TemplateError::Syntax {
                    line,
                    column,
                    message: "malformed placeholder expression".to_string(),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(TemplateError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into merged segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(previous)) = result.last_mut() {
                    previous.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Placeholder(_) => result.push(segment),
        }
    }
    result
}

fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a placeholder: {{ ws coordinate ws }}
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(("{{", ws), coordinate, (ws, "}}"))
        .map(Segment::Placeholder)
        .parse_next(input)
}

/// Parse a single literal character. Anything goes except the start of a
/// placeholder.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    if input.starts_with("{{") {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a coordinate expression.
fn coordinate(input: &mut &str) -> ModalResult<Coordinate> {
    // Cell before row: both start with "df.loc[" and cell is longer.
    alt((column, cell, row, argument)).parse_next(input)
}

/// Parse a column coordinate: df.columns[<int>]
fn column(input: &mut &str) -> ModalResult<Coordinate> {
    delimited(("df.columns[", ws), integer, (ws, ']'))
        .map(|index| Coordinate::Column { index })
        .parse_next(input)
}

/// Parse a cell coordinate: df.loc[<row>, <column>] with the column
/// quoted or bare.
fn cell(input: &mut &str) -> ModalResult<Coordinate> {
    let _ = ("df.loc[", ws).parse_next(input)?;
    let row = row_index(input)?;
    let _ = (ws, ',', ws).parse_next(input)?;
    let (column, quoted) = alt((
        quoted.map(|label| (label, true)),
        bare_label.map(|label| (label, false)),
    ))
    .parse_next(input)?;
    let _ = (ws, ']').parse_next(input)?;
    Ok(Coordinate::Cell { row, column, quoted })
}

/// Parse the row slot of a cell: a bare position or a quoted label.
fn row_index(input: &mut &str) -> ModalResult<RowIndex> {
    alt((
        quoted.map(RowIndex::Label),
        integer.map(RowIndex::Position),
    ))
    .parse_next(input)
}

/// Parse a row coordinate: df.loc['<label>'] or df.loc[<label>]
fn row(input: &mut &str) -> ModalResult<Coordinate> {
    delimited(
        ("df.loc[", ws),
        alt((
            quoted.map(|label| Coordinate::Row {
                label,
                quoted: true,
            }),
            bare_label.map(|label| Coordinate::Row {
                label,
                quoted: false,
            }),
        )),
        (ws, ']'),
    )
    .parse_next(input)
}

/// Parse an argument coordinate: args['<key>'][<int>]
fn argument(input: &mut &str) -> ModalResult<Coordinate> {
    let _ = "args".parse_next(input)?;
    let key = delimited(('[', ws), quoted, (ws, ']')).parse_next(input)?;
    let index = delimited(('[', ws), integer, (ws, ']')).parse_next(input)?;
    Ok(Coordinate::Argument { key, index })
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a single-quoted label. No escape processing.
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('\'', take_while(0.., |c: char| c != '\''), '\'')
        .map(String::from)
        .parse_next(input)
}

/// Parse a signed integer.
fn integer(input: &mut &str) -> ModalResult<i64> {
    (opt('-'), take_while(1.., |c: char| c.is_ascii_digit()))
        .take()
        .try_map(str::parse)
        .parse_next(input)
}

/// Parse a bare numeric row label, kept as written.
fn bare_label(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '-' || c == '.')
        .map(String::from)
        .parse_next(input)
}
