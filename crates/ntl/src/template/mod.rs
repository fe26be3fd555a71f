//! Template parsing and rendering.
//!
//! A template is ordinary text with `{{ <coordinate> }}` placeholders in
//! the grammar produced by templatization: `df.columns[<int>]`,
//! `df.loc['<label>']` / `df.loc[<label>]`, `df.loc[<row>, <column>]`
//! and `args['<key>'][<int>]`. Labels are quoted on text axes and bare on
//! numeric ones. Parsing turns a template string into segments; rendering
//! evaluates each placeholder against a dataset and argument list,
//! reconstructing the text the template was made from.

mod error;
mod parse;
mod render;

pub use error::{RenderError, TemplateError};
pub use parse::parse_template;

use std::str::FromStr;

use crate::types::Coordinate;

/// One piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, passed through untouched.
    Literal(String),
    /// A `{{ ... }}` coordinate placeholder.
    Placeholder(Coordinate),
}

/// A parsed template: literal runs and coordinate placeholders, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// The parsed segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The coordinate of every placeholder, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Coordinate> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(coordinate) => Some(coordinate),
            Segment::Literal(_) => None,
        })
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_template(s)
    }
}
