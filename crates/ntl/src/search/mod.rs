//! Coordinate search: resolving extracted spans against a dataset or an
//! argument list.
//!
//! Both searches produce a [`ResolutionMap`]. They deliberately differ in
//! conflict policy: the dataset search keeps the first match for a literal
//! text, the argument search keeps the last. Both are deterministic given
//! their input order.

mod args;
mod dataset;

pub use args::search_args;
pub use dataset::{sanitize_index, search_dataset};

use indexmap::IndexMap;

use crate::types::Coordinate;

/// Insertion-ordered map from matched literal text to the coordinate it
/// resolved to. A literal resolves to at most one coordinate.
pub type ResolutionMap = IndexMap<String, Coordinate>;
