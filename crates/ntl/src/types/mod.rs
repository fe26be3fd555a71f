//! Core data types: scalar values, labeled datasets, argument lists, and
//! the coordinate expressions that tie text back to them.

mod arguments;
mod coordinate;
mod dataset;
mod datum;

pub use arguments::Arguments;
pub use coordinate::{Coordinate, RowIndex};
pub use dataset::{Dataset, DatasetError, LabelKind};
pub use datum::Datum;
