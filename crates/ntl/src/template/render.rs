//! Template rendering against a dataset and arguments.

use crate::template::error::{RenderError, closest_match};
use crate::template::{Segment, Template};
use crate::types::{Arguments, Coordinate, Dataset, RowIndex};

impl Template {
    /// Renders the template by substituting each placeholder with the value
    /// its coordinate addresses.
    ///
    /// Column and row placeholders render the addressed label, cell and
    /// argument placeholders render the addressed value. Negative positions
    /// count from the end of the axis.
    pub fn render(&self, dataset: &Dataset, args: &Arguments) -> Result<String, RenderError> {
        let mut output = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(coordinate) => {
                    output.push_str(&evaluate(coordinate, dataset, args)?);
                }
            }
        }
        Ok(output)
    }
}

fn evaluate(
    coordinate: &Coordinate,
    dataset: &Dataset,
    args: &Arguments,
) -> Result<String, RenderError> {
    match coordinate {
        Coordinate::Column { index } => {
            let columns = dataset.columns();
            let Some(position) = resolve_index(*index, columns.len()) else {
                return Err(RenderError::ColumnIndex {
                    index: *index,
                    count: columns.len(),
                });
            };
            Ok(columns[position].clone())
        }
        Coordinate::Row { label, .. } => {
            if dataset.rows().iter().any(|row| row == label) {
                Ok(label.clone())
            } else {
                Err(RenderError::RowLabel {
                    label: label.clone(),
                    suggestion: closest_match(label, dataset.rows().iter().map(String::as_str)),
                })
            }
        }
        Coordinate::Cell { row, column, .. } => {
            let Some(column_position) = dataset.column_position(column) else {
                return Err(RenderError::ColumnLabel {
                    label: column.clone(),
                    suggestion: closest_match(
                        column,
                        dataset.columns().iter().map(String::as_str),
                    ),
                });
            };
            let row_position = match row {
                RowIndex::Position(index) => {
                    resolve_index(*index, dataset.rows().len()).ok_or(RenderError::RowIndex {
                        index: *index,
                        count: dataset.rows().len(),
                    })?
                }
                RowIndex::Label(label) => {
                    let Some(position) = dataset.row_position(label) else {
                        return Err(RenderError::RowLabel {
                            label: label.clone(),
                            suggestion: closest_match(
                                label,
                                dataset.rows().iter().map(String::as_str),
                            ),
                        });
                    };
                    position
                }
            };
            let datum = dataset
                .cell(row_position, column_position)
                .ok_or(RenderError::RowIndex {
                    index: row_position as i64,
                    count: dataset.rows().len(),
                })?;
            Ok(datum.to_string())
        }
        Coordinate::Argument { key, index } => {
            let Some(values) = args.lookup(key) else {
                return Err(RenderError::ArgumentKey {
                    key: key.clone(),
                    suggestion: closest_match(
                        key,
                        args.iter().map(|(name, _)| name.trim_start_matches('?')),
                    ),
                });
            };
            let Some(position) = resolve_index(*index, values.len()) else {
                return Err(RenderError::ArgumentIndex {
                    key: key.clone(),
                    index: *index,
                    count: values.len(),
                });
            };
            Ok(values[position].to_string())
        }
    }
}

/// Resolves a possibly negative position into an offset on an axis of the
/// given length.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 { index + len as i64 } else { index };
    (0..len as i64)
        .contains(&resolved)
        .then_some(resolved as usize)
}
