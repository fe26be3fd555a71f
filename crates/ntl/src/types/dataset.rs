//! Labeled tabular data.

use indexmap::IndexMap;
use thiserror::Error;

use super::datum::Datum;

/// Whether every label on an axis is numeric.
///
/// Mixed axes degrade to `Text`, and a `Text` axis renders its labels
/// quoted in coordinate expressions while a `Numeric` axis renders them
/// bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Text,
    Numeric,
}

/// An error rejected at dataset construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// A cell row does not match the column count.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The row label count does not match the number of cell rows.
    #[error("{labels} row labels for {rows} rows of data")]
    RowLabels { labels: usize, rows: usize },

    /// A record lacks a column that the first record established.
    #[error("record {row} is missing column '{column}'")]
    MissingColumn { row: usize, column: String },

    /// A record carries a column that the first record did not establish.
    #[error("record {row} has unexpected column '{column}'")]
    UnexpectedColumn { row: usize, column: String },
}

/// A small grid of scalar values with labeled columns and rows.
///
/// The constructors validate shape, so a `Dataset` value is consistent by
/// construction: every cell row is as wide as the column axis and every
/// row has a label. Label order is significant; positions in coordinate
/// expressions refer to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<String>,
    cells: Vec<Vec<Datum>>,
    column_kind: LabelKind,
    row_kind: LabelKind,
}

impl Dataset {
    /// Builds a dataset from explicit labels and a row-major cell grid.
    pub fn new(
        columns: Vec<String>,
        rows: Vec<String>,
        cells: Vec<Vec<Datum>>,
    ) -> Result<Self, DatasetError> {
        if rows.len() != cells.len() {
            return Err(DatasetError::RowLabels {
                labels: rows.len(),
                rows: cells.len(),
            });
        }
        for (row, cell_row) in cells.iter().enumerate() {
            if cell_row.len() != columns.len() {
                return Err(DatasetError::Ragged {
                    row,
                    expected: columns.len(),
                    found: cell_row.len(),
                });
            }
        }
        let column_kind = label_kind(&columns);
        let row_kind = label_kind(&rows);
        Ok(Dataset {
            columns,
            rows,
            cells,
            column_kind,
            row_kind,
        })
    }

    /// Builds a dataset from row-oriented records.
    ///
    /// The first record establishes the column set and order; every record
    /// must carry exactly those keys. Rows are labeled by position
    /// ("0", "1", ...), so the row axis comes out `Numeric`. An empty
    /// record list yields an empty dataset.
    pub fn from_records(records: Vec<IndexMap<String, Datum>>) -> Result<Self, DatasetError> {
        let Some(first) = records.first() else {
            return Self::new(Vec::new(), Vec::new(), Vec::new());
        };
        let columns: Vec<String> = first.keys().cloned().collect();
        let mut cells = Vec::with_capacity(records.len());
        for (row, mut record) in records.into_iter().enumerate() {
            let mut cell_row = Vec::with_capacity(columns.len());
            for column in &columns {
                match record.shift_remove(column) {
                    Some(value) => cell_row.push(value),
                    None => {
                        return Err(DatasetError::MissingColumn {
                            row,
                            column: column.clone(),
                        });
                    }
                }
            }
            if let Some((extra, _)) = record.into_iter().next() {
                return Err(DatasetError::UnexpectedColumn { row, column: extra });
            }
            cells.push(cell_row);
        }
        let rows = (0..cells.len()).map(|i| i.to_string()).collect();
        Self::new(columns, rows, cells)
    }

    /// Column labels, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row labels, in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The cell at `(row, column)` positions, if in range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Datum> {
        self.cells.get(row)?.get(column)
    }

    /// Position of a column label.
    pub fn column_position(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Position of a row label.
    pub fn row_position(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|r| r == label)
    }

    /// Label homogeneity of the column axis.
    pub fn column_kind(&self) -> LabelKind {
        self.column_kind
    }

    /// Label homogeneity of the row axis.
    pub fn row_kind(&self) -> LabelKind {
        self.row_kind
    }

    /// Whether the dataset has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn label_kind(labels: &[String]) -> LabelKind {
    if !labels.is_empty() && labels.iter().all(|l| l.parse::<f64>().is_ok()) {
        LabelKind::Numeric
    } else {
        LabelKind::Text
    }
}
