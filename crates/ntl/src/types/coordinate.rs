//! Coordinate expressions.

use std::fmt;

use serde::{Serialize, Serializer};

/// The row designator inside a cell coordinate: a bare, possibly negative,
/// position or a quoted label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowIndex {
    Position(i64),
    Label(String),
}

/// A location in the dataset or argument list that a piece of text
/// resolved to.
///
/// `Display` renders the placeholder expression exactly as it appears
/// between `{{ }}` braces, and the template parser reads the same grammar
/// back, so `parse(c.to_string()) == c` for every coordinate. Labels are
/// single-quoted with no escape processing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coordinate {
    /// `df.columns[<index>]` — a column by sanitized position.
    Column { index: i64 },
    /// `df.loc['<label>']` or `df.loc[<label>]` — a row by label, quoted
    /// iff the row axis is text-labeled.
    Row { label: String, quoted: bool },
    /// `df.loc[<row>, <column>]` — a single cell. The column label is
    /// quoted iff the column axis is text-labeled; the row slot quotes by
    /// its own form (labels quoted, positions bare).
    Cell {
        row: RowIndex,
        column: String,
        quoted: bool,
    },
    /// `args['<key>'][<index>]` — a value in an argument list.
    Argument { key: String, index: i64 },
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Column { index } => write!(f, "df.columns[{index}]"),
            Coordinate::Row {
                label,
                quoted: true,
            } => write!(f, "df.loc['{label}']"),
            Coordinate::Row {
                label,
                quoted: false,
            } => write!(f, "df.loc[{label}]"),
            Coordinate::Cell { row, column, quoted } => {
                f.write_str("df.loc[")?;
                match row {
                    RowIndex::Position(position) => write!(f, "{position}")?,
                    RowIndex::Label(label) => write!(f, "'{label}'")?,
                }
                if *quoted {
                    write!(f, ", '{column}']")
                } else {
                    write!(f, ", {column}]")
                }
            }
            Coordinate::Argument { key, index } => write!(f, "args['{key}'][{index}]"),
        }
    }
}

// Serialized as the expression string, which is the only form consumers
// of machine output need.
impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Coordinate::Column { index: 0 }.to_string(), "df.columns[0]");
        assert_eq!(
            Coordinate::Column { index: -2 }.to_string(),
            "df.columns[-2]"
        );
        assert_eq!(
            Coordinate::Row {
                label: "2019".into(),
                quoted: false
            }
            .to_string(),
            "df.loc[2019]"
        );
        assert_eq!(
            Coordinate::Row {
                label: "west".into(),
                quoted: true
            }
            .to_string(),
            "df.loc['west']"
        );
        assert_eq!(
            Coordinate::Cell {
                row: RowIndex::Position(0),
                column: "year".into(),
                quoted: true
            }
            .to_string(),
            "df.loc[0, 'year']"
        );
        assert_eq!(
            Coordinate::Cell {
                row: RowIndex::Position(-1),
                column: "2020".into(),
                quoted: false
            }
            .to_string(),
            "df.loc[-1, 2020]"
        );
        assert_eq!(
            Coordinate::Argument {
                key: "color".into(),
                index: 0
            }
            .to_string(),
            "args['color'][0]"
        );
    }
}
