//! Scalar values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One scalar value in a dataset cell or an argument list.
///
/// Matching never compares numbers numerically. Every datum has a canonical
/// string form — its `Display` output — and all equality against source
/// text goes through that form. Floats always carry a decimal point
/// ("9.0", never "9") so they stay distinguishable from integers.
///
/// In untagged deserialization whole numbers become `Int`, other numbers
/// `Float`, and everything else `Str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Datum {
    /// The string slice if this datum is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Datum::Str(s) => Some(s),
            Datum::Int(_) | Datum::Float(_) => None,
        }
    }

    /// Whether this datum is numeric (integer or float).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Datum::Int(_) | Datum::Float(_))
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datum::Int(n) => write!(f, "{n}"),
            Datum::Float(x) if x.fract() == 0.0 && x.is_finite() => write!(f, "{x:.1}"),
            Datum::Float(x) => write!(f, "{x}"),
            Datum::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Datum {
    fn from(value: i64) -> Self {
        Datum::Int(value)
    }
}

impl From<f64> for Datum {
    fn from(value: f64) -> Self {
        Datum::Float(value)
    }
}

impl From<&str> for Datum {
    fn from(value: &str) -> Self {
        Datum::Str(value.to_string())
    }
}

impl From<String> for Datum {
    fn from(value: String) -> Self {
        Datum::Str(value)
    }
}
