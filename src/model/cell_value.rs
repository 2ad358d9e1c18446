//! Scalar cell values of a [Table](crate::model::Table).
//!
//! Values parsed from comments are text. Values supplied by the caller, such
//! as vertex ages computed from a tree, may be numeric. The table does not
//! interpret either; they are only displayed when output.

use std::fmt;

// =#========================================================================#=
// CELL VALUE
// =#========================================================================#=
/// Enum to encapsulate a table cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// For values taken from annotation comments
    Text(String),
    /// For floating point values, e.g. vertex ages
    Float(f64),
    /// For integer values
    Int(i64),
}

impl CellValue {
    /// Returns whether this is the empty text.
    /// Numeric values are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Text(text) if text.is_empty())
    }

    /// Returns the text, [None] for numeric values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Int(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(v as f64)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<i32> for CellValue {
    fn from(v: i32) -> Self {
        CellValue::Int(v as i64)
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}
