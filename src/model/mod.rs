//! Data model for annotations and the annotation table.
//!
//! # Annotations
//! A parsed comment is an [AnnotationMap] from key to [AnnotationValue],
//! either a scalar or a list of strings.
//!
//! # Table
//! The [Table] collects annotations of many vertices, one row per vertex:
//!
//! | Type | Role |
//! |------|------|
//! | [Table] | Sparse row label → column label → [CellValue] store |
//! | [TableRow] | One sorted row for consumers such as CSV writers |
//! | [TableOutput] | Header-first iterator of string rows |
//!
//! # Set pivot
//! List annotations become indexed columns `key[0]`, `key[1]`, ... For
//! indexed set families (`state.set[i]` with `state.set.prob[i]`),
//! [transform_sets] adds columns named by the observed set values. Column
//! labels are matched via [IndexedColumn].

pub mod annotation;
pub mod cell_value;
pub mod column_name;
pub mod set_transform;
pub mod table;

pub use annotation::{AnnotationMap, AnnotationValue};
pub use cell_value::CellValue;
pub use column_name::IndexedColumn;
pub use set_transform::{SetFamily, discover_families, transform_sets};
pub use table::{ROW_LABEL_HEADER, Table, TableOutput, TableRow};
