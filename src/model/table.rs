//! Sparse row/column table of vertex annotations.
//!
//! Provides the [Table] struct, which maps row labels to cells keyed by
//! column label. Rows and columns are created on first write and never
//! removed. A cell missing from a row is distinct from a cell holding the
//! empty string; missing cells are filled with a sentinel only on output.

use crate::model::annotation::{AnnotationMap, AnnotationValue};
use crate::model::cell_value::CellValue;
use std::collections::{HashMap, HashSet};
use std::vec;

/// First entry of the header row, labelling the row label column.
pub const ROW_LABEL_HEADER: &str = "Row label";

// =#========================================================================#=
// TABLE
// =#========================================================================#=
/// Sparse table of [CellValue]s keyed by row label and column label.
///
/// The set of known columns is always the union of the columns of all rows.
/// Output is sorted lexicographically by row label and by column label.
///
/// # Example
/// ```
/// use beast_comments::model::Table;
///
/// let mut table = Table::new();
/// table.add("0.9", "Kakapo", "posterior");
/// table.add(12.5, "Kakapo", "age");
/// table.add("0.4", "Kea", "posterior");
///
/// let rows: Vec<Vec<String>> = table.output("NA").collect();
/// assert_eq!(rows[0], vec!["Row label", "age", "posterior"]);
/// assert_eq!(rows[1], vec!["Kakapo", "12.5", "0.9"]);
/// assert_eq!(rows[2], vec!["Kea", "NA", "0.4"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: HashMap<String, HashMap<String, CellValue>>,
    columns: HashSet<String>,
}

// ============================================================================
// Construction & Insertion (pub)
// ============================================================================
impl Table {
    /// Creates a new empty [Table].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one cell, creating row and column as needed and
    /// overwriting any previous value.
    ///
    /// # Arguments
    /// * `value` - The cell value
    /// * `row` - Row label, e.g. a taxon name
    /// * `column` - Column label, e.g. an annotation key
    pub fn add(&mut self, value: impl Into<CellValue>, row: &str, column: &str) {
        if !self.columns.contains(column) {
            self.columns.insert(column.to_string());
        }
        self.row_entry(row).insert(column.to_string(), value.into());
    }

    /// Merges a full row's worth of cells into the row with the given label.
    ///
    /// Cells already in the row but not in `cells` are kept;
    /// cells in both are overwritten by `cells`.
    /// The row is created even if `cells` is empty.
    pub fn add_row<I, K, V>(&mut self, cells: I, row: &str)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        self.row_entry(row);
        for (column, value) in cells {
            let column = column.into();
            if !self.columns.contains(&column) {
                self.columns.insert(column.clone());
            }
            self.row_entry(row).insert(column, value.into());
        }
    }

    /// Adds every row of `other` to this table via [add_row](Self::add_row).
    ///
    /// On conflicting cells `other` wins.
    pub fn merge(&mut self, other: Table) {
        for (row, cells) in other.rows {
            self.add_row(cells, &row);
        }
    }

    /// Adds one parsed annotation to a row.
    ///
    /// A scalar is stored under `key`. The values of a list
    /// are stored under the indexed columns `key[0]`, `key[1]`, ...
    pub fn add_annotation(&mut self, key: &str, value: &AnnotationValue, row: &str) {
        match value {
            AnnotationValue::Scalar(v) => self.add(v.as_str(), row, key),
            AnnotationValue::List(values) => {
                for (index, v) in values.iter().enumerate() {
                    self.add(v.as_str(), row, &format!("{key}[{index}]"));
                }
            }
        }
    }

    /// Adds all parsed annotations of a comment to a row
    /// via [add_annotation](Self::add_annotation).
    pub fn add_annotations(&mut self, annotations: &AnnotationMap, row: &str) {
        self.row_entry(row);
        for (key, value) in annotations {
            self.add_annotation(key, value, row);
        }
    }

    /// Get-or-create access to the cells of a row.
    fn row_entry(&mut self, row: &str) -> &mut HashMap<String, CellValue> {
        self.rows.entry(row.to_string()).or_default()
    }
}

// ============================================================================
// Access (pub)
// ============================================================================
impl Table {
    /// Returns the value of a cell, if present.
    pub fn get(&self, row: &str, column: &str) -> Option<&CellValue> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns all cells of a row (unordered), if the row exists.
    pub fn row(&self, row: &str) -> Option<&HashMap<String, CellValue>> {
        self.rows.get(row)
    }

    pub fn contains_row(&self, row: &str) -> bool {
        self.rows.contains_key(row)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.columns.contains(column)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of distinct columns over all rows
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns all column labels, deduplicated and sorted ascending.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        columns.sort_unstable();
        columns
    }

    /// Returns all row labels sorted ascending.
    pub fn row_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.rows.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    /// Returns all rows sorted by label, each with one entry per column
    /// of [columns()](Self::columns), [None] where the cell is absent.
    pub fn rows(&self) -> Vec<TableRow<'_>> {
        let columns = self.columns();
        self.sorted_rows()
            .map(|(label, cells)| TableRow {
                label,
                cells: columns.iter().map(|column| cells.get(*column)).collect(),
            })
            .collect()
    }

    /// Returns the table as a sequence of string rows:
    /// header row first (`"Row label"` followed by the sorted columns),
    /// then one row per row label in sorted order.
    ///
    /// Ordering is computed freshly on every call.
    ///
    /// # Arguments
    /// * `not_available` - Written for cells absent from a row
    pub fn output(&self, not_available: &str) -> TableOutput<'_> {
        let columns = self.columns();
        let rows: Vec<_> = self.sorted_rows().collect();
        TableOutput {
            header_pending: true,
            columns,
            rows: rows.into_iter(),
            not_available: not_available.to_string(),
        }
    }

    /// Unordered iterator over row labels and their cells.
    pub(crate) fn iter_rows(&self) -> impl Iterator<Item = (&str, &HashMap<String, CellValue>)> {
        self.rows.iter().map(|(label, cells)| (label.as_str(), cells))
    }

    fn sorted_rows(&self) -> impl Iterator<Item = (&str, &HashMap<String, CellValue>)> {
        let mut rows: Vec<_> = self.iter_rows().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows.into_iter()
    }
}

// =#========================================================================#=
// TABLE ROW
// =#========================================================================#=
/// One row of a [Table] in column order, as returned by [Table::rows].
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    /// Row label
    pub label: &'a str,
    /// One entry per column, [None] if absent from this row
    pub cells: Vec<Option<&'a CellValue>>,
}

// =#========================================================================#=
// TABLE OUTPUT
// =#========================================================================#=
/// Iterator over the string rows of a [Table], header first.
///
/// Created by [Table::output].
pub struct TableOutput<'a> {
    header_pending: bool,
    columns: Vec<&'a str>,
    rows: vec::IntoIter<(&'a str, &'a HashMap<String, CellValue>)>,
    not_available: String,
}

impl TableOutput<'_> {
    /// Returns the sorted column labels (without the row label header).
    pub fn columns(&self) -> &[&str] {
        &self.columns
    }
}

impl Iterator for TableOutput<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            let mut header = Vec::with_capacity(self.columns.len() + 1);
            header.push(ROW_LABEL_HEADER.to_string());
            header.extend(self.columns.iter().map(|column| column.to_string()));
            return Some(header);
        }

        let (label, cells) = self.rows.next()?;
        let mut output = Vec::with_capacity(self.columns.len() + 1);
        output.push(label.to_string());
        for column in &self.columns {
            match cells.get(*column) {
                Some(value) => output.push(value.to_string()),
                None => output.push(self.not_available.clone()),
            }
        }
        Some(output)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.len() + usize::from(self.header_pending);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableOutput<'_> {}
