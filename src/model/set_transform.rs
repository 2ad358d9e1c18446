//! Pivoting of indexed set annotations into named columns.
//!
//! Discrete traits are annotated by BEAST as parallel lists, e.g.
//! `state.set={Otago,Canterbury}` and `state.set.prob={0.8,0.2}`. Inserted
//! into a [Table] these become the indexed columns `state.set[0]`,
//! `state.set[1]`, `state.set.prob[0]` and `state.set.prob[1]`, which are
//! only linked by their shared index. [transform_sets] re-projects them into
//! columns named by the set values: `state.set.prob=Otago` and
//! `state.set.prob=Canterbury`.
//!
//! # Column families
//! * Set key columns: `<prefix>.set[<i>]`, holding the key for slot `i`
//! * Value columns: `<prefix><subkey>[<i>]`, holding the value for slot `i`,
//!   for any `<subkey>` starting with `.` (e.g. `.prob`, `.set.prob`)
//!
//! Families are discovered from the column labels alone. Each value column
//! belongs to at most one family.

use crate::model::column_name::{IndexedColumn, SET_SUFFIX};
use crate::model::table::Table;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

// =#========================================================================#=
// SET FAMILY
// =#========================================================================#=
/// An indexed-set column family discovered in a table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFamily<'a> {
    prefix: &'a str,
    /// Set key columns by index
    keys: BTreeMap<usize, &'a str>,
    /// Value columns by subkey, then index
    values: BTreeMap<&'a str, HashMap<usize, &'a str>>,
}

impl<'a> SetFamily<'a> {
    /// Prefix shared by all columns of the family, e.g. `state`
    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    /// Family name `<prefix>.set`, e.g. `state.set`
    pub fn name(&self) -> String {
        format!("{}{}", self.prefix, SET_SUFFIX)
    }

    /// Set key columns ordered by index.
    pub fn key_columns(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.keys.iter().map(|(index, column)| (*index, *column))
    }

    /// Distinct subkeys of the value columns, sorted.
    pub fn subkeys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.values.keys().copied()
    }

    /// Returns the value column for the given subkey and index, if present.
    pub fn value_column(&self, subkey: &str, index: usize) -> Option<&'a str> {
        self.values
            .get(subkey)
            .and_then(|by_index| by_index.get(&index))
            .copied()
    }

    /// Label of the pivoted column for a subkey and an observed set key.
    pub fn pivot_column(&self, subkey: &str, key: &str) -> String {
        format!("{}{}={}", self.prefix, subkey, key)
    }
}

// ============================================================================
// Discovery (pub)
// ============================================================================
/// Discovers all set families among the given column labels.
///
/// First groups the set key columns `<prefix>.set[<i>]` by prefix, then
/// scans all columns again for value columns of each family.
/// A value column whose index has no set key column is ignored.
/// If prefixes nest (`loc` and `loc.host`), a value column is assigned to
/// the longest prefix it matches.
///
/// # Returns
/// The families sorted by prefix.
///
/// # Example
/// ```
/// use beast_comments::model::set_transform::discover_families;
///
/// let columns = ["grp.set[0]", "grp.set[1]", "grp.prob[0]", "grp.prob[1]", "height"];
/// let families = discover_families(columns);
///
/// assert_eq!(families.len(), 1);
/// assert_eq!(families[0].name(), "grp.set");
/// assert_eq!(families[0].subkeys().collect::<Vec<_>>(), vec![".prob"]);
/// assert_eq!(families[0].value_column(".prob", 1), Some("grp.prob[1]"));
/// ```
pub fn discover_families<'a, I>(columns: I) -> Vec<SetFamily<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let parsed: Vec<(&'a str, IndexedColumn<'a>)> = columns
        .into_iter()
        .filter_map(|column| IndexedColumn::parse(column).map(|parsed| (column, parsed)))
        .collect();

    let mut families: BTreeMap<&'a str, SetFamily<'a>> = BTreeMap::new();
    for (column, indexed) in &parsed {
        if let Some(prefix) = indexed.set_prefix() {
            families
                .entry(prefix)
                .or_insert_with(|| SetFamily {
                    prefix,
                    keys: BTreeMap::new(),
                    values: BTreeMap::new(),
                })
                .keys
                .insert(indexed.index, *column);
        }
    }

    let prefixes: Vec<&'a str> = families.keys().copied().collect();
    for (column, indexed) in &parsed {
        // A value column belongs to the longest matching prefix only:
        // `loc.host.set.prob[0]` is part of `loc.host`, never of `loc`
        let owner = prefixes
            .iter()
            .filter_map(|prefix| indexed.subkey_of(prefix).map(|subkey| (*prefix, subkey)))
            .max_by_key(|(prefix, _)| prefix.len());
        let Some((prefix, subkey)) = owner else {
            continue;
        };
        if let Some(family) = families
            .get_mut(prefix)
            .filter(|family| family.keys.contains_key(&indexed.index))
        {
            family
                .values
                .entry(subkey)
                .or_default()
                .insert(indexed.index, *column);
        }
    }

    families.into_values().collect()
}

// ============================================================================
// Transformation (pub)
// ============================================================================
/// Builds a new table holding only the pivoted cells of `table`.
///
/// For every row and every set key column present in that row, the key
/// is the cell's value. For each subkey, a non-empty value at the same index
/// is written to column `<prefix><subkey>=<key>`. Absent keys and absent or
/// empty values are skipped.
pub fn pivot_sets(table: &Table) -> Table {
    let families = discover_families(table.columns());
    let mut pivot = Table::new();

    for family in &families {
        debug!(
            "Pivoting set family '{}' with {} indices and subkeys {:?}",
            family.name(),
            family.keys.len(),
            family.values.keys().collect::<Vec<_>>()
        );

        for (row, cells) in table.iter_rows() {
            for (index, key_column) in family.key_columns() {
                let Some(key) = cells.get(key_column) else {
                    continue;
                };
                let key = key.to_string();
                for subkey in family.subkeys() {
                    let value = family
                        .value_column(subkey, index)
                        .and_then(|column| cells.get(column));
                    if let Some(value) = value.filter(|v| !v.is_empty()) {
                        pivot.add(value.clone(), row, &family.pivot_column(subkey, &key));
                    }
                }
            }
        }
    }

    pivot
}

/// Pivots all indexed set families of `table` and merges the result back.
///
/// Pivoted columns overwrite existing cells of the same name; the raw
/// indexed columns remain. Running this again on its own output adds
/// nothing, since pivoted column labels carry no index.
///
/// # Example
/// ```
/// use beast_comments::model::Table;
/// use beast_comments::model::set_transform::transform_sets;
///
/// let mut table = Table::new();
/// table.add("A", "R", "grp.set[0]");
/// table.add("B", "R", "grp.set[1]");
/// table.add("0.9", "R", "grp.prob[0]");
/// table.add("0.5", "R", "grp.prob[1]");
///
/// transform_sets(&mut table);
///
/// assert_eq!(table.get("R", "grp.prob=A").unwrap().to_string(), "0.9");
/// assert_eq!(table.get("R", "grp.prob=B").unwrap().to_string(), "0.5");
/// assert_eq!(table.num_columns(), 6);
/// ```
pub fn transform_sets(table: &mut Table) {
    let pivot = pivot_sets(table);
    debug!(
        "Merging {} pivoted columns over {} rows",
        pivot.num_columns(),
        pivot.num_rows()
    );
    table.merge(pivot);
}
