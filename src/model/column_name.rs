//! Structured view of indexed column labels.
//!
//! List annotations are stored in columns named `<base>[<index>]`. The
//! [IndexedColumn] struct splits such a label once into its parts so that
//! column families can be matched on fields instead of on raw strings.

use std::fmt;

/// Suffix of the base of a set key column, as in `state.set[0]`.
pub const SET_SUFFIX: &str = ".set";

// =#========================================================================#=
// INDEXED COLUMN
// =#========================================================================#=
/// A column label of the form `<base>[<index>]`, borrowing from the label.
///
/// # Example
/// ```
/// use beast_comments::model::IndexedColumn;
///
/// let column = IndexedColumn::parse("state.set.prob[3]").unwrap();
/// assert_eq!(column.base, "state.set.prob");
/// assert_eq!(column.index, 3);
/// assert_eq!(column.set_prefix(), None);
///
/// let key_column = IndexedColumn::parse("state.set[3]").unwrap();
/// assert_eq!(key_column.set_prefix(), Some("state"));
/// assert_eq!(column.subkey_of("state"), Some(".set.prob"));
///
/// assert!(IndexedColumn::parse("height_median").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexedColumn<'a> {
    /// Everything before the bracketed index
    pub base: &'a str,
    /// The bracketed index
    pub index: usize,
}

impl<'a> IndexedColumn<'a> {
    /// Splits a column label into base and index.
    ///
    /// # Returns
    /// [None] unless the label ends in `[<digits>]` preceded by a
    /// non-empty base. An index that does not fit in `usize` also gives
    /// [None], so such a column is treated as a plain column.
    pub fn parse(column: &'a str) -> Option<Self> {
        let inner = column.strip_suffix(']')?;
        let open = inner.rfind('[')?;
        let (base, digits) = (&inner[..open], &inner[open + 1..]);
        if base.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index = digits.parse().ok()?;
        Some(Self { base, index })
    }

    /// Returns the set prefix if this is a set key column
    /// `<prefix>.set[<index>]` with non-empty prefix.
    pub fn set_prefix(&self) -> Option<&'a str> {
        self.base
            .strip_suffix(SET_SUFFIX)
            .filter(|prefix| !prefix.is_empty())
    }

    /// Returns the subkey if this is a value column `<prefix><subkey>[<index>]`
    /// of the set family with the given prefix.
    ///
    /// A subkey starts with `.` followed by at least one character. It
    /// is neither a set key itself (ending in `.set`) nor a pivoted column
    /// (containing `=`), and contains no brackets.
    pub fn subkey_of(&self, prefix: &str) -> Option<&'a str> {
        self.base
            .strip_prefix(prefix)
            .filter(|subkey| is_value_subkey(subkey))
    }
}

impl fmt::Display for IndexedColumn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.base, self.index)
    }
}

fn is_value_subkey(subkey: &str) -> bool {
    subkey.len() > 1
        && subkey.starts_with('.')
        && !subkey.ends_with(SET_SUFFIX)
        && !subkey.contains(['=', '[', ']'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_malformed_indices() {
        assert!(IndexedColumn::parse("rate[]").is_none());
        assert!(IndexedColumn::parse("rate[x]").is_none());
        assert!(IndexedColumn::parse("rate[-1]").is_none());
        assert!(IndexedColumn::parse("[0]").is_none());
        assert!(IndexedColumn::parse("rate[0").is_none());
        assert!(IndexedColumn::parse("rate0]").is_none());
    }

    #[test]
    fn parse_uses_last_bracket() {
        let column = IndexedColumn::parse("a[1].set[2]").unwrap();
        assert_eq!(column.base, "a[1].set");
        assert_eq!(column.index, 2);
    }

    #[test]
    fn parse_compares_indices_as_integers() {
        assert_eq!(IndexedColumn::parse("rate[007]").unwrap().index, 7);
    }

    #[test]
    fn parse_rejects_index_overflow() {
        assert!(IndexedColumn::parse("k.set[99999999999999999999]").is_none());
        let max = format!("k.set[{}]", usize::MAX);
        assert_eq!(IndexedColumn::parse(&max).unwrap().index, usize::MAX);
    }

    #[test]
    fn set_prefix_needs_non_empty_prefix() {
        assert_eq!(IndexedColumn::parse(".set[0]").unwrap().set_prefix(), None);
        assert_eq!(IndexedColumn::parse("a.b.set[0]").unwrap().set_prefix(), Some("a.b"));
        assert_eq!(IndexedColumn::parse("asset[0]").unwrap().set_prefix(), None);
    }

    #[test]
    fn subkey_rules() {
        fn subkey<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
            IndexedColumn::parse(label).unwrap().subkey_of(prefix)
        }
        assert_eq!(subkey("grp.prob[0]", "grp"), Some(".prob"));
        assert_eq!(subkey("grp.set.prob[0]", "grp"), Some(".set.prob"));
        assert_eq!(subkey("grp.set[0]", "grp"), None);
        assert_eq!(subkey("grp.sub.set[0]", "grp"), None);
        assert_eq!(subkey("grp.[0]", "grp"), None);
        assert_eq!(subkey("grp_rate[0]", "grp"), None);
        assert_eq!(subkey("grp.prob=x[0]", "grp"), None);
        assert_eq!(subkey("other.prob[0]", "grp"), None);
    }
}
