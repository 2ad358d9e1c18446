//! Ingesting vertex comments into a table.
//!
//! The caller traverses a tree and hands over, per vertex, a row label and
//! the vertex comment (and optionally its age). The [AnnotationExtractor]
//! parses each comment, inserts the selected values, and finally pivots
//! indexed set families.

use crate::extract::config::{ErrorPolicy, ExtractConfig, ValueSelection};
use crate::model::annotation::AnnotationMap;
use crate::model::set_transform::transform_sets;
use crate::model::table::Table;
use crate::parser::annotation_parser::AnnotationParser;
use crate::parser::parsing_error::ParsingError;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Column holding vertex ages added via [AnnotationExtractor::add_age].
pub const AGE_COLUMN: &str = "age";

/// Row label for an internal vertex, named after two leaves it is the
/// most recent common ancestor of.
///
/// # Example
/// ```
/// use beast_comments::extract::mrca_label;
///
/// assert_eq!(mrca_label("Kea", "Kaka"), "MRCA of Kea and Kaka");
/// ```
pub fn mrca_label(first: &str, second: &str) -> String {
    format!("MRCA of {first} and {second}")
}

// =#========================================================================#=
// EXTRACT ERROR
// =#========================================================================#=
/// Error of an [AnnotationExtractor], naming the row whose comment failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Comment of the row could not be parsed
    #[error("Invalid annotation comment for row '{row}': {source}")]
    Parse {
        row: String,
        #[source]
        source: ParsingError,
    },
}

impl ExtractError {
    /// Label of the row whose comment failed
    pub fn row(&self) -> &str {
        match self {
            ExtractError::Parse { row, .. } => row,
        }
    }
}

// =#========================================================================#=
// ANNOTATION EXTRACTOR
// =#========================================================================#=
/// Builds a [Table] from vertex comments, one row per vertex.
///
/// # Example
/// ```
/// use beast_comments::extract::{AnnotationExtractor, ExtractConfig, mrca_label};
///
/// let mut extractor = AnnotationExtractor::new(ExtractConfig::default().with_not_available("NA"));
/// extractor.add_comment("&rate=0.5,state.set={Otago,Canterbury},state.set.prob={0.8,0.2}", "Kea")?;
/// extractor.add_comment("&rate=0.7", &mrca_label("Kea", "Kaka"))?;
///
/// let table = extractor.into_table();
/// assert_eq!(table.get("Kea", "state.set.prob=Otago").unwrap().to_string(), "0.8");
/// assert_eq!(table.get("MRCA of Kea and Kaka", "rate").unwrap().to_string(), "0.7");
/// # Ok::<(), beast_comments::extract::ExtractError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnnotationExtractor {
    config: ExtractConfig,
    table: Table,
    skipped: Vec<String>,
}

impl AnnotationExtractor {
    /// Creates a new [AnnotationExtractor] with an empty table.
    pub fn new(config: ExtractConfig) -> Self {
        Self::with_table(config, Table::new())
    }

    /// Creates a new [AnnotationExtractor] that adds to an existing table.
    pub fn with_table(config: ExtractConfig, table: Table) -> Self {
        Self {
            config,
            table,
            skipped: Vec::new(),
        }
    }

    /// Parses a vertex comment and adds its selected values to the row.
    ///
    /// # Arguments
    /// * `comment` - Comment content without enclosing brackets, e.g. `&rate=0.5`
    /// * `row` - Row label of the vertex
    ///
    /// # Returns
    /// * `Ok(())` - If the comment was added, or skipped under [ErrorPolicy::Skip]
    /// * `Err(ExtractError)` - If the comment is malformed under [ErrorPolicy::Abort];
    ///   nothing of this comment was added
    pub fn add_comment(&mut self, comment: &str, row: &str) -> Result<(), ExtractError> {
        match AnnotationParser::new(comment).parse() {
            Ok(annotations) => {
                trace!("Adding {} annotations to row '{}'", annotations.len(), row);
                self.add_annotations(&annotations, row);
                Ok(())
            }
            Err(source) => match self.config.error_policy() {
                ErrorPolicy::Abort => Err(ExtractError::Parse {
                    row: row.to_string(),
                    source,
                }),
                ErrorPolicy::Skip => {
                    warn!("Skipping comment of row '{}': {}", row, source);
                    self.skipped.push(row.to_string());
                    Ok(())
                }
            },
        }
    }

    /// Adds the selected values of already parsed annotations to the row.
    /// The row is created even if no value is selected.
    ///
    /// Scalars go to the column named by their key, lists to indexed
    /// columns `key[0]`, `key[1]`, ...
    pub fn add_annotations(&mut self, annotations: &AnnotationMap, row: &str) {
        match self.config.values() {
            ValueSelection::All => self.table.add_annotations(annotations, row),
            ValueSelection::Only(keys) => {
                let selected: AnnotationMap = keys
                    .iter()
                    .filter_map(|key| match annotations.get(key) {
                        Some(value) => Some((key.as_str(), value.clone())),
                        None => {
                            trace!("Row '{}' has no annotation '{}'", row, key);
                            None
                        }
                    })
                    .collect();
                self.table.add_annotations(&selected, row);
            }
        }
    }

    /// Adds the age of a vertex, as computed from the tree, to the row.
    pub fn add_age(&mut self, age: f64, row: &str) {
        self.table.add(age, row, AGE_COLUMN);
    }

    /// Returns the table built so far, without set pivot.
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Row labels whose comments were skipped under [ErrorPolicy::Skip].
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Consumes the extractor and returns the table,
    /// with indexed set families pivoted if so configured.
    pub fn into_table(self) -> Table {
        let mut table = self.table;
        if self.config.set_transform() {
            transform_sets(&mut table);
        }
        debug!(
            "Extracted table with {} rows and {} columns ({} comments skipped)",
            table.num_rows(),
            table.num_columns(),
            self.skipped.len()
        );
        table
    }

    /// Consumes the extractor and returns the final table as string rows,
    /// header first, absent cells filled with the configured
    /// [not available](ExtractConfig::not_available) text.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        let not_available = self.config.not_available().to_string();
        let table = self.into_table();
        table.output(&not_available).collect()
    }
}
