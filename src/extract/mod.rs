//! Turning vertex comments of a tree into an annotation table.
//!
//! Tree reading and traversal happen outside this crate. For each vertex
//! the caller provides a row label (a taxon name, or [mrca_label] for
//! internal vertices) and the vertex comment. An [AnnotationExtractor],
//! configured via [ExtractConfig], parses the comments and collects the
//! values in a [Table](crate::model::Table).
//!
//! # Example
//! ```
//! use beast_comments::extract::{AnnotationExtractor, ErrorPolicy, ExtractConfig};
//!
//! let config = ExtractConfig::default().with_error_policy(ErrorPolicy::Skip);
//! let mut extractor = AnnotationExtractor::new(config);
//!
//! extractor.add_comment("&height_median=4.2", "Kakapo")?;
//! extractor.add_comment("height_median=4.2", "Kea")?; // missing '&', skipped
//! extractor.add_age(4.2, "Kakapo");
//!
//! assert_eq!(extractor.skipped(), ["Kea"]);
//! let rows = extractor.into_rows();
//! assert_eq!(rows[0], vec!["Row label", "age", "height_median"]);
//! assert_eq!(rows[1], vec!["Kakapo", "4.2", "4.2"]);
//! # Ok::<(), beast_comments::extract::ExtractError>(())
//! ```

pub mod config;
pub mod extractor;

pub use config::{ErrorPolicy, ExtractConfig, ValueSelection};
pub use extractor::{AGE_COLUMN, AnnotationExtractor, ExtractError, mrca_label};
