//! Beast-comments is a library to parse the annotation comments that
//! Bayesian tree summarization tools (BEAST, TreeAnnotator) attach to
//! vertices of phylogenetic trees, and to collect them in a flat table.
//!
//! Core functionality provided:
//! - Parser: Tokenize and parse comments like
//!   `&height_median=47.57,height_95%_HPD={40.05,70.61}` into an
//!   [AnnotationMap] of scalar and list values.
//! - Table: Sparse row/column [Table] merging differing key sets of many
//!   vertices, with sorted output for spreadsheet writers.
//! - Set pivot: Indexed set annotations (`state.set={A,B}` with
//!   `state.set.prob={0.9,0.1}`) become columns named by the set values
//!   (`state.set.prob=A`), see [model::set_transform].
//! - Extraction: [AnnotationExtractor] ties these together per vertex,
//!   configurable via [ExtractConfig].
//!
//! Limitations:
//! - Reading tree files and traversing trees is left to the caller
//!   (e.g. with the nexwick crate)
//! - Writing CSV/TSV files is left to the caller
//!
//! # Usage patterns
//! 1. Parse a single comment with [parse_annotation].
//! 2. Feed the comments of all vertices to an [AnnotationExtractor] and
//!    take the final table or its string rows.
//!
//! ## Example
//! ```
//! use beast_comments::parse_annotation;
//! use beast_comments::model::AnnotationValue;
//!
//! let annotations = parse_annotation(
//!     "&height_95%_HPD={40.05717565800388,70.61032474932166},height_median=47.571176094511124,",
//! )?;
//! assert_eq!(
//!     annotations.get("height_95%_HPD"),
//!     Some(&AnnotationValue::list(["40.05717565800388", "70.61032474932166"]))
//! );
//! assert_eq!(
//!     annotations.get("height_median"),
//!     Some(&AnnotationValue::scalar("47.571176094511124"))
//! );
//! # Ok::<(), beast_comments::parser::ParsingError>(())
//! ```

pub mod extract;
pub mod model;
pub mod parser;
pub mod writer;

pub use crate::extract::{AnnotationExtractor, ExtractConfig, ExtractError};
pub use crate::model::{AnnotationMap, AnnotationValue, Table};
pub use crate::parser::ParsingError;

use crate::parser::annotation_parser::AnnotationParser;
use crate::parser::tokenizer::Tokenizer;

// ============================================================================
// Quick API
// ============================================================================
/// Parses a single annotation comment (without enclosing `[` `]`).
///
/// See [AnnotationParser] for the grammar.
///
/// # Errors
/// Returns a [ParsingError] naming the expected and the found token if the
/// comment is malformed, e.g. for `height=5555` (missing `&`).
pub fn parse_annotation(comment: &str) -> Result<AnnotationMap, ParsingError> {
    AnnotationParser::new(comment).parse()
}

/// Returns a lazy iterator over the tokens of a comment.
///
/// See [Tokenizer].
pub fn tokenize(comment: &str) -> Tokenizer<'_> {
    Tokenizer::new(comment)
}
