//! Parser for BEAST-style annotation comments.
//!
//! This module provides the [Tokenizer] splitting a comment into tokens,
//! the [AnnotationParser] built on it, and the [ParsingError] it reports.

pub mod annotation_parser;
pub mod parsing_error;
pub mod tokenizer;
pub mod utils;

pub use annotation_parser::AnnotationParser;
pub use parsing_error::ParsingError;
pub use tokenizer::{Symbol, Token, Tokenizer};
