//! Error type for the annotation parser.
//!
//! This module provides [ParsingError], the single error kind raised when an
//! annotation comment violates the grammar. What was expected and what was
//! found are carried as message payload.

use thiserror::Error;

/// Text reported as `found` when the token stream ended early.
pub const END_OF_INPUT: &str = "<end of input>";

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Grammar violation in an annotation comment, with the byte position of
/// the offending token.
///
/// # Example
/// ```
/// use beast_comments::parse_annotation;
///
/// let err = parse_annotation("height=5555").unwrap_err();
/// assert_eq!(err.expected(), "&");
/// assert_eq!(err.found(), "height");
/// assert_eq!(err.to_string(), "Expected '&' but found 'height' at position 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected '{expected}' but found '{found}' at position {position}")]
pub struct ParsingError {
    expected: String,
    found: String,
    position: usize,
    /// Whether the token stream ended before the grammar was satisfied
    end_of_input: bool,
}

impl ParsingError {
    /// Creates a new [ParsingError].
    ///
    /// # Arguments
    /// * `expected` - Description of the token the grammar required
    /// * `found` - Text of the token actually encountered
    /// * `position` - Byte offset of that token in the comment
    pub fn new(expected: impl Into<String>, found: impl Into<String>, position: usize) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
            position,
            end_of_input: false,
        }
    }

    /// Convenience constructor for running out of tokens.
    pub fn unexpected_end(expected: impl Into<String>, position: usize) -> Self {
        Self {
            end_of_input: true,
            ..Self::new(expected, END_OF_INPUT, position)
        }
    }

    /// Get what the grammar expected
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Get the text of the offending token
    pub fn found(&self) -> &str {
        &self.found
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether the comment ended before the grammar was satisfied.
    pub fn is_unexpected_end(&self) -> bool {
        self.end_of_input
    }
}
