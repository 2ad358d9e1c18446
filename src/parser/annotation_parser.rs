//! Recursive-descent parser for annotation comments.
//!
//! This module provides the [AnnotationParser] struct, which turns a comment
//! such as `&height_median=47.57,height_95%_HPD={40.05,70.61}` into an
//! [AnnotationMap].
//!
//! # Format
//! * `comment ::= '&' pair (',' pair)* [',']`
//! * `pair ::= key '=' value`
//! * `value ::= scalar | list`
//! * `list ::= '{' scalar (',' scalar)* '}'`
//!
//! Keys and scalars are single non-special tokens; surrounding double
//! quotes are stripped. The grammar is LL(1): after `=`, a `{` starts a
//! list and any text token is a scalar.

use crate::model::annotation::{AnnotationMap, AnnotationValue};
use crate::parser::parsing_error::ParsingError;
use crate::parser::tokenizer::{Symbol, Token, Tokenizer};
use crate::parser::utils::strip_quotes;
use tracing::trace;

const EXPECTED_KEY: &str = "IDENTIFIER";
const EXPECTED_VALUE: &str = "VALUE";
const EXPECTED_LIST_SEPARATOR: &str = ",}";

// =#========================================================================#=
// ANNOTATION PARSER
// =#========================================================================#=
/// Parser for a single annotation comment.
///
/// Holds one lookahead token, advanced explicitly, and never backtracks.
/// The final (possibly empty) text token of the [Tokenizer] marks the end
/// of the stream, so the lookahead is [None] once the comment is exhausted.
///
/// # Example
/// ```
/// use beast_comments::parser::AnnotationParser;
/// use beast_comments::model::AnnotationValue;
///
/// let parser = AnnotationParser::new("&rate=0.0042,\"pop size\"={1.5,2.5}");
/// let annotations = parser.parse().unwrap();
///
/// assert_eq!(annotations.get("rate"), Some(&AnnotationValue::scalar("0.0042")));
/// assert_eq!(
///     annotations.get("pop size"),
///     Some(&AnnotationValue::list(["1.5", "2.5"]))
/// );
/// ```
pub struct AnnotationParser<'a> {
    tokens: Tokenizer<'a>,
    current: Option<Token<'a>>,
    /// Byte position of `current`, or of the end of input
    position: usize,
}

// ============================================================================
// Construction & API (pub)
// ============================================================================
impl<'a> AnnotationParser<'a> {
    /// Creates a new [AnnotationParser] for the given comment.
    ///
    /// # Arguments
    /// * `comment` - The comment content, without the enclosing `[` `]`
    pub fn new(comment: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(comment),
            current: None,
            position: 0,
        }
    }

    /// Consumes the parser and parses the comment.
    ///
    /// # Returns
    /// * `Ok(AnnotationMap)` - All key-value pairs of the comment
    /// * `Err(ParsingError)` - If the comment violates the grammar
    pub fn parse(mut self) -> Result<AnnotationMap, ParsingError> {
        let mut annotations = AnnotationMap::new();

        self.advance();
        self.expect_symbol(Symbol::Ampersand)?;

        loop {
            // Exhausted stream after '&' or after a separating ','
            self.advance();
            if self.current.is_none() {
                break;
            }

            let (key, value) = self.parse_pair()?;
            annotations.insert(key, value);

            self.advance();
            match self.current {
                None => break,
                Some(Token::Symbol(Symbol::Comma)) => continue,
                _ => return Err(self.error(Symbol::Comma.as_str())),
            }
        }

        trace!(
            "Parsed {} annotations from comment of {} bytes",
            annotations.len(),
            self.tokens.input().len()
        );

        Ok(annotations)
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl<'a> AnnotationParser<'a> {
    /// Parses `key=value`, expecting the current token to be the key.
    fn parse_pair(&mut self) -> Result<(String, AnnotationValue), ParsingError> {
        let key = self.expect_text(EXPECTED_KEY)?;

        self.advance();
        self.expect_symbol(Symbol::Equals)?;

        self.advance();
        let value = match self.current {
            Some(Token::Text(text)) => AnnotationValue::Scalar(strip_quotes(text).to_string()),
            _ => {
                self.expect_symbol(Symbol::OpenBrace)?;
                AnnotationValue::List(self.parse_list()?)
            }
        };

        Ok((key.to_string(), value))
    }

    /// Parses list elements up to and including the closing `}`,
    /// expecting the current token to be the opening `{`.
    fn parse_list(&mut self) -> Result<Vec<String>, ParsingError> {
        let mut values = Vec::new();
        loop {
            self.advance();
            values.push(self.expect_text(EXPECTED_VALUE)?.to_string());

            self.advance();
            match self.current {
                Some(Token::Symbol(Symbol::Comma)) => continue,
                Some(Token::Symbol(Symbol::CloseBrace)) => break,
                _ => return Err(self.error(EXPECTED_LIST_SEPARATOR)),
            }
        }
        Ok(values)
    }

    /// Moves the lookahead to the next token. The final empty text token
    /// counts as end of stream.
    fn advance(&mut self) {
        self.current = self.tokens.next().filter(|token| !token.is_empty_text());
        self.position = match self.current {
            Some(_) => self.tokens.token_start(),
            None => self.tokens.input().len(),
        };
    }

    /// Checks that the current token is a text token and returns it unquoted.
    fn expect_text(&self, expected: &str) -> Result<&'a str, ParsingError> {
        match self.current {
            Some(Token::Text(text)) => Ok(strip_quotes(text)),
            _ => Err(self.error(expected)),
        }
    }

    /// Checks that the current token is the given symbol.
    fn expect_symbol(&self, symbol: Symbol) -> Result<(), ParsingError> {
        match self.current {
            Some(token) if token.is_symbol(symbol) => Ok(()),
            _ => Err(self.error(symbol.as_str())),
        }
    }

    fn error(&self, expected: &str) -> ParsingError {
        match self.current {
            Some(token) => ParsingError::new(expected, token.as_str(), self.position),
            None => ParsingError::unexpected_end(expected, self.position),
        }
    }
}
