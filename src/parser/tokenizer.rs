//! Lazy tokenizer for annotation comments.
//!
//! This module provides [Tokenizer], which splits a comment such as
//! `&rate=0.5,height_95%_HPD={1.2,3.4}` into [Token]s. A token is either a
//! maximal run of non-special characters ([Token::Text]) or one of the
//! structural characters `& = , { }` ([Token::Symbol]).

use std::fmt;
use std::iter::FusedIterator;

// =#========================================================================#=
// SYMBOL
// =#========================================================================#=
/// Structural characters of the annotation grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `&`, starts every annotation comment
    Ampersand,
    /// `=`, separates key and value
    Equals,
    /// `,`, separates pairs and list elements
    Comma,
    /// `{`, opens a list value
    OpenBrace,
    /// `}`, closes a list value
    CloseBrace,
}

impl Symbol {
    /// Returns the [Symbol] for a structural byte, [None] for any other byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'&' => Some(Symbol::Ampersand),
            b'=' => Some(Symbol::Equals),
            b',' => Some(Symbol::Comma),
            b'{' => Some(Symbol::OpenBrace),
            b'}' => Some(Symbol::CloseBrace),
            _ => None,
        }
    }

    /// Returns the character this symbol stands for.
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Ampersand => '&',
            Symbol::Equals => '=',
            Symbol::Comma => ',',
            Symbol::OpenBrace => '{',
            Symbol::CloseBrace => '}',
        }
    }

    /// Returns the character this symbol stands for as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Ampersand => "&",
            Symbol::Equals => "=",
            Symbol::Comma => ",",
            Symbol::OpenBrace => "{",
            Symbol::CloseBrace => "}",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =#========================================================================#=
// TOKEN
// =#========================================================================#=
/// A single token of an annotation comment, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Run of non-special characters (identifier or value).
    /// Only the last token of a stream can be empty.
    Text(&'a str),
    /// One structural character
    Symbol(Symbol),
}

impl<'a> Token<'a> {
    /// Returns the text this token was produced from.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(text) => text,
            Token::Symbol(symbol) => symbol.as_str(),
        }
    }

    /// Returns whether this token is the given [Symbol].
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        *self == Token::Symbol(symbol)
    }

    /// Returns whether this token is an empty [Token::Text],
    /// which only ever occurs as the final token of a stream.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Token::Text(text) if text.is_empty())
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =#========================================================================#=
// TOKENIZER
// =#========================================================================#=
/// Single-pass iterator over the [Token]s of an annotation comment.
///
/// Scans left to right, accumulating non-special characters. On a structural
/// character the pending run (if non-empty) is emitted first, then the
/// symbol. At the end of input the pending run is emitted unconditionally,
/// even if empty, so every stream ends with a [Token::Text].
///
/// The token texts concatenated give back the input exactly.
///
/// # Example
/// ```
/// use beast_comments::parser::tokenizer::{Symbol, Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("a={1,2}").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Text("a"),
///         Token::Symbol(Symbol::Equals),
///         Token::Symbol(Symbol::OpenBrace),
///         Token::Text("1"),
///         Token::Symbol(Symbol::Comma),
///         Token::Text("2"),
///         Token::Symbol(Symbol::CloseBrace),
///         Token::Text(""),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    /// Byte position of the next unscanned character
    pos: usize,
    /// Byte position where the last emitted token starts
    token_start: usize,
    /// Symbol found right after a text run, emitted on the next call
    pending: Option<Symbol>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new [Tokenizer] over the given comment.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
            pending: None,
            finished: false,
        }
    }

    /// Returns the byte offset in the input at which the most recently
    /// returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns the input this tokenizer scans.
    pub fn input(&self) -> &'a str {
        self.input
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(symbol) = self.pending.take() {
            self.token_start = self.pos - 1;
            return Some(Token::Symbol(symbol));
        }

        if self.finished {
            return None;
        }

        // Structural characters are ASCII, so slicing at them is
        // always on a char boundary
        let bytes = self.input.as_bytes();
        let start = self.pos;
        while let Some(&byte) = bytes.get(self.pos) {
            if let Some(symbol) = Symbol::from_byte(byte) {
                self.pos += 1;
                if start == self.pos - 1 {
                    self.token_start = start;
                    return Some(Token::Symbol(symbol));
                }
                self.pending = Some(symbol);
                self.token_start = start;
                return Some(Token::Text(&self.input[start..self.pos - 1]));
            }
            self.pos += 1;
        }

        // End of input: flush accumulator, possibly empty
        self.finished = true;
        self.token_start = start;
        Some(Token::Text(&self.input[start..]))
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::utils::is_special;

    #[test]
    fn symbol_bytes_match_special_chars() {
        for byte in 0..=u8::MAX {
            assert_eq!(Symbol::from_byte(byte).is_some(), is_special(byte));
        }
    }

    #[test]
    fn token_start_tracks_offsets() {
        let mut tokenizer = Tokenizer::new("&ab=1");
        let mut starts = Vec::new();
        while tokenizer.next().is_some() {
            starts.push(tokenizer.token_start());
        }
        assert_eq!(starts, vec![0, 1, 3, 4]);
    }

    #[test]
    fn multibyte_text_is_kept_whole() {
        let tokens: Vec<Token> = Tokenizer::new("tāxon=Kōkako").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("tāxon"),
                Token::Symbol(Symbol::Equals),
                Token::Text("Kōkako"),
            ]
        );
    }
}
