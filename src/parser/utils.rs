//! Utility functions for annotation tokens.
//!
//! BEAST writes keys and values either bare or wrapped in double quotes.
//! There is no escaping mechanism, so unquoting is plain trimming.

/// Structural characters of the annotation grammar: `& = , { }`.
pub const SPECIAL_CHARS: &[u8] = b"&=,{}";

/// Checks if a byte is one of the structural characters `& = , { }`.
///
/// # Examples
/// ```
/// # use beast_comments::parser::utils::is_special;
/// assert!(is_special(b'&'));
/// assert!(is_special(b'}'));
/// assert!(!is_special(b'a'));
/// assert!(!is_special(b'"'));
/// ```
#[inline]
pub fn is_special(byte: u8) -> bool {
    SPECIAL_CHARS.contains(&byte)
}

/// Checks if a string contains none of the structural characters,
/// i.e. whether it could be written as a single bare token.
///
/// # Examples
/// ```
/// # use beast_comments::parser::utils::is_bare_token;
/// assert!(is_bare_token("height_95%_HPD"));
/// assert!(is_bare_token("\"Mount Cook\""));
/// assert!(!is_bare_token("a=b"));
/// assert!(!is_bare_token("{x}"));
/// ```
pub fn is_bare_token(text: &str) -> bool {
    !text.bytes().any(is_special)
}

/// Removes all double quotes from both ends of a token.
///
/// Trimming is unconditional: unquoted tokens are returned unchanged and
/// quotes inside the token are kept.
///
/// # Examples
/// ```
/// # use beast_comments::parser::utils::strip_quotes;
/// assert_eq!(strip_quotes("\"Kea\""), "Kea");
/// assert_eq!(strip_quotes("Kea"), "Kea");
/// assert_eq!(strip_quotes("\"Ke\"a\""), "Ke\"a");
/// assert_eq!(strip_quotes("\"\""), "");
/// ```
pub fn strip_quotes(token: &str) -> &str {
    token.trim_matches('"')
}
