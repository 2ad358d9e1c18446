//! Annotation comment writing.
//!
//! Serializes an [AnnotationMap] back into the comment grammar, e.g.
//! `&height_95%_HPD={40.05,70.61},height_median=47.57,`, so that parsing the
//! result yields the same map.

use crate::model::annotation::{AnnotationMap, AnnotationValue};
use crate::parser::utils::is_bare_token;
use thiserror::Error;

/// Errors for annotations that the comment grammar cannot express.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// Key or value contains one of `& = , { }`, for which there is no escaping.
    #[error("Token '{0}' contains a structural character and cannot be written")]
    StructuralCharacter(String),
    /// Lists need at least one element.
    #[error("List value of key '{0}' is empty and cannot be written")]
    EmptyList(String),
}

/// Returns the comment representation of the annotations, keys sorted,
/// each pair followed by `,`.
///
/// Empty keys and values are written as `""`.
///
/// # Errors
/// Returns a [WriteError] if a key or value contains a structural character
/// or a list is empty.
///
/// # Example
/// ```
/// use beast_comments::model::{AnnotationMap, AnnotationValue};
/// use beast_comments::writer::to_comment;
///
/// let mut annotations = AnnotationMap::new();
/// annotations.insert("rate", "0.5");
/// annotations.insert("height_95%_HPD", AnnotationValue::list(["1.2", "3.4"]));
///
/// assert_eq!(to_comment(&annotations).unwrap(), "&height_95%_HPD={1.2,3.4},rate=0.5,");
/// ```
pub fn to_comment(annotations: &AnnotationMap) -> Result<String, WriteError> {
    let mut pairs: Vec<_> = annotations.iter().collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut comment = String::from("&");
    for (key, value) in pairs {
        push_token(&mut comment, key)?;
        comment.push('=');
        match value {
            AnnotationValue::Scalar(value) => push_token(&mut comment, value)?,
            AnnotationValue::List(values) => {
                if values.is_empty() {
                    return Err(WriteError::EmptyList(key.to_string()));
                }
                comment.push('{');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        comment.push(',');
                    }
                    push_token(&mut comment, value)?;
                }
                comment.push('}');
            }
        }
        comment.push(',');
    }

    Ok(comment)
}

fn push_token(comment: &mut String, token: &str) -> Result<(), WriteError> {
    if !is_bare_token(token) {
        return Err(WriteError::StructuralCharacter(token.to_string()));
    }
    if token.is_empty() {
        comment.push_str("\"\"");
    } else {
        comment.push_str(token);
    }
    Ok(())
}
