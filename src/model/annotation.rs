//! Parsed annotations of a single tree vertex.
//!
//! Provides the [AnnotationMap] struct, which stores the key-value pairs of
//! one annotation comment. Values captured by [AnnotationValue] are either a
//! single string or an ordered list of strings.

use std::collections::HashMap;
use std::collections::hash_map;

// =#========================================================================#=
// ANNOTATION VALUE
// =#========================================================================#=
/// Enum to encapsulate a parsed annotation value.
///
/// Which variant a value is gets decided once, while parsing: a value
/// starting with `{` is a list, anything else a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    /// For single values, e.g. `height_median=47.57`
    Scalar(String),
    /// For brace-delimited lists, e.g. `height_95%_HPD={40.05,70.61}`
    List(Vec<String>),
}

impl AnnotationValue {
    /// Creates a [AnnotationValue::Scalar].
    pub fn scalar(value: impl Into<String>) -> Self {
        AnnotationValue::Scalar(value.into())
    }

    /// Creates a [AnnotationValue::List] from any sequence of strings.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnnotationValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns the scalar value, [None] for lists.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            AnnotationValue::Scalar(value) => Some(value),
            AnnotationValue::List(_) => None,
        }
    }

    /// Returns the list values, [None] for scalars.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnnotationValue::Scalar(_) => None,
            AnnotationValue::List(values) => Some(values),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, AnnotationValue::List(_))
    }
}

impl From<String> for AnnotationValue {
    fn from(v: String) -> Self {
        AnnotationValue::Scalar(v)
    }
}

impl From<&str> for AnnotationValue {
    fn from(v: &str) -> Self {
        AnnotationValue::Scalar(v.to_string())
    }
}

impl From<Vec<String>> for AnnotationValue {
    fn from(v: Vec<String>) -> Self {
        AnnotationValue::List(v)
    }
}

// =#========================================================================#=
// ANNOTATION MAP
// =#========================================================================#=
/// Key-value pairs of one annotation comment.
///
/// Keys are unique; inserting a key twice keeps the later value.
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationMap {
    annotations: HashMap<String, AnnotationValue>,
}

impl AnnotationMap {
    /// Creates a new empty [AnnotationMap].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an annotation, replacing any earlier value for the same key.
    ///
    /// # Returns
    /// The replaced value, if the key was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AnnotationValue>,
    ) -> Option<AnnotationValue> {
        self.annotations.insert(key.into(), value.into())
    }

    /// Returns the value for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.annotations.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.annotations.contains_key(key)
    }

    /// Number of annotations
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Iterator over all keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.annotations.keys().map(String::as_str)
    }

    /// Iterator over all key-value pairs (unordered).
    pub fn iter(&self) -> hash_map::Iter<'_, String, AnnotationValue> {
        self.annotations.iter()
    }
}

impl<'a> IntoIterator for &'a AnnotationMap {
    type Item = (&'a String, &'a AnnotationValue);
    type IntoIter = hash_map::Iter<'a, String, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}

impl IntoIterator for AnnotationMap {
    type Item = (String, AnnotationValue);
    type IntoIter = hash_map::IntoIter<String, AnnotationValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.into_iter()
    }
}

impl<K: Into<String>, V: Into<AnnotationValue>> FromIterator<(K, V)> for AnnotationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AnnotationMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
