//! Configuration of an [AnnotationExtractor](crate::extract::AnnotationExtractor).

use std::convert::Infallible;
use std::str::FromStr;

/// Keyword selecting all annotation keys in [ValueSelection::from_str].
pub const ALL_VALUES: &str = "ALL";

// =#========================================================================#=
// VALUE SELECTION
// =#========================================================================#=
/// Which annotation keys of each comment to put into the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueSelection {
    /// Every key of every comment.
    #[default]
    All,
    /// Only the listed keys; keys missing from a comment are skipped.
    Only(Vec<String>),
}

impl ValueSelection {
    /// Selects only the given keys.
    pub fn only<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueSelection::Only(keys.into_iter().map(Into::into).collect())
    }

    /// Returns whether the given key is selected.
    pub fn includes(&self, key: &str) -> bool {
        match self {
            ValueSelection::All => true,
            ValueSelection::Only(keys) => keys.iter().any(|k| k == key),
        }
    }
}

/// Parses `ALL` or a comma-separated list of keys, e.g. `height,rate`.
///
/// # Example
/// ```
/// use beast_comments::extract::ValueSelection;
///
/// let all: ValueSelection = "ALL".parse().unwrap();
/// assert_eq!(all, ValueSelection::All);
///
/// let some: ValueSelection = "height_median, rate".parse().unwrap();
/// assert_eq!(some, ValueSelection::only(["height_median", "rate"]));
/// ```
impl FromStr for ValueSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_VALUES {
            return Ok(ValueSelection::All);
        }
        Ok(ValueSelection::Only(
            s.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from)
                .collect(),
        ))
    }
}

// =#========================================================================#=
// ERROR POLICY
// =#========================================================================#=
/// What to do when a comment fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return the error to the caller. The table keeps all earlier rows.
    #[default]
    Abort,
    /// Log a warning, remember the row label and continue.
    Skip,
}

// =#========================================================================#=
// EXTRACT CONFIG
// =#========================================================================#=
/// Configuration for turning vertex comments into a [Table](crate::model::Table).
///
/// # Configuration
/// * **Values**: which keys to report (default: all)
///   - [`with_values()`](ExtractConfig::with_values)
/// * **Errors**: abort on malformed comments or skip them (default: abort)
///   - [`with_error_policy()`](ExtractConfig::with_error_policy)
/// * **Set pivot**: run [transform_sets](crate::model::transform_sets)
///   once when finishing (default: on)
///   - [`with_set_transform()`](ExtractConfig::with_set_transform)
/// * **Missing cells**: text written for absent cells (default: empty)
///   - [`with_not_available()`](ExtractConfig::with_not_available)
///
/// # Example
/// ```
/// use beast_comments::extract::{ErrorPolicy, ExtractConfig, ValueSelection};
///
/// let config = ExtractConfig::default()
///     .with_values(ValueSelection::only(["height_median", "posterior"]))
///     .with_error_policy(ErrorPolicy::Skip)
///     .with_not_available("NA");
///
/// assert_eq!(config.not_available(), "NA");
/// assert!(config.set_transform());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    values: ValueSelection,
    error_policy: ErrorPolicy,
    set_transform: bool,
    not_available: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            values: ValueSelection::All,
            error_policy: ErrorPolicy::Abort,
            set_transform: true,
            not_available: String::new(),
        }
    }
}

impl ExtractConfig {
    /// Sets which annotation keys are put into the table.
    pub fn with_values(mut self, values: ValueSelection) -> Self {
        self.values = values;
        self
    }

    /// Sets how comments that fail to parse are handled.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Sets whether indexed set families are pivoted when finishing.
    pub fn with_set_transform(mut self, set_transform: bool) -> Self {
        self.set_transform = set_transform;
        self
    }

    /// Sets the text written for cells absent from a row.
    pub fn with_not_available(mut self, not_available: impl Into<String>) -> Self {
        self.not_available = not_available.into();
        self
    }

    pub fn values(&self) -> &ValueSelection {
        &self.values
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_transform(&self) -> bool {
        self.set_transform
    }

    pub fn not_available(&self) -> &str {
        &self.not_available
    }
}
