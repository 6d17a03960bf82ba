//! Error types for the raptor-config library.
//!
//! All failures are reported at the point of mutation or parse. Lookups that
//! find nothing are not errors; they return `None`.

use thiserror::Error;

/// Result type alias for operations that may fail with a raptor-config error.
///
/// # Examples
///
/// ```
/// use raptor_config::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(600)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the raptor-config library.
#[derive(Debug, Error)]
pub enum Error {
    /// A type discriminator names none of the known parameter-set variants.
    #[error("unsupported parameterset-type: {type_tag}")]
    UnsupportedVariant {
        /// The discriminator that was not recognized.
        type_tag: String,
    },

    /// Text could not be converted to the declared type of a parameter.
    #[error("malformed value for '{key}': '{raw}' is not a valid {expected}")]
    MalformedScalar {
        /// The parameter key being set.
        key: String,
        /// The raw text that failed to parse.
        raw: String,
        /// The name of the expected type.
        expected: &'static str,
    },

    /// A string setter was called with a key the group does not declare.
    #[error("unknown parameter '{key}' in group '{group}'")]
    UnknownParameter {
        /// The group that rejected the key.
        group: String,
        /// The undeclared key.
        key: String,
    },

    /// A required parameter is unset.
    #[error("missing required parameter '{key}' in group '{group}'")]
    MissingParameter {
        /// The group the parameter belongs to.
        group: String,
        /// The unset key.
        key: String,
    },

    /// A document names a root group other than the one this model owns.
    #[error("unexpected config group: expected '{expected}', found '{found}'")]
    UnexpectedGroup {
        /// The group name this model accepts.
        expected: &'static str,
        /// The group name found in the document.
        found: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration document could not be parsed or written.
    #[error("document error: {0}")]
    Document(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error was caused by an unknown parameter-set variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use raptor_config::Error;
    ///
    /// let err = Error::UnsupportedVariant { type_tag: "walkSettings".to_string() };
    /// assert!(err.is_unsupported_variant());
    /// ```
    #[must_use]
    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, Self::UnsupportedVariant { .. })
    }

    /// Check if error was caused by text that does not parse as its declared type.
    ///
    /// # Examples
    ///
    /// ```
    /// use raptor_config::Error;
    ///
    /// let err = Error::MalformedScalar {
    ///     key: "radius".to_string(),
    ///     raw: "far".to_string(),
    ///     expected: "double",
    /// };
    /// assert!(err.is_malformed_scalar());
    /// ```
    #[must_use]
    pub fn is_malformed_scalar(&self) -> bool {
        matches!(self, Self::MalformedScalar { .. })
    }
}
