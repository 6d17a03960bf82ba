//! Typed scalar parameters and their text form.
//!
//! Every parameter of the configuration model is a [`ScalarField`]: a stable
//! key, a default, and a current value whose type knows how to turn itself
//! into text and back. The text form is locale-independent and total, so
//! `parse(format(v)) == v` for every value a field can hold.

use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// A value type that can be stored in a [`ScalarField`].
///
/// # Examples
///
/// ```
/// use raptor_config::config::ScalarValue;
///
/// assert_eq!(true.format_value(), "true");
/// assert_eq!(bool::parse_value("FALSE"), Some(false));
/// assert_eq!(0.0_f64.format_value(), "0.0");
/// assert_eq!(u32::parse_value("-1"), None);
/// ```
pub trait ScalarValue: Clone + PartialEq + std::fmt::Debug {
    /// Human-readable type name used in error messages.
    const TYPE_NAME: &'static str;

    /// Formats the value as configuration text.
    fn format_value(&self) -> String;

    /// Parses configuration text, returning `None` if it is not a valid value.
    fn parse_value(raw: &str) -> Option<Self>;

    /// The value an empty (null) document entry stands for, if the type has one.
    fn from_null() -> Option<Self> {
        None
    }
}

impl ScalarValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn parse_value(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl ScalarValue for u32 {
    const TYPE_NAME: &'static str = "non-negative integer";

    fn format_value(&self) -> String {
        self.to_string()
    }

    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl ScalarValue for f64 {
    const TYPE_NAME: &'static str = "double";

    fn format_value(&self) -> String {
        // Debug keeps a decimal point on integral values ("600.0") and is the
        // shortest text that parses back to the same bits.
        format!("{self:?}")
    }

    fn parse_value(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl ScalarValue for String {
    const TYPE_NAME: &'static str = "string";

    fn format_value(&self) -> String {
        self.clone()
    }

    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

/// Unset strings are written as the literal `null`, so the text `null` is
/// reserved and always reads back as `None`.
impl ScalarValue for Option<String> {
    const TYPE_NAME: &'static str = "string or null";

    fn format_value(&self) -> String {
        self.clone().unwrap_or_else(|| "null".to_string())
    }

    fn parse_value(raw: &str) -> Option<Self> {
        if raw == "null" {
            Some(None)
        } else {
            Some(Some(raw.to_string()))
        }
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }
}

/// Comma-joined in sorted order. Parsing trims every entry and drops empty
/// ones, so the empty string is the empty set.
impl ScalarValue for BTreeSet<String> {
    const TYPE_NAME: &'static str = "comma-separated list";

    fn format_value(&self) -> String {
        self.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    fn parse_value(raw: &str) -> Option<Self> {
        Some(list_entries([raw]))
    }

    fn from_null() -> Option<Self> {
        Some(Self::new())
    }
}

/// Collects list entries the way list text is parsed: every item is split on
/// commas, trimmed, and dropped if empty.
///
/// Typed setters for list fields go through this too, so a stored set always
/// survives formatting and parsing unchanged.
pub(crate) fn list_entries<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .flat_map(|item| {
            item.as_ref()
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// A named, typed option with a default value.
///
/// # Examples
///
/// ```
/// use raptor_config::config::ScalarField;
///
/// let mut field = ScalarField::new("maxEarlierDeparture_sec", 600_u32);
/// assert!(field.is_default());
///
/// field.set_from_str("1200").unwrap();
/// assert_eq!(*field.get(), 1200);
/// assert_eq!(field.format(), "1200");
///
/// let err = field.set_from_str("soon").unwrap_err();
/// assert!(err.is_malformed_scalar());
/// assert_eq!(*field.get(), 1200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField<T> {
    name: &'static str,
    value: T,
    default: T,
}

impl<T: ScalarValue> ScalarField<T> {
    /// Creates a field holding its default value.
    #[must_use]
    pub fn new(name: &'static str, default: T) -> Self {
        Self {
            name,
            value: default.clone(),
            default,
        }
    }

    /// Returns the parameter key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the current value.
    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the current value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns true if the current value equals the default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    /// Restores the default value.
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }

    /// Formats the current value as configuration text.
    #[must_use]
    pub fn format(&self) -> String {
        self.value.format_value()
    }

    /// Parses configuration text and stores it.
    ///
    /// The current value is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedScalar`] with this field's key and the raw
    /// text if the text is not a valid value of the field's type.
    pub fn set_from_str(&mut self, raw: &str) -> Result<()> {
        self.value = T::parse_value(raw).ok_or_else(|| Error::MalformedScalar {
            key: self.name.to_string(),
            raw: raw.to_string(),
            expected: T::TYPE_NAME,
        })?;
        Ok(())
    }

    /// Stores the value an empty document entry stands for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedScalar`] if the field's type has no null
    /// value, as for booleans and numbers.
    pub fn set_null(&mut self) -> Result<()> {
        self.value = T::from_null().ok_or_else(|| Error::MalformedScalar {
            key: self.name.to_string(),
            raw: "null".to_string(),
            expected: T::TYPE_NAME,
        })?;
        Ok(())
    }
}
