//! String-keyed access to a configuration group.
//!
//! A config-file reader and writer only ever sees keys and text. This trait
//! is that view: the root group and every parameter-set variant expose their
//! scalar fields through it, alongside the documentation strings a host may
//! render as help output.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Key/text access to the parameters of one group.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ModeMapping, ParameterGroup};
///
/// let mut mapping = ModeMapping::default();
/// mapping.set_value("routeMode", "rail").unwrap();
/// mapping.set_value("passengerMode", "pt").unwrap();
///
/// assert_eq!(mapping.group_name(), "modeMapping");
/// assert_eq!(mapping.get_value("routeMode").as_deref(), Some("rail"));
/// assert!(mapping.set_value("networkMode", "car").is_err());
/// ```
pub trait ParameterGroup {
    /// Returns the group name (the type tag for parameter sets).
    fn group_name(&self) -> &'static str;

    /// Returns the declared parameter keys in declaration order.
    fn param_names(&self) -> &'static [&'static str];

    /// Returns the text form of a parameter, or `None` for an undeclared key.
    fn get_value(&self, key: &str) -> Option<String>;

    /// Parses text into a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] for an undeclared key, or
    /// [`Error::MalformedScalar`] if the text does not parse.
    fn set_value(&mut self, key: &str, raw: &str) -> Result<()>;

    /// Applies an empty (null) document entry to a parameter.
    ///
    /// Optional parameters become unset and list parameters become empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] for an undeclared key, or
    /// [`Error::MalformedScalar`] if the parameter has no null value.
    fn set_null(&mut self, key: &str) -> Result<()> {
        if self.param_names().contains(&key) {
            Err(Error::MalformedScalar {
                key: key.to_string(),
                raw: "null".to_string(),
                expected: "non-null value",
            })
        } else {
            Err(unknown_parameter(self.group_name(), key))
        }
    }

    /// Returns documentation strings keyed by parameter name.
    fn comments(&self) -> BTreeMap<&'static str, &'static str> {
        BTreeMap::new()
    }

    /// Returns the documentation string for one parameter, if any.
    fn comment(&self, key: &str) -> Option<&'static str> {
        self.comments().get(key).copied()
    }

    /// Returns every parameter as key/text pairs in declaration order.
    fn params(&self) -> Vec<(&'static str, String)> {
        self.param_names()
            .iter()
            .filter_map(|name| self.get_value(name).map(|value| (*name, value)))
            .collect()
    }
}

/// Builds the error for a key the group does not declare.
pub(crate) fn unknown_parameter(group: &str, key: &str) -> Error {
    Error::UnknownParameter {
        group: group.to_string(),
        key: key.to_string(),
    }
}
