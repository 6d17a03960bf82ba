//! Text form of a configuration group.
//!
//! A document mirrors the module / param / parameterset layout of the router's
//! config files:
//!
//! ```yaml
//! name: swissRailRaptor
//! params:
//!   useRangeQuery: true
//! parameterSets:
//!   - type: rangeQuerySettings
//!     params:
//!       subpopulations: commuters,students
//!       maxEarlierDeparture_sec: 300
//! ```
//!
//! Reading a document goes through the same public path as any other loader:
//! create each set from its type tag, set its parameters from text, then add
//! it. Writing emits the root parameters and then every parameter set in
//! registry order, each parameter in declaration order.

use crate::config::group::ParameterGroup;
use crate::config::raptor::RaptorConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A configuration group as read from or written to YAML.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ConfigDocument, RaptorConfig};
///
/// let yaml = r#"
/// name: swissRailRaptor
/// params:
///   useModeMappingForPassengers: true
/// parameterSets:
///   - type: modeMapping
///     params:
///       routeMode: rail
///       passengerMode: pt
/// "#;
///
/// let document = ConfigDocument::from_yaml_str(yaml).unwrap();
/// let config = RaptorConfig::from_document(&document).unwrap();
/// assert!(config.use_mode_mapping_for_passengers());
/// assert!(config.mode_mapping_for_passengers("rail").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Name of the configuration group.
    pub name: String,

    /// Root parameters, keyed by parameter name.
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub params: Mapping,

    /// Nested parameter sets in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameter_sets: Vec<ParameterSetDocument>,
}

/// One parameter set inside a [`ConfigDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSetDocument {
    /// Type tag of the parameter set.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Parameters of the set, keyed by parameter name.
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub params: Mapping,
}

impl ConfigDocument {
    /// Parses a document from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] if the YAML is invalid or has unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the document to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<&RaptorConfig> for ConfigDocument {
    fn from(config: &RaptorConfig) -> Self {
        Self {
            name: RaptorConfig::GROUP_NAME.to_string(),
            params: params_to_mapping(config),
            parameter_sets: config
                .parameter_sets()
                .map(|set| ParameterSetDocument {
                    type_tag: set.type_tag().to_string(),
                    params: params_to_mapping(set),
                })
                .collect(),
        }
    }
}

impl RaptorConfig {
    /// Builds a configuration from a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedGroup`] if the document is for another group,
    /// [`Error::UnsupportedVariant`] for an unknown parameter-set type,
    /// [`Error::UnknownParameter`] or [`Error::MalformedScalar`] for bad
    /// parameters, and [`Error::MissingParameter`] for a mode mapping without
    /// a route mode.
    pub fn from_document(document: &ConfigDocument) -> Result<Self> {
        if document.name != Self::GROUP_NAME {
            return Err(Error::UnexpectedGroup {
                expected: Self::GROUP_NAME,
                found: document.name.clone(),
            });
        }

        let mut config = Self::new();
        apply_params(&mut config, &document.params)?;

        for set_document in &document.parameter_sets {
            let mut set = Self::create_parameter_set(&set_document.type_tag)?;
            apply_params(&mut set, &set_document.params)?;
            config.add_parameter_set(set)?;
        }

        Ok(config)
    }

    /// Writes this configuration as a document.
    #[must_use]
    pub fn to_document(&self) -> ConfigDocument {
        ConfigDocument::from(self)
    }
}

fn params_to_mapping(group: &dyn ParameterGroup) -> Mapping {
    group
        .params()
        .into_iter()
        .map(|(key, text)| (Value::from(key), Value::from(text)))
        .collect()
}

fn apply_params(group: &mut dyn ParameterGroup, params: &Mapping) -> Result<()> {
    for (key, value) in params {
        let key = key.as_str().ok_or_else(|| Error::Validation {
            field: group.group_name().to_string(),
            message: format!("parameter names must be strings, found {key:?}"),
        })?;
        if value.is_null() {
            group.set_null(key)?;
        } else {
            group.set_value(key, &value_to_text(key, value)?)?;
        }
    }
    Ok(())
}

/// Converts a YAML scalar to parameter text. Sequences are comma-joined so
/// list parameters may be written either way; a null item is an empty entry.
fn value_to_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Sequence(items) => Ok(items
            .iter()
            .map(|item| value_to_text(key, item))
            .collect::<Result<Vec<_>>>()?
            .join(",")),
        Value::Mapping(_) | Value::Tagged(_) => Err(Error::Validation {
            field: key.to_string(),
            message: "expected a scalar value".to_string(),
        }),
    }
}
