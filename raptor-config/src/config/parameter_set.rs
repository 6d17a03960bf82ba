//! The closed set of parameter-set variants and the factory that builds them.

use crate::config::group::ParameterGroup;
use crate::config::intermodal::IntermodalAccessEgress;
use crate::config::mode_mapping::ModeMapping;
use crate::config::range_query::RangeQuerySettings;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Discriminator of a parameter-set variant.
///
/// # Examples
///
/// ```
/// use raptor_config::config::ParameterSetType;
///
/// let kind: ParameterSetType = "modeMapping".parse().unwrap();
/// assert_eq!(kind, ParameterSetType::ModeMapping);
/// assert_eq!(kind.to_string(), "modeMapping");
/// assert!("walkSettings".parse::<ParameterSetType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterSetType {
    /// `rangeQuerySettings`
    RangeQuerySettings,
    /// `intermodalAccessEgress`
    IntermodalAccessEgress,
    /// `modeMapping`
    ModeMapping,
}

impl ParameterSetType {
    /// Every known variant.
    pub const ALL: [Self; 3] = [
        Self::RangeQuerySettings,
        Self::IntermodalAccessEgress,
        Self::ModeMapping,
    ];

    /// Returns the type tag used in configuration text.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::RangeQuerySettings => RangeQuerySettings::TYPE,
            Self::IntermodalAccessEgress => IntermodalAccessEgress::TYPE,
            Self::ModeMapping => ModeMapping::TYPE,
        }
    }

    /// Creates an empty parameter set of this type.
    #[must_use]
    pub fn create(self) -> ParameterSet {
        match self {
            Self::RangeQuerySettings => ParameterSet::RangeQuery(RangeQuerySettings::new()),
            Self::IntermodalAccessEgress => {
                ParameterSet::IntermodalAccessEgress(IntermodalAccessEgress::new())
            }
            Self::ModeMapping => ParameterSet::ModeMapping(ModeMapping::default()),
        }
    }
}

impl fmt::Display for ParameterSetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for ParameterSetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| Error::UnsupportedVariant {
                type_tag: s.to_string(),
            })
    }
}

/// A parameter set of one of the known variants.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ParameterGroup, ParameterSet, ParameterSetType};
///
/// let mut set = ParameterSet::create("rangeQuerySettings").unwrap();
/// set.set_value("subpopulations", "commuters").unwrap();
/// assert_eq!(set.set_type(), ParameterSetType::RangeQuerySettings);
/// assert!(set.as_range_query().unwrap().subpopulations().contains("commuters"));
///
/// let err = ParameterSet::create("walkSettings").unwrap_err();
/// assert!(err.is_unsupported_variant());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterSet {
    /// Range-query departure window settings.
    RangeQuery(RangeQuerySettings),
    /// An intermodal access/egress mode.
    IntermodalAccessEgress(IntermodalAccessEgress),
    /// A route mode to passenger mode mapping.
    ModeMapping(ModeMapping),
}

impl ParameterSet {
    /// Creates an empty parameter set for a type tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVariant`] if the tag names no known variant.
    pub fn create(type_tag: &str) -> Result<Self> {
        Ok(type_tag.parse::<ParameterSetType>()?.create())
    }

    /// Returns the variant discriminator.
    #[must_use]
    pub const fn set_type(&self) -> ParameterSetType {
        match self {
            Self::RangeQuery(_) => ParameterSetType::RangeQuerySettings,
            Self::IntermodalAccessEgress(_) => ParameterSetType::IntermodalAccessEgress,
            Self::ModeMapping(_) => ParameterSetType::ModeMapping,
        }
    }

    /// Returns the type tag used in configuration text.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        self.set_type().tag()
    }

    /// Returns the range-query settings, if this is one.
    #[must_use]
    pub const fn as_range_query(&self) -> Option<&RangeQuerySettings> {
        match self {
            Self::RangeQuery(settings) => Some(settings),
            _ => None,
        }
    }

    /// Returns the intermodal access/egress entry, if this is one.
    #[must_use]
    pub const fn as_intermodal(&self) -> Option<&IntermodalAccessEgress> {
        match self {
            Self::IntermodalAccessEgress(entry) => Some(entry),
            _ => None,
        }
    }

    /// Returns the mode mapping, if this is one.
    #[must_use]
    pub const fn as_mode_mapping(&self) -> Option<&ModeMapping> {
        match self {
            Self::ModeMapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    fn group(&self) -> &dyn ParameterGroup {
        match self {
            Self::RangeQuery(settings) => settings,
            Self::IntermodalAccessEgress(entry) => entry,
            Self::ModeMapping(mapping) => mapping,
        }
    }

    fn group_mut(&mut self) -> &mut dyn ParameterGroup {
        match self {
            Self::RangeQuery(settings) => settings,
            Self::IntermodalAccessEgress(entry) => entry,
            Self::ModeMapping(mapping) => mapping,
        }
    }
}

impl ParameterGroup for ParameterSet {
    fn group_name(&self) -> &'static str {
        self.type_tag()
    }

    fn param_names(&self) -> &'static [&'static str] {
        self.group().param_names()
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.group().get_value(key)
    }

    fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        self.group_mut().set_value(key, raw)
    }

    fn set_null(&mut self, key: &str) -> Result<()> {
        self.group_mut().set_null(key)
    }

    fn comments(&self) -> BTreeMap<&'static str, &'static str> {
        self.group().comments()
    }
}

impl From<RangeQuerySettings> for ParameterSet {
    fn from(settings: RangeQuerySettings) -> Self {
        Self::RangeQuery(settings)
    }
}

impl From<IntermodalAccessEgress> for ParameterSet {
    fn from(entry: IntermodalAccessEgress) -> Self {
        Self::IntermodalAccessEgress(entry)
    }
}

impl From<ModeMapping> for ParameterSet {
    fn from(mapping: ModeMapping) -> Self {
        Self::ModeMapping(mapping)
    }
}
