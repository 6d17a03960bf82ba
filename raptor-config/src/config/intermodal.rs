//! Intermodal access/egress parameter set.

use crate::config::group::{unknown_parameter, ParameterGroup};
use crate::config::scalar::{list_entries, ScalarField};
use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};

const PARAM_SUBPOPS: &str = "subpopulations";
const PARAM_MODE: &str = "mode";
const PARAM_RADIUS: &str = "radius";
const PARAM_LINKID_ATTRIBUTE: &str = "linkIdAttribute";
const PARAM_FILTER_ATTRIBUTE: &str = "filterAttribute";
const PARAM_FILTER_VALUE: &str = "filterValue";

const COMMENT_SUBPOPS: &str = "Comma-separated list of names of subpopulations to which this mode is available. Leaving it empty applies to all agents.";
const COMMENT_FILTER_ATTRIBUTE: &str = "Name of the transit stop attribute used to filter stops that should be included in the set of potential stops for access and egress. The attribute should be of type String. 'null' disables the filter and all stops within the specified radius will be used.";
const COMMENT_FILTER_VALUE: &str = "Only stops where the filter attribute has the value specified here will be considered as access or egress stops.";
const COMMENT_LINKID_ATTRIBUTE: &str = "If the mode is routed on the network, specify which linkId acts as access link to this stop in the transport modes sub-network.";

/// A mode that may be used to reach or leave transit stops within a radius.
///
/// Entries have no key of their own: the registry keeps every one of them,
/// in insertion order, even when two are identical.
///
/// # Examples
///
/// ```
/// use raptor_config::config::IntermodalAccessEgress;
///
/// let mut bike = IntermodalAccessEgress::new();
/// bike.set_mode("bike");
/// bike.set_radius(3000.0);
/// bike.set_filter("bikeAccessible", "true");
///
/// assert_eq!(bike.mode(), Some("bike"));
/// assert_eq!(bike.filter_attribute(), Some("bikeAccessible"));
/// assert!(bike.subpopulations().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntermodalAccessEgress {
    subpopulations: ScalarField<BTreeSet<String>>,
    mode: ScalarField<Option<String>>,
    radius: ScalarField<f64>,
    link_id_attribute: ScalarField<Option<String>>,
    filter_attribute: ScalarField<Option<String>>,
    filter_value: ScalarField<Option<String>>,
}

impl IntermodalAccessEgress {
    /// Type discriminator of this parameter set.
    pub const TYPE: &'static str = "intermodalAccessEgress";

    /// Creates an entry with no mode, a zero radius and no stop filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subpopulations: ScalarField::new(PARAM_SUBPOPS, BTreeSet::new()),
            mode: ScalarField::new(PARAM_MODE, None),
            radius: ScalarField::new(PARAM_RADIUS, 0.0),
            link_id_attribute: ScalarField::new(PARAM_LINKID_ATTRIBUTE, None),
            filter_attribute: ScalarField::new(PARAM_FILTER_ATTRIBUTE, None),
            filter_value: ScalarField::new(PARAM_FILTER_VALUE, None),
        }
    }

    /// Returns the subpopulations this mode is available to; empty means all.
    #[must_use]
    pub fn subpopulations(&self) -> &BTreeSet<String> {
        self.subpopulations.get()
    }

    /// Replaces the subpopulation set.
    ///
    /// Entries are read like list text: each is split on commas and trimmed,
    /// and empty entries are dropped.
    pub fn set_subpopulations<I, S>(&mut self, subpopulations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.subpopulations.set(list_entries(subpopulations));
    }

    /// Returns the access/egress mode.
    #[must_use]
    pub fn mode(&self) -> Option<&str> {
        self.mode.get().as_deref()
    }

    /// Sets the access/egress mode.
    pub fn set_mode(&mut self, mode: impl Into<String>) {
        self.mode.set(Some(mode.into()));
    }

    /// Returns the search radius around the trip origin or destination.
    #[must_use]
    pub fn radius(&self) -> f64 {
        *self.radius.get()
    }

    /// Sets the search radius.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius.set(radius);
    }

    /// Returns the stop attribute naming the access link, if any.
    #[must_use]
    pub fn link_id_attribute(&self) -> Option<&str> {
        self.link_id_attribute.get().as_deref()
    }

    /// Sets the stop attribute naming the access link.
    pub fn set_link_id_attribute(&mut self, attribute: Option<String>) {
        self.link_id_attribute.set(attribute);
    }

    /// Returns the stop attribute used to filter candidate stops, if any.
    #[must_use]
    pub fn filter_attribute(&self) -> Option<&str> {
        self.filter_attribute.get().as_deref()
    }

    /// Returns the value the filter attribute must have, if any.
    #[must_use]
    pub fn filter_value(&self) -> Option<&str> {
        self.filter_value.get().as_deref()
    }

    /// Only consider stops whose `attribute` equals `value`.
    pub fn set_filter(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.filter_attribute.set(Some(attribute.into()));
        self.filter_value.set(Some(value.into()));
    }

    /// Removes the stop filter.
    pub fn clear_filter(&mut self) {
        self.filter_attribute.reset();
        self.filter_value.reset();
    }
}

impl Default for IntermodalAccessEgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterGroup for IntermodalAccessEgress {
    fn group_name(&self) -> &'static str {
        Self::TYPE
    }

    fn param_names(&self) -> &'static [&'static str] {
        &[
            PARAM_SUBPOPS,
            PARAM_MODE,
            PARAM_RADIUS,
            PARAM_LINKID_ATTRIBUTE,
            PARAM_FILTER_ATTRIBUTE,
            PARAM_FILTER_VALUE,
        ]
    }

    fn get_value(&self, key: &str) -> Option<String> {
        let text = match key {
            PARAM_SUBPOPS => self.subpopulations.format(),
            PARAM_MODE => self.mode.format(),
            PARAM_RADIUS => self.radius.format(),
            PARAM_LINKID_ATTRIBUTE => self.link_id_attribute.format(),
            PARAM_FILTER_ATTRIBUTE => self.filter_attribute.format(),
            PARAM_FILTER_VALUE => self.filter_value.format(),
            _ => return None,
        };
        Some(text)
    }

    fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        match key {
            PARAM_SUBPOPS => self.subpopulations.set_from_str(raw),
            PARAM_MODE => self.mode.set_from_str(raw),
            PARAM_RADIUS => self.radius.set_from_str(raw),
            PARAM_LINKID_ATTRIBUTE => self.link_id_attribute.set_from_str(raw),
            PARAM_FILTER_ATTRIBUTE => self.filter_attribute.set_from_str(raw),
            PARAM_FILTER_VALUE => self.filter_value.set_from_str(raw),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }

    fn set_null(&mut self, key: &str) -> Result<()> {
        match key {
            PARAM_SUBPOPS => self.subpopulations.set_null(),
            PARAM_MODE => self.mode.set_null(),
            PARAM_RADIUS => self.radius.set_null(),
            PARAM_LINKID_ATTRIBUTE => self.link_id_attribute.set_null(),
            PARAM_FILTER_ATTRIBUTE => self.filter_attribute.set_null(),
            PARAM_FILTER_VALUE => self.filter_value.set_null(),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }

    fn comments(&self) -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([
            (PARAM_SUBPOPS, COMMENT_SUBPOPS),
            (PARAM_FILTER_ATTRIBUTE, COMMENT_FILTER_ATTRIBUTE),
            (PARAM_FILTER_VALUE, COMMENT_FILTER_VALUE),
            (PARAM_LINKID_ATTRIBUTE, COMMENT_LINKID_ATTRIBUTE),
        ])
    }
}
