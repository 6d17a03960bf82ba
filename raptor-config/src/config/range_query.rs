//! Range-query settings parameter set.

use crate::config::group::{unknown_parameter, ParameterGroup};
use crate::config::scalar::{list_entries, ScalarField};
use crate::error::Result;
use std::collections::BTreeSet;

const PARAM_SUBPOPS: &str = "subpopulations";
const PARAM_MAX_EARLIER_DEPARTURE: &str = "maxEarlierDeparture_sec";
const PARAM_MAX_LATER_DEPARTURE: &str = "maxLaterDeparture_sec";

/// Departure window for range queries, scoped to a set of subpopulations.
///
/// An empty subpopulation set means the settings apply to everyone; the
/// registry files them under the default key.
///
/// # Examples
///
/// ```
/// use raptor_config::config::RangeQuerySettings;
///
/// let settings = RangeQuerySettings::new().with_subpopulations(["commuters", "students"]);
/// assert!(!settings.applies_to_all());
/// assert_eq!(settings.max_earlier_departure(), 600);
/// assert_eq!(settings.max_later_departure(), 900);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuerySettings {
    subpopulations: ScalarField<BTreeSet<String>>,
    max_earlier_departure: ScalarField<u32>,
    max_later_departure: ScalarField<u32>,
}

impl RangeQuerySettings {
    /// Type discriminator of this parameter set.
    pub const TYPE: &'static str = "rangeQuerySettings";

    /// Creates settings that apply to all subpopulations with the default window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subpopulations: ScalarField::new(PARAM_SUBPOPS, BTreeSet::new()),
            max_earlier_departure: ScalarField::new(PARAM_MAX_EARLIER_DEPARTURE, 600),
            max_later_departure: ScalarField::new(PARAM_MAX_LATER_DEPARTURE, 900),
        }
    }

    /// Returns these settings restricted to the given subpopulations.
    #[must_use]
    pub fn with_subpopulations<I, S>(mut self, subpopulations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_subpopulations(subpopulations);
        self
    }

    /// Returns the subpopulations these settings apply to.
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

    /// Returns true if no subpopulation is named.
    #[must_use]
    pub fn applies_to_all(&self) -> bool {
        self.subpopulations.get().is_empty()
    }

    /// Seconds a departure may be moved earlier.
    #[must_use]
    pub fn max_earlier_departure(&self) -> u32 {
        *self.max_earlier_departure.get()
    }

    /// Sets the seconds a departure may be moved earlier.
    pub fn set_max_earlier_departure(&mut self, seconds: u32) {
        self.max_earlier_departure.set(seconds);
    }

    /// Seconds a departure may be moved later.
    #[must_use]
    pub fn max_later_departure(&self) -> u32 {
        *self.max_later_departure.get()
    }

    /// Sets the seconds a departure may be moved later.
    pub fn set_max_later_departure(&mut self, seconds: u32) {
        self.max_later_departure.set(seconds);
    }
}

impl Default for RangeQuerySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterGroup for RangeQuerySettings {
    fn group_name(&self) -> &'static str {
        Self::TYPE
    }

    fn param_names(&self) -> &'static [&'static str] {
        &[
            PARAM_SUBPOPS,
            PARAM_MAX_EARLIER_DEPARTURE,
            PARAM_MAX_LATER_DEPARTURE,
        ]
    }

    fn get_value(&self, key: &str) -> Option<String> {
        match key {
            PARAM_SUBPOPS => Some(self.subpopulations.format()),
            PARAM_MAX_EARLIER_DEPARTURE => Some(self.max_earlier_departure.format()),
            PARAM_MAX_LATER_DEPARTURE => Some(self.max_later_departure.format()),
            _ => None,
        }
    }

    fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        match key {
            PARAM_SUBPOPS => self.subpopulations.set_from_str(raw),
            PARAM_MAX_EARLIER_DEPARTURE => self.max_earlier_departure.set_from_str(raw),
            PARAM_MAX_LATER_DEPARTURE => self.max_later_departure.set_from_str(raw),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }

    fn set_null(&mut self, key: &str) -> Result<()> {
        match key {
            PARAM_SUBPOPS => self.subpopulations.set_null(),
            PARAM_MAX_EARLIER_DEPARTURE => self.max_earlier_departure.set_null(),
            PARAM_MAX_LATER_DEPARTURE => self.max_later_departure.set_null(),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }
}
