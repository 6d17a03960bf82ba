//! Root `swissRailRaptor` configuration group.

use crate::config::group::{unknown_parameter, ParameterGroup};
use crate::config::intermodal::IntermodalAccessEgress;
use crate::config::mode_mapping::ModeMapping;
use crate::config::parameter_set::ParameterSet;
use crate::config::range_query::RangeQuerySettings;
use crate::config::registry::{ParameterSetId, ParameterSetRegistry};
use crate::config::scalar::ScalarField;
use crate::error::Result;

const PARAM_USE_RANGE_QUERY: &str = "useRangeQuery";
const PARAM_USE_INTERMODAL_ACCESS_EGRESS: &str = "useIntermodalAccessEgress";
const PARAM_USE_MODE_MAPPING: &str = "useModeMappingForPassengers";
const PARAM_TRANSFER_PENALTY_FACTOR: &str = "transferPenaltyTravelTimeToCostFactor";

/// Settings for the SwissRailRaptor transit router.
///
/// Holds the router's feature switches plus the registry of range-query,
/// intermodal and mode-mapping parameter sets. The value is built once during
/// setup and handed to the router by reference.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ModeMapping, ParameterGroup, RaptorConfig};
///
/// let mut config = RaptorConfig::new();
/// config.set_value("useModeMappingForPassengers", "true").unwrap();
///
/// let mut set = RaptorConfig::create_parameter_set("modeMapping").unwrap();
/// set.set_value("routeMode", "rail").unwrap();
/// set.set_value("passengerMode", "pt").unwrap();
/// config.add_parameter_set(set).unwrap();
///
/// assert!(config.use_mode_mapping_for_passengers());
/// assert_eq!(
///     config.mode_mapping_for_passengers("rail"),
///     Some(&ModeMapping::new("rail", "pt"))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RaptorConfig {
    use_range_query: ScalarField<bool>,
    use_intermodal_access_egress: ScalarField<bool>,
    use_mode_mapping: ScalarField<bool>,
    transfer_penalty_factor: ScalarField<f64>,
    registry: ParameterSetRegistry,
}

impl RaptorConfig {
    /// Name of the configuration group.
    pub const GROUP_NAME: &'static str = "swissRailRaptor";

    /// Creates a configuration with every feature disabled and no parameter sets.
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_range_query: ScalarField::new(PARAM_USE_RANGE_QUERY, false),
            use_intermodal_access_egress: ScalarField::new(
                PARAM_USE_INTERMODAL_ACCESS_EGRESS,
                false,
            ),
            use_mode_mapping: ScalarField::new(PARAM_USE_MODE_MAPPING, false),
            transfer_penalty_factor: ScalarField::new(PARAM_TRANSFER_PENALTY_FACTOR, 0.0),
            registry: ParameterSetRegistry::new(),
        }
    }

    /// Returns true if range queries are enabled.
    #[must_use]
    pub fn use_range_query(&self) -> bool {
        *self.use_range_query.get()
    }

    /// Enables or disables range queries.
    pub fn set_use_range_query(&mut self, enabled: bool) {
        self.use_range_query.set(enabled);
    }

    /// Returns true if intermodal access and egress is enabled.
    #[must_use]
    pub fn use_intermodal_access_egress(&self) -> bool {
        *self.use_intermodal_access_egress.get()
    }

    /// Enables or disables intermodal access and egress.
    pub fn set_use_intermodal_access_egress(&mut self, enabled: bool) {
        self.use_intermodal_access_egress.set(enabled);
    }

    /// Returns true if passenger mode mapping is enabled.
    #[must_use]
    pub fn use_mode_mapping_for_passengers(&self) -> bool {
        *self.use_mode_mapping.get()
    }

    /// Enables or disables passenger mode mapping.
    pub fn set_use_mode_mapping_for_passengers(&mut self, enabled: bool) {
        self.use_mode_mapping.set(enabled);
    }

    /// Returns the factor converting transfer travel time into a cost penalty.
    #[must_use]
    pub fn transfer_penalty_travel_time_to_cost_factor(&self) -> f64 {
        *self.transfer_penalty_factor.get()
    }

    /// Sets the factor converting transfer travel time into a cost penalty.
    pub fn set_transfer_penalty_travel_time_to_cost_factor(&mut self, factor: f64) {
        self.transfer_penalty_factor.set(factor);
    }

    /// Creates an empty parameter set for a type tag.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnsupportedVariant`] for an unknown tag.
    pub fn create_parameter_set(type_tag: &str) -> Result<ParameterSet> {
        ParameterSet::create(type_tag)
    }

    /// Adds a parameter set of any variant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingParameter`] for a mode mapping without a
    /// route mode.
    pub fn add_parameter_set(&mut self, set: ParameterSet) -> Result<ParameterSetId> {
        self.registry.add(set)
    }

    /// Removes a parameter set by id.
    pub fn remove_parameter_set(&mut self, id: ParameterSetId) -> Option<ParameterSet> {
        self.registry.remove(id)
    }

    /// Adds range-query settings. Earlier settings left with no subpopulation
    /// key of their own are dropped.
    pub fn add_range_query_settings(&mut self, settings: RangeQuerySettings) -> ParameterSetId {
        self.registry.add_range_query(settings)
    }

    /// Returns the range-query settings filed under exactly this subpopulation;
    /// `None` asks for the default settings.
    #[must_use]
    pub fn range_query_settings(&self, subpopulation: Option<&str>) -> Option<&RangeQuerySettings> {
        self.registry.lookup_range_query(subpopulation)
    }

    /// Removes the range-query settings filed under this subpopulation.
    pub fn remove_range_query_settings(
        &mut self,
        subpopulation: Option<&str>,
    ) -> Option<RangeQuerySettings> {
        self.registry.remove_range_query(subpopulation)
    }

    /// Adds an intermodal access/egress entry.
    pub fn add_intermodal_access_egress(&mut self, entry: IntermodalAccessEgress) -> ParameterSetId {
        self.registry.add_intermodal(entry)
    }

    /// Returns every intermodal access/egress entry in insertion order.
    pub fn intermodal_access_egress_sets(
        &self,
    ) -> impl Iterator<Item = &IntermodalAccessEgress> + '_ {
        self.registry.all_intermodal()
    }

    /// Adds a mode mapping, replacing and dropping any mapping for the same
    /// route mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingParameter`] if the route mode is unset.
    pub fn add_mode_mapping_for_passengers(&mut self, mapping: ModeMapping) -> Result<ParameterSetId> {
        self.registry.add_mode_mapping(mapping)
    }

    /// Returns the mode mapping for this route mode.
    #[must_use]
    pub fn mode_mapping_for_passengers(&self, route_mode: &str) -> Option<&ModeMapping> {
        self.registry.lookup_mode_mapping(route_mode)
    }

    /// Returns every current mode mapping, ordered by route mode.
    pub fn all_mode_mappings(&self) -> impl Iterator<Item = &ModeMapping> + '_ {
        self.registry.all_mode_mappings()
    }

    /// Returns every parameter set in insertion order.
    pub fn parameter_sets(&self) -> impl Iterator<Item = &ParameterSet> + '_ {
        self.registry.iter().map(|(_, set)| set)
    }

    /// Returns the parameter-set registry.
    #[must_use]
    pub const fn registry(&self) -> &ParameterSetRegistry {
        &self.registry
    }
}

impl Default for RaptorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterGroup for RaptorConfig {
    fn group_name(&self) -> &'static str {
        Self::GROUP_NAME
    }

    fn param_names(&self) -> &'static [&'static str] {
        &[
            PARAM_USE_RANGE_QUERY,
            PARAM_USE_INTERMODAL_ACCESS_EGRESS,
            PARAM_USE_MODE_MAPPING,
            PARAM_TRANSFER_PENALTY_FACTOR,
        ]
    }

    fn get_value(&self, key: &str) -> Option<String> {
        match key {
            PARAM_USE_RANGE_QUERY => Some(self.use_range_query.format()),
            PARAM_USE_INTERMODAL_ACCESS_EGRESS => Some(self.use_intermodal_access_egress.format()),
            PARAM_USE_MODE_MAPPING => Some(self.use_mode_mapping.format()),
            PARAM_TRANSFER_PENALTY_FACTOR => Some(self.transfer_penalty_factor.format()),
            _ => None,
        }
    }

    fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        match key {
            PARAM_USE_RANGE_QUERY => self.use_range_query.set_from_str(raw),
            PARAM_USE_INTERMODAL_ACCESS_EGRESS => {
                self.use_intermodal_access_egress.set_from_str(raw)
            }
            PARAM_USE_MODE_MAPPING => self.use_mode_mapping.set_from_str(raw),
            PARAM_TRANSFER_PENALTY_FACTOR => self.transfer_penalty_factor.set_from_str(raw),
            _ => Err(unknown_parameter(Self::GROUP_NAME, key)),
        }
    }

    fn set_null(&mut self, key: &str) -> Result<()> {
        match key {
            PARAM_USE_RANGE_QUERY => self.use_range_query.set_null(),
            PARAM_USE_INTERMODAL_ACCESS_EGRESS => self.use_intermodal_access_egress.set_null(),
            PARAM_USE_MODE_MAPPING => self.use_mode_mapping.set_null(),
            PARAM_TRANSFER_PENALTY_FACTOR => self.transfer_penalty_factor.set_null(),
            _ => Err(unknown_parameter(Self::GROUP_NAME, key)),
        }
    }
}
