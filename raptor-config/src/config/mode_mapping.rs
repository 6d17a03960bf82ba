//! Mode mapping for passengers parameter set.

use crate::config::group::{unknown_parameter, ParameterGroup};
use crate::config::scalar::ScalarField;
use crate::error::Result;

const PARAM_ROUTE_MODE: &str = "routeMode";
const PARAM_PASSENGER_MODE: &str = "passengerMode";

/// Maps the mode of a transit route to the mode reported for its passengers.
///
/// The route mode is the index key: the registry keeps one mapping per route
/// mode and a later mapping replaces an earlier one.
///
/// # Examples
///
/// ```
/// use raptor_config::config::ModeMapping;
///
/// let mapping = ModeMapping::new("rail", "pt");
/// assert_eq!(mapping.route_mode(), Some("rail"));
/// assert_eq!(mapping.passenger_mode(), Some("pt"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModeMapping {
    route_mode: ScalarField<Option<String>>,
    passenger_mode: ScalarField<Option<String>>,
}

impl ModeMapping {
    /// Type discriminator of this parameter set.
    pub const TYPE: &'static str = "modeMapping";

    /// Creates a mapping from `route_mode` to `passenger_mode`.
    #[must_use]
    pub fn new(route_mode: impl Into<String>, passenger_mode: impl Into<String>) -> Self {
        let mut mapping = Self::default();
        mapping.set_route_mode(route_mode);
        mapping.set_passenger_mode(passenger_mode);
        mapping
    }

    /// Returns the route mode, or `None` while unset.
    #[must_use]
    pub fn route_mode(&self) -> Option<&str> {
        self.route_mode.get().as_deref()
    }

    /// Sets the route mode.
    pub fn set_route_mode(&mut self, route_mode: impl Into<String>) {
        self.route_mode.set(Some(route_mode.into()));
    }

    /// Returns the passenger mode, or `None` while unset.
    #[must_use]
    pub fn passenger_mode(&self) -> Option<&str> {
        self.passenger_mode.get().as_deref()
    }

    /// Sets the passenger mode.
    pub fn set_passenger_mode(&mut self, passenger_mode: impl Into<String>) {
        self.passenger_mode.set(Some(passenger_mode.into()));
    }
}

impl Default for ModeMapping {
    fn default() -> Self {
        Self {
            route_mode: ScalarField::new(PARAM_ROUTE_MODE, None),
            passenger_mode: ScalarField::new(PARAM_PASSENGER_MODE, None),
        }
    }
}

impl ParameterGroup for ModeMapping {
    fn group_name(&self) -> &'static str {
        Self::TYPE
    }

    fn param_names(&self) -> &'static [&'static str] {
        &[PARAM_ROUTE_MODE, PARAM_PASSENGER_MODE]
    }

    fn get_value(&self, key: &str) -> Option<String> {
        match key {
            PARAM_ROUTE_MODE => Some(self.route_mode.format()),
            PARAM_PASSENGER_MODE => Some(self.passenger_mode.format()),
            _ => None,
        }
    }

    fn set_value(&mut self, key: &str, raw: &str) -> Result<()> {
        match key {
            PARAM_ROUTE_MODE => self.route_mode.set_from_str(raw),
            PARAM_PASSENGER_MODE => self.passenger_mode.set_from_str(raw),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }

    fn set_null(&mut self, key: &str) -> Result<()> {
        match key {
            PARAM_ROUTE_MODE => self.route_mode.set_null(),
            PARAM_PASSENGER_MODE => self.passenger_mode.set_null(),
            _ => Err(unknown_parameter(Self::TYPE, key)),
        }
    }
}
