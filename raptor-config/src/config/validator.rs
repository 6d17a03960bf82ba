//! Configuration validation.
//!
//! Setters and the registry accept any value of the right type. This module
//! checks the value ranges and cross-field rules the router relies on, once
//! setup is finished.

use crate::config::intermodal::IntermodalAccessEgress;
use crate::config::mode_mapping::ModeMapping;
use crate::config::raptor::RaptorConfig;
use crate::error::{Error, Result};

/// Validates a finished configuration.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ConfigValidator, RaptorConfig};
///
/// let config = RaptorConfig::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &RaptorConfig) -> Result<()> {
        Self::validate_non_negative(
            "transferPenaltyTravelTimeToCostFactor",
            config.transfer_penalty_travel_time_to_cost_factor(),
        )?;

        for (i, entry) in config.intermodal_access_egress_sets().enumerate() {
            Self::validate_intermodal(i, entry)?;
        }

        for mapping in config.all_mode_mappings() {
            Self::validate_mode_mapping(mapping)?;
        }

        Self::check_enabled_features(config)
    }

    /// Validate one intermodal access/egress entry.
    ///
    /// Ensures the mode is set, the radius is a finite non-negative distance,
    /// and a filter attribute always comes with a filter value.
    fn validate_intermodal(index: usize, entry: &IntermodalAccessEgress) -> Result<()> {
        let field = |name: &str| format!("{}[{index}].{name}", IntermodalAccessEgress::TYPE);

        match entry.mode() {
            Some(mode) if !mode.trim().is_empty() => {}
            _ => {
                return Err(Error::Validation {
                    field: field("mode"),
                    message: "Mode must be set".into(),
                });
            }
        }

        Self::validate_non_negative(&field("radius"), entry.radius())?;

        if entry.filter_attribute().is_some() && entry.filter_value().is_none() {
            return Err(Error::Validation {
                field: field("filterValue"),
                message: "Required when filterAttribute is set".into(),
            });
        }

        Ok(())
    }

    fn validate_mode_mapping(mapping: &ModeMapping) -> Result<()> {
        let route_mode = mapping.route_mode().unwrap_or_default();
        match mapping.passenger_mode() {
            Some(mode) if !mode.trim().is_empty() => Ok(()),
            _ => Err(Error::Validation {
                field: format!("{}[{route_mode}].passengerMode", ModeMapping::TYPE),
                message: "Passenger mode must be set".into(),
            }),
        }
    }

    fn validate_non_negative(field: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be a finite number, got {value}"),
            });
        }
        if value < 0.0 {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be >= 0, got {value}"),
            });
        }
        Ok(())
    }

    /// Switched-on features need parameter sets to act on. Intermodal routing
    /// without a single access mode is an error; the other features only warn.
    fn check_enabled_features(config: &RaptorConfig) -> Result<()> {
        if config.use_intermodal_access_egress()
            && config.intermodal_access_egress_sets().next().is_none()
        {
            return Err(Error::Validation {
                field: "useIntermodalAccessEgress".into(),
                message: "Enabled but no intermodalAccessEgress parameter set is configured"
                    .into(),
            });
        }

        if config.use_range_query() && config.registry().all_range_queries().next().is_none() {
            log::warn!("useRangeQuery is enabled but no rangeQuerySettings are configured");
        }

        if config.use_mode_mapping_for_passengers() && config.all_mode_mappings().next().is_none() {
            log::warn!("useModeMappingForPassengers is enabled but no modeMapping is configured");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParameterGroup, RangeQuerySettings};

    fn walk(radius: f64) -> IntermodalAccessEgress {
        let mut entry = IntermodalAccessEgress::new();
        entry.set_mode("walk");
        entry.set_radius(radius);
        entry
    }

    fn assert_validation_field(config: &RaptorConfig, expected_field: &str) {
        match ConfigValidator::validate(config) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected validation error for {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        ConfigValidator::validate(&RaptorConfig::default()).unwrap();
    }

    #[test]
    fn test_negative_transfer_penalty() {
        let mut config = RaptorConfig::new();
        config.set_transfer_penalty_travel_time_to_cost_factor(-1.0);
        assert_validation_field(&config, "transferPenaltyTravelTimeToCostFactor");
    }

    #[test]
    fn test_non_finite_transfer_penalty() {
        let mut config = RaptorConfig::new();
        config.set_transfer_penalty_travel_time_to_cost_factor(f64::NAN);
        assert_validation_field(&config, "transferPenaltyTravelTimeToCostFactor");
    }

    #[test]
    fn test_intermodal_without_mode() {
        let mut config = RaptorConfig::new();
        config.add_intermodal_access_egress(walk(500.0));
        config.add_intermodal_access_egress(IntermodalAccessEgress::new());
        assert_validation_field(&config, "intermodalAccessEgress[1].mode");
    }

    #[test]
    fn test_intermodal_negative_radius() {
        let mut config = RaptorConfig::new();
        config.add_intermodal_access_egress(walk(-10.0));
        assert_validation_field(&config, "intermodalAccessEgress[0].radius");
    }

    #[test]
    fn test_intermodal_filter_without_value() {
        let mut config = RaptorConfig::new();
        let mut entry = walk(500.0);
        entry.set_value("filterAttribute", "stopType").unwrap();
        config.add_intermodal_access_egress(entry);
        assert_validation_field(&config, "intermodalAccessEgress[0].filterValue");
    }

    #[test]
    fn test_mode_mapping_without_passenger_mode() {
        let mut config = RaptorConfig::new();
        let mut mapping = ModeMapping::default();
        mapping.set_route_mode("ferry");
        config.add_mode_mapping_for_passengers(mapping).unwrap();
        assert_validation_field(&config, "modeMapping[ferry].passengerMode");
    }

    #[test]
    fn test_intermodal_enabled_without_sets() {
        let mut config = RaptorConfig::new();
        config.set_use_intermodal_access_egress(true);
        assert_validation_field(&config, "useIntermodalAccessEgress");

        config.add_intermodal_access_egress(walk(1000.0));
        ConfigValidator::validate(&config).unwrap();
    }

    #[test]
    fn test_other_features_enabled_without_sets_only_warn() {
        let mut config = RaptorConfig::new();
        config.set_use_range_query(true);
        config.set_use_mode_mapping_for_passengers(true);
        ConfigValidator::validate(&config).unwrap();

        config.add_range_query_settings(RangeQuerySettings::new());
        config
            .add_mode_mapping_for_passengers(ModeMapping::new("rail", "pt"))
            .unwrap();
        ConfigValidator::validate(&config).unwrap();
    }
}
