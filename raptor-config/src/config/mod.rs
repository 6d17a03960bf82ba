//! Configuration model for the SwissRailRaptor transit router.
//!
//! This module provides the `swissRailRaptor` configuration group:
//! - Typed scalar parameters with an exact text form ([`ScalarField`])
//! - Three parameter-set variants ([`RangeQuerySettings`],
//!   [`IntermodalAccessEgress`], [`ModeMapping`]) built from their type tag
//!   ([`ParameterSet::create`])
//! - A registry that owns all parameter sets and keeps one lookup index per
//!   variant family ([`ParameterSetRegistry`])
//! - The root group with typed accessors ([`RaptorConfig`])
//! - YAML documents, file loading and validation
//!
//! # Examples
//!
//! Building a configuration in code:
//!
//! ```
//! use raptor_config::config::{RangeQuerySettings, RaptorConfig};
//!
//! let mut config = RaptorConfig::new();
//! config.set_use_range_query(true);
//! config.add_range_query_settings(RangeQuerySettings::new());
//! config.add_range_query_settings(
//!     RangeQuerySettings::new().with_subpopulations(["commuters"]),
//! );
//!
//! // Lookups are exact: the default settings live under `None` only.
//! assert!(config.range_query_settings(None).is_some());
//! assert!(config.range_query_settings(Some("commuters")).is_some());
//! assert!(config.range_query_settings(Some("students")).is_none());
//! ```
//!
//! Loading from YAML:
//!
//! ```
//! use raptor_config::config::{ConfigLoader, ConfigValidator};
//!
//! let config = ConfigLoader::load_str(
//!     "name: swissRailRaptor\nparams:\n  transferPenaltyTravelTimeToCostFactor: 0.5\n",
//! )
//! .unwrap();
//! ConfigValidator::validate(&config).unwrap();
//! assert_eq!(config.transfer_penalty_travel_time_to_cost_factor(), 0.5);
//! ```

pub mod document;
pub mod group;
pub mod intermodal;
pub mod loader;
pub mod mode_mapping;
pub mod parameter_set;
pub mod range_query;
pub mod raptor;
pub mod registry;
pub mod scalar;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use document::{ConfigDocument, ParameterSetDocument};
pub use group::ParameterGroup;
pub use intermodal::IntermodalAccessEgress;
pub use loader::ConfigLoader;
pub use mode_mapping::ModeMapping;
pub use parameter_set::{ParameterSet, ParameterSetType};
pub use range_query::RangeQuerySettings;
pub use raptor::RaptorConfig;
pub use registry::{ParameterSetId, ParameterSetRegistry};
pub use scalar::{ScalarField, ScalarValue};
pub use validator::ConfigValidator;
