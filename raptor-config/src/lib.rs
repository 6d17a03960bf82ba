#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # raptor-config
//!
//! Typed configuration for the SwissRailRaptor transit router.
//!
//! The `swissRailRaptor` group carries a few feature switches plus three
//! families of parameter sets, each identified by a type tag:
//!
//! - `rangeQuerySettings`: departure windows, filed per subpopulation
//! - `intermodalAccessEgress`: access and egress modes, kept as a list
//! - `modeMapping`: passenger modes, keyed by route mode
//!
//! ## Core Types
//!
//! - [`RaptorConfig`]: the root group and its typed accessors
//! - [`ParameterSet`] and [`ParameterSetRegistry`]: the variants and their indices
//! - [`ConfigLoader`] and [`ConfigValidator`]: YAML loading and validation
//! - [`Error`] and [`Result`]: Error handling types
//!
//! ## Examples
//!
//! ```
//! use raptor_config::{ModeMapping, RaptorConfig};
//!
//! let mut config = RaptorConfig::new();
//! config.add_mode_mapping_for_passengers(ModeMapping::new("rail", "pt")).unwrap();
//! config.add_mode_mapping_for_passengers(ModeMapping::new("rail", "car")).unwrap();
//!
//! let mapping = config.mode_mapping_for_passengers("rail").unwrap();
//! assert_eq!(mapping.passenger_mode(), Some("car"));
//! assert_eq!(config.all_mode_mappings().count(), 1);
//! ```

pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use config::{
    ConfigLoader, ConfigValidator, IntermodalAccessEgress, ModeMapping, ParameterGroup,
    ParameterSet, ParameterSetId, ParameterSetRegistry, ParameterSetType, RangeQuerySettings,
    RaptorConfig,
};
pub use error::{Error, Result};
