//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for parameter sets and helpers for
//! locating the YAML fixtures under `tests/fixtures`.

use std::path::PathBuf;

use raptor_config::{IntermodalAccessEgress, ModeMapping, RangeQuerySettings};

/// Path to a file under `tests/fixtures`.
#[allow(dead_code)]
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Range-query settings for the given subpopulations and departure window.
#[allow(dead_code)]
pub fn range_query(subpopulations: &[&str], earlier: u32, later: u32) -> RangeQuerySettings {
    let mut settings = RangeQuerySettings::new().with_subpopulations(subpopulations.iter().copied());
    settings.set_max_earlier_departure(earlier);
    settings.set_max_later_departure(later);
    settings
}

/// Builder for intermodal access/egress entries with sensible defaults.
#[allow(dead_code)]
pub struct IntermodalFixture {
    mode: String,
    radius: f64,
    subpopulations: Vec<String>,
    filter: Option<(String, String)>,
}

#[allow(dead_code)]
impl IntermodalFixture {
    /// Creates a walk entry with a 1000 m radius.
    pub fn new() -> Self {
        Self {
            mode: "walk".to_string(),
            radius: 1000.0,
            subpopulations: Vec::new(),
            filter: None,
        }
    }

    /// Sets the mode.
    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = mode.to_string();
        self
    }

    /// Sets the radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Restricts the entry to one more subpopulation.
    pub fn with_subpopulation(mut self, subpopulation: &str) -> Self {
        self.subpopulations.push(subpopulation.to_string());
        self
    }

    /// Adds a stop filter.
    pub fn with_filter(mut self, attribute: &str, value: &str) -> Self {
        self.filter = Some((attribute.to_string(), value.to_string()));
        self
    }

    /// Builds the entry.
    pub fn build(self) -> IntermodalAccessEgress {
        let mut entry = IntermodalAccessEgress::new();
        entry.set_mode(self.mode);
        entry.set_radius(self.radius);
        entry.set_subpopulations(self.subpopulations);
        if let Some((attribute, value)) = self.filter {
            entry.set_filter(attribute, value);
        }
        entry
    }
}

/// A mode mapping.
#[allow(dead_code)]
pub fn mode_mapping(route_mode: &str, passenger_mode: &str) -> ModeMapping {
    ModeMapping::new(route_mode, passenger_mode)
}
