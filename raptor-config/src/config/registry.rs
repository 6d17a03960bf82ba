//! Parameter-set registry.
//!
//! The registry owns every parameter set in insertion order and keeps one
//! lookup index per variant family. Indices are updated in the same call
//! that changes the sequence, so both views agree whenever a method returns:
//!
//! - range-query settings are filed under each of their subpopulations, or
//!   under the default key (`None`) when they name none. One settings object
//!   may occupy several keys, and a later add takes over any key it touches.
//! - intermodal entries are kept as a plain list; duplicates are allowed.
//! - mode mappings are keyed by route mode; a later add replaces the earlier.
//!
//! A set that an add leaves unreachable from every key is dropped from the
//! sequence as well.

use crate::config::intermodal::IntermodalAccessEgress;
use crate::config::mode_mapping::ModeMapping;
use crate::config::parameter_set::ParameterSet;
use crate::config::range_query::RangeQuerySettings;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Handle to a parameter set owned by a registry.
///
/// Ids are assigned in increasing order and never reused by the registry
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParameterSetId(u64);

impl ParameterSetId {
    /// Returns the numeric id.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ParameterSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns all parameter sets and their per-family indices.
///
/// # Examples
///
/// ```
/// use raptor_config::config::{ModeMapping, ParameterSetRegistry, RangeQuerySettings};
///
/// let mut registry = ParameterSetRegistry::new();
/// registry.add_range_query(RangeQuerySettings::new().with_subpopulations(["commuters", "students"]));
/// registry.add_mode_mapping(ModeMapping::new("rail", "pt")).unwrap();
///
/// let commuters = registry.lookup_range_query(Some("commuters")).unwrap();
/// let students = registry.lookup_range_query(Some("students")).unwrap();
/// assert!(std::ptr::eq(commuters, students));
/// assert!(registry.lookup_range_query(None).is_none());
/// assert_eq!(registry.lookup_mode_mapping("rail").unwrap().passenger_mode(), Some("pt"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterSetRegistry {
    sets: BTreeMap<ParameterSetId, ParameterSet>,
    next_id: u64,
    range_query_by_subpop: BTreeMap<Option<String>, ParameterSetId>,
    intermodal: Vec<ParameterSetId>,
    mode_mapping_by_route_mode: BTreeMap<String, ParameterSetId>,
}

impl ParameterSetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter set and files it in its family index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] for a mode mapping without a route
    /// mode. The registry is unchanged on error.
    pub fn add(&mut self, set: ParameterSet) -> Result<ParameterSetId> {
        match set {
            ParameterSet::RangeQuery(settings) => Ok(self.add_range_query(settings)),
            ParameterSet::IntermodalAccessEgress(entry) => Ok(self.add_intermodal(entry)),
            ParameterSet::ModeMapping(mapping) => self.add_mode_mapping(mapping),
        }
    }

    /// Adds range-query settings under each of their subpopulations, or under
    /// the default key if they name none.
    ///
    /// Earlier settings whose every key is taken over are dropped from the
    /// registry, not only from the index.
    pub fn add_range_query(&mut self, settings: RangeQuerySettings) -> ParameterSetId {
        let id = self.allocate_id();
        let keys: Vec<Option<String>> = if settings.applies_to_all() {
            vec![None]
        } else {
            settings.subpopulations().iter().cloned().map(Some).collect()
        };

        let mut displaced = Vec::new();
        for key in keys {
            if let Some(previous) = self.range_query_by_subpop.insert(key.clone(), id) {
                log::warn!(
                    "range query settings {id} replace {previous} for subpopulation {}",
                    key.as_deref().unwrap_or("<default>")
                );
                displaced.push(previous);
            }
        }

        self.sets.insert(id, ParameterSet::RangeQuery(settings));
        log::debug!("Added {} parameter set {id}", RangeQuerySettings::TYPE);
        self.drop_unreachable(displaced);
        id
    }

    /// Appends an intermodal access/egress entry.
    pub fn add_intermodal(&mut self, entry: IntermodalAccessEgress) -> ParameterSetId {
        let id = self.allocate_id();
        self.intermodal.push(id);
        self.sets.insert(id, ParameterSet::IntermodalAccessEgress(entry));
        log::debug!("Added {} parameter set {id}", IntermodalAccessEgress::TYPE);
        id
    }

    /// Adds a mode mapping, replacing any mapping for the same route mode.
    /// The replaced mapping is dropped from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] if the route mode is unset.
    pub fn add_mode_mapping(&mut self, mapping: ModeMapping) -> Result<ParameterSetId> {
        let route_mode = mapping
            .route_mode()
            .ok_or_else(|| Error::MissingParameter {
                group: ModeMapping::TYPE.to_string(),
                key: "routeMode".to_string(),
            })?
            .to_string();

        let id = self.allocate_id();
        let previous = self
            .mode_mapping_by_route_mode
            .insert(route_mode.clone(), id);
        if let Some(previous) = previous {
            log::warn!("mode mapping {id} replaces {previous} for route mode {route_mode}");
        }

        self.sets.insert(id, ParameterSet::ModeMapping(mapping));
        log::debug!("Added {} parameter set {id}", ModeMapping::TYPE);
        self.drop_unreachable(previous);
        Ok(id)
    }

    /// Removes a parameter set from the sequence and from every index key
    /// that refers to it.
    pub fn remove(&mut self, id: ParameterSetId) -> Option<ParameterSet> {
        let set = self.sets.remove(&id)?;
        match &set {
            ParameterSet::RangeQuery(_) => self.range_query_by_subpop.retain(|_, v| *v != id),
            ParameterSet::IntermodalAccessEgress(_) => self.intermodal.retain(|v| *v != id),
            ParameterSet::ModeMapping(_) => self.mode_mapping_by_route_mode.retain(|_, v| *v != id),
        }
        log::debug!("Removed {} parameter set {id}", set.type_tag());
        Some(set)
    }

    /// Removes the range-query settings filed under `subpopulation` from every
    /// key they occupy.
    pub fn remove_range_query(&mut self, subpopulation: Option<&str>) -> Option<RangeQuerySettings> {
        let id = *self
            .range_query_by_subpop
            .get(&subpopulation.map(str::to_string))?;
        match self.remove(id)? {
            ParameterSet::RangeQuery(settings) => Some(settings),
            _ => None,
        }
    }

    /// Removes the mode mapping for `route_mode`.
    pub fn remove_mode_mapping(&mut self, route_mode: &str) -> Option<ModeMapping> {
        let id = *self.mode_mapping_by_route_mode.get(route_mode)?;
        match self.remove(id)? {
            ParameterSet::ModeMapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the range-query settings filed under exactly this key.
    ///
    /// `None` is the default key. A named subpopulation with no settings of
    /// its own does not fall back to the default key.
    #[must_use]
    pub fn lookup_range_query(&self, subpopulation: Option<&str>) -> Option<&RangeQuerySettings> {
        self.range_query_by_subpop
            .get(&subpopulation.map(str::to_string))
            .and_then(|id| self.sets.get(id))
            .and_then(ParameterSet::as_range_query)
    }

    /// Returns the mode mapping for exactly this route mode.
    #[must_use]
    pub fn lookup_mode_mapping(&self, route_mode: &str) -> Option<&ModeMapping> {
        self.mode_mapping_by_route_mode
            .get(route_mode)
            .and_then(|id| self.sets.get(id))
            .and_then(ParameterSet::as_mode_mapping)
    }

    /// Returns every intermodal entry in insertion order.
    pub fn all_intermodal(&self) -> impl Iterator<Item = &IntermodalAccessEgress> + '_ {
        self.intermodal
            .iter()
            .filter_map(|id| self.sets.get(id))
            .filter_map(ParameterSet::as_intermodal)
    }

    /// Returns the current mode mappings, ordered by route mode.
    pub fn all_mode_mappings(&self) -> impl Iterator<Item = &ModeMapping> + '_ {
        self.mode_mapping_by_route_mode
            .values()
            .filter_map(|id| self.sets.get(id))
            .filter_map(ParameterSet::as_mode_mapping)
    }

    /// Returns every range-query settings object once, in insertion order.
    pub fn all_range_queries(&self) -> impl Iterator<Item = &RangeQuerySettings> + '_ {
        self.sets.values().filter_map(ParameterSet::as_range_query)
    }

    /// Returns the parameter set with this id.
    #[must_use]
    pub fn get(&self, id: ParameterSetId) -> Option<&ParameterSet> {
        self.sets.get(&id)
    }

    /// Returns every parameter set with its id, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterSetId, &ParameterSet)> + '_ {
        self.sets.iter().map(|(id, set)| (*id, set))
    }

    /// Returns the number of parameter sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the registry holds no parameter sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn allocate_id(&mut self) -> ParameterSetId {
        let id = ParameterSetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Drops sets that no index key refers to any more.
    fn drop_unreachable(&mut self, candidates: impl IntoIterator<Item = ParameterSetId>) {
        for id in candidates {
            let reachable = self.range_query_by_subpop.values().any(|v| *v == id)
                || self.mode_mapping_by_route_mode.values().any(|v| *v == id)
                || self.intermodal.contains(&id);
            if !reachable && self.sets.remove(&id).is_some() {
                log::debug!("Dropped shadowed parameter set {id}");
            }
        }
    }

    /// Panics if the sequence and the indices disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        for (key, id) in &self.range_query_by_subpop {
            let settings = self
                .get(*id)
                .and_then(ParameterSet::as_range_query)
                .unwrap_or_else(|| panic!("range query key {key:?} points at missing {id}"));
            match key {
                Some(name) => assert!(settings.subpopulations().contains(name)),
                None => assert!(settings.applies_to_all()),
            }
        }
        for id in &self.intermodal {
            assert!(self.get(*id).and_then(ParameterSet::as_intermodal).is_some());
        }
        for (route_mode, id) in &self.mode_mapping_by_route_mode {
            let mapping = self
                .get(*id)
                .and_then(ParameterSet::as_mode_mapping)
                .unwrap_or_else(|| panic!("route mode {route_mode} points at missing {id}"));
            assert_eq!(mapping.route_mode(), Some(route_mode.as_str()));
        }
        for (id, set) in &self.sets {
            let indexed = match set {
                ParameterSet::RangeQuery(_) => {
                    self.range_query_by_subpop.values().any(|v| v == id)
                }
                ParameterSet::IntermodalAccessEgress(_) => self.intermodal.contains(id),
                ParameterSet::ModeMapping(_) => {
                    self.mode_mapping_by_route_mode.values().any(|v| v == id)
                }
            };
            assert!(indexed, "{} {id} is not indexed", set.type_tag());
        }
    }
}
