//! Property-based tests for the configuration model.

use super::intermodal::IntermodalAccessEgress;
use super::mode_mapping::ModeMapping;
use super::range_query::RangeQuerySettings;
use super::registry::ParameterSetRegistry;
use super::scalar::ScalarValue;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

// Small alphabets so generated operations collide on keys
fn subpopulation_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["commuters", "students", "freight", "visitors"])
        .prop_map(str::to_string)
}

fn route_mode_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["rail", "bus", "tram", "ferry"]).prop_map(str::to_string)
}

#[derive(Debug, Clone)]
enum Op {
    AddRangeQuery(BTreeSet<String>, u32),
    RemoveRangeQuery(Option<String>),
    AddIntermodal(String),
    AddModeMapping(String, String),
    RemoveModeMapping(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::collection::btree_set(subpopulation_strategy(), 0..3), 0u32..3600)
            .prop_map(|(subpops, seconds)| Op::AddRangeQuery(subpops, seconds)),
        prop::option::of(subpopulation_strategy()).prop_map(Op::RemoveRangeQuery),
        "[a-z]{1,8}".prop_map(Op::AddIntermodal),
        (route_mode_strategy(), "[a-z]{1,8}")
            .prop_map(|(route, passenger)| Op::AddModeMapping(route, passenger)),
        route_mode_strategy().prop_map(Op::RemoveModeMapping),
    ]
}

proptest! {
    // Every scalar type parses back what it formats
    #[test]
    fn bool_roundtrip(value in any::<bool>()) {
        prop_assert_eq!(bool::parse_value(&value.format_value()), Some(value));
    }

    #[test]
    fn u32_roundtrip(value in any::<u32>()) {
        prop_assert_eq!(u32::parse_value(&value.format_value()), Some(value));
    }

    #[test]
    fn f64_roundtrip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert_eq!(f64::parse_value(&value.format_value()), Some(value));
    }

    #[test]
    fn string_roundtrip(value in ".*") {
        prop_assert_eq!(String::parse_value(&value.format_value()), Some(value));
    }

    #[test]
    fn optional_string_roundtrip(
        value in prop::option::of("[a-zA-Z0-9_]{0,12}".prop_filter("reserved", |s| s != "null"))
    ) {
        prop_assert_eq!(Option::<String>::parse_value(&value.format_value()), Some(value));
    }

    #[test]
    fn set_roundtrip(value in prop::collection::btree_set("[a-z_][a-z0-9_]{0,11}", 0..6)) {
        let text = value.format_value();
        prop_assert_eq!(BTreeSet::<String>::parse_value(&text), Some(value));
    }

    // Whatever strings a caller hands to the typed setter, the stored set
    // reads back unchanged from its text form
    #[test]
    fn typed_subpopulations_roundtrip(names in prop::collection::vec(".*", 0..6)) {
        let settings = RangeQuerySettings::new().with_subpopulations(&names);
        let parsed = BTreeSet::<String>::parse_value(&settings.subpopulations().format_value());
        prop_assert_eq!(parsed.as_ref(), Some(settings.subpopulations()));

        let mut entry = IntermodalAccessEgress::new();
        entry.set_subpopulations(&names);
        prop_assert_eq!(entry.subpopulations(), settings.subpopulations());
    }

    // Settings stay under the same lookup keys after a write and reload
    #[test]
    fn range_query_keys_survive_text_roundtrip(names in prop::collection::vec(".{0,6}", 0..4)) {
        let mut registry = ParameterSetRegistry::new();
        let settings = RangeQuerySettings::new().with_subpopulations(&names);
        let text = settings.subpopulations().format_value();
        registry.add_range_query(settings.clone());

        let mut reread = ParameterSetRegistry::new();
        let mut parsed = RangeQuerySettings::new();
        parsed.set_subpopulations(BTreeSet::<String>::parse_value(&text).unwrap_or_default());
        reread.add_range_query(parsed);

        if settings.applies_to_all() {
            prop_assert!(reread.lookup_range_query(None).is_some());
        }
        for name in settings.subpopulations() {
            prop_assert!(reread.lookup_range_query(Some(name)).is_some());
        }
        prop_assert_eq!(
            registry.lookup_range_query(None).is_some(),
            reread.lookup_range_query(None).is_some()
        );
    }

    // Range-query settings are reachable under every subpopulation they name,
    // and all those keys resolve to the same object
    #[test]
    fn range_query_fan_out(subpops in prop::collection::btree_set(subpopulation_strategy(), 1..4)) {
        let mut registry = ParameterSetRegistry::new();
        registry.add_range_query(RangeQuerySettings::new().with_subpopulations(subpops.clone()));

        let first = registry.lookup_range_query(subpops.iter().next().map(String::as_str));
        prop_assert!(first.is_some());
        for subpop in &subpops {
            let found = registry.lookup_range_query(Some(subpop));
            prop_assert!(std::ptr::eq(found.unwrap(), first.unwrap()));
        }
        prop_assert!(registry.lookup_range_query(None).is_none());
    }

    // Intermodal entries are never deduplicated
    #[test]
    fn intermodal_keeps_every_entry(modes in prop::collection::vec("walk|bike", 0..10)) {
        let mut registry = ParameterSetRegistry::new();
        for mode in &modes {
            let mut entry = IntermodalAccessEgress::new();
            entry.set_mode(mode.clone());
            registry.add_intermodal(entry);
        }
        let stored: Vec<String> = registry
            .all_intermodal()
            .filter_map(|e| e.mode().map(str::to_string))
            .collect();
        prop_assert_eq!(stored, modes);
    }

    // Arbitrary operation sequences keep the sequence and the indices in
    // agreement, and mode mappings follow last-write-wins
    #[test]
    fn registry_stays_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut registry = ParameterSetRegistry::new();
        let mut expected_mappings: BTreeMap<String, String> = BTreeMap::new();
        let mut expected_intermodal = 0usize;

        for op in ops {
            match op {
                Op::AddRangeQuery(subpops, seconds) => {
                    let mut settings = RangeQuerySettings::new().with_subpopulations(subpops.clone());
                    settings.set_max_earlier_departure(seconds);
                    registry.add_range_query(settings);

                    if subpops.is_empty() {
                        let found = registry.lookup_range_query(None).unwrap();
                        prop_assert_eq!(found.max_earlier_departure(), seconds);
                    }
                    for subpop in &subpops {
                        let found = registry.lookup_range_query(Some(subpop)).unwrap();
                        prop_assert_eq!(found.max_earlier_departure(), seconds);
                    }
                }
                Op::RemoveRangeQuery(key) => {
                    if let Some(removed) = registry.remove_range_query(key.as_deref()) {
                        for subpop in removed.subpopulations() {
                            prop_assert!(registry.lookup_range_query(Some(subpop)).is_none());
                        }
                    }
                    prop_assert!(registry.lookup_range_query(key.as_deref()).is_none());
                }
                Op::AddIntermodal(mode) => {
                    let mut entry = IntermodalAccessEgress::new();
                    entry.set_mode(mode);
                    registry.add_intermodal(entry);
                    expected_intermodal += 1;
                }
                Op::AddModeMapping(route, passenger) => {
                    registry
                        .add_mode_mapping(ModeMapping::new(route.clone(), passenger.clone()))
                        .unwrap();
                    expected_mappings.insert(route, passenger);
                }
                Op::RemoveModeMapping(route) => {
                    let removed = registry.remove_mode_mapping(&route);
                    prop_assert_eq!(removed.is_some(), expected_mappings.remove(&route).is_some());
                }
            }
            registry.assert_consistent();
        }

        let mappings: BTreeMap<String, String> = registry
            .all_mode_mappings()
            .map(|m| {
                (
                    m.route_mode().unwrap_or_default().to_string(),
                    m.passenger_mode().unwrap_or_default().to_string(),
                )
            })
            .collect();
        prop_assert_eq!(mappings, expected_mappings);
        prop_assert_eq!(registry.all_intermodal().count(), expected_intermodal);
    }
}
