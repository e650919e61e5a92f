//! Property-based tests for manager generation and default transitions.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use phaser::builder::{ConfigError, ManagerBuilder};
use phaser::core::{make_action_creator, Action, ConcernState, Phase, StoreState};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashSet;

prop_compose! {
    fn valid_name()(name in "[A-Z][A-Z0-9_]{0,10}[A-Z0-9]") -> String {
        name
    }
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z ]{0,8}".prop_map(Value::from),
    ]
}

fn object() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,4}", scalar(), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

fn argument_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 1..5).prop_map(|names| {
        names
            .into_iter()
            .filter(|name| name != "type")
            .collect()
    })
}

fn state_with(name: &str, results: Value, status: &str) -> StoreState {
    StoreState::new().with_slice(name, ConcernState::new("results", results, status))
}

proptest! {
    #[test]
    fn identifiers_derive_from_name(name in valid_name()) {
        let manager = ManagerBuilder::new().name(name.clone()).build().unwrap();

        for (phase, identifier) in manager.action_types().iter() {
            prop_assert_eq!(identifier, &format!("{}_{}", name, phase.suffix()));
        }

        let distinct: HashSet<&String> =
            manager.action_types().iter().map(|(_, id)| id).collect();
        prop_assert_eq!(distinct.len(), Phase::ALL.len());
    }

    #[test]
    fn action_type_keys_are_identity_over_identifiers(name in valid_name()) {
        let manager = ManagerBuilder::new().name(name).build().unwrap();

        let identifiers: HashSet<&String> =
            manager.action_types().iter().map(|(_, id)| id).collect();
        let keys: HashSet<&String> = manager.action_type_keys().keys().collect();
        prop_assert_eq!(keys, identifiers);

        for (key, value) in manager.action_type_keys() {
            prop_assert_eq!(key, value);
        }
    }

    #[test]
    fn construction_is_deterministic(name in valid_name()) {
        let first = ManagerBuilder::new().name(name.clone()).build().unwrap();
        let second = ManagerBuilder::new().name(name).build().unwrap();

        prop_assert_eq!(first.core(), second.core());
    }

    #[test]
    fn phase_creators_omit_missing_trailing_fields(
        names in argument_names(),
        supplied in 0usize..6,
    ) {
        let manager = ManagerBuilder::new()
            .name("CONTENT")
            .argument_names(names.clone())
            .build()
            .unwrap();
        let args: Vec<Value> = (0..supplied).map(|i| Value::from(i as i64)).collect();

        for (_, creator) in manager.actions().iter() {
            let action = creator.create(args.clone());
            let bound = supplied.min(names.len());

            prop_assert_eq!(action.fields().len(), bound);
            for (position, name) in names.iter().enumerate() {
                prop_assert_eq!(action.field(name).is_some(), position < bound);
            }
        }
    }

    #[test]
    fn standalone_creator_sets_every_field(
        names in argument_names(),
        supplied in 0usize..6,
    ) {
        let creator = make_action_creator("X", names.clone());
        let args: Vec<Value> = (0..supplied).map(|i| Value::from(i as i64)).collect();

        let action = creator.create(args);

        prop_assert_eq!(action.fields().len(), names.len());
        for (position, name) in names.iter().enumerate() {
            let expected = if position < supplied {
                Value::from(position as i64)
            } else {
                Value::Null
            };
            prop_assert_eq!(action.field(name), Some(&expected));
        }
    }

    #[test]
    fn merge_success_is_field_union(existing in object(), update in object()) {
        let manager = ManagerBuilder::new().name("CONTENT").build().unwrap();
        let state = state_with(
            "CONTENT",
            Value::Object(existing.clone()),
            &manager.action_types().success,
        );

        let next = manager.reduce(&state, &manager.success([Value::Object(update.clone())]));
        let slice = next.slice("CONTENT").unwrap();
        let results = slice.results.as_object().unwrap();

        for (key, value) in &update {
            prop_assert_eq!(results.get(key), Some(value));
        }
        for (key, value) in &existing {
            if !update.contains_key(key) {
                prop_assert_eq!(results.get(key), Some(value));
            }
        }
        prop_assert_eq!(&slice.status, &manager.action_types().success);
        prop_assert_eq!(&slice.error, &None);
    }

    #[test]
    fn merge_failure_keeps_results(existing in object(), error in scalar()) {
        let manager = ManagerBuilder::new().name("CONTENT").build().unwrap();
        let state = state_with(
            "CONTENT",
            Value::Object(existing.clone()),
            &manager.action_types().in_progress,
        );

        let next = manager.reduce(&state, &manager.failure([error.clone()]));
        let slice = next.slice("CONTENT").unwrap();

        prop_assert_eq!(&slice.results, &Value::Object(existing));
        prop_assert_eq!(&slice.error, &Some(error));
        prop_assert_eq!(&slice.status, &manager.action_types().failure);
    }

    #[test]
    fn success_then_initial_keeps_seed_only_fields(loaded in object(), seed in object()) {
        let manager = ManagerBuilder::new().name("CONTENT").build().unwrap();
        let state = manager.reduce(&StoreState::new(), &manager.success([Value::Object(loaded.clone())]));

        let next = manager.reduce(&state, &manager.initial([Value::Object(seed.clone())]));
        let slice = next.slice("CONTENT").unwrap();
        let results = slice.results.as_object().unwrap();

        for (key, value) in &loaded {
            prop_assert_eq!(results.get(key), Some(value));
        }
        for (key, value) in &seed {
            if !loaded.contains_key(key) {
                prop_assert_eq!(results.get(key), Some(value));
            }
        }
        prop_assert_eq!(&slice.status, &manager.action_types().initial);
        prop_assert_eq!(&slice.error, &None);
    }

    #[test]
    fn foreign_actions_leave_state_unchanged(existing in object(), action_type in "[A-Z_]{1,20}") {
        let manager = ManagerBuilder::new().name("CONTENT").build().unwrap();
        prop_assume!(manager.phase_of(&action_type).is_none());
        let state = state_with("CONTENT", Value::Object(existing), "CONTENT_FETCH_SUCCESS");

        let next = manager.reduce(&state, &Action::new(action_type));

        prop_assert_eq!(next, state);
    }

    #[test]
    fn names_with_invalid_characters_are_rejected(
        prefix in "[A-Z]{1,5}",
        bad in "[-. /!@#]",
    ) {
        let result = ManagerBuilder::new().name(format!("{}{}X", prefix, bad)).build();

        let rejected = matches!(result, Err(ConfigError::InvalidNameCharacter { .. }));
        prop_assert!(rejected);
    }
}
