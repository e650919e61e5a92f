//! Built-in transition policies.
//!
//! Both policies clear the error with `None` on every phase but `failure`.
//!
//! | phase        | merge (default)                         | replace                        |
//! |--------------|-----------------------------------------|--------------------------------|
//! | `initial`    | keep results, fill missing seed fields  | results = seed                 |
//! | `inProgress` | keep results                            | results = seed                 |
//! | `success`    | shallow-merge payload into results      | results = payload              |
//! | `failure`    | keep results, error = payload           | results = seed, error = payload|

use super::{empty_results, SliceContext, Transitions};
use crate::core::{fill_results, merge_results, Action, Phase, StoreState};
use crate::manager::ManagerCore;
use serde_json::Value;

/// Default policy: keep what has been loaded, merge in what arrives.
///
/// Tolerates partial successive fetches without discarding earlier data.
pub fn merge_transitions(core: &ManagerCore, results_field: &str) -> Transitions {
    let context = SliceContext::new(core, results_field);

    let initial = {
        let context = context.clone();
        move |state: &StoreState, _action: &Action, seed: Option<&Value>| {
            let results = match (context.current_results(state), seed) {
                (Some(current), Some(seed)) => fill_results(current, seed),
                (Some(current), None) => current.clone(),
                (None, Some(seed)) => seed.clone(),
                (None, None) => empty_results(),
            };
            context.commit(state, Phase::Initial, results, None)
        }
    };

    let in_progress = {
        let context = context.clone();
        move |state: &StoreState, _action: &Action, seed: Option<&Value>| {
            let results = kept_results(&context, state, seed);
            context.commit(state, Phase::InProgress, results, None)
        }
    };

    let success = {
        let context = context.clone();
        move |state: &StoreState, action: &Action, _seed: Option<&Value>| {
            let results = match (context.current_results(state), context.payload(action)) {
                (Some(current), Some(payload)) => merge_results(current, payload),
                (None, Some(payload)) => payload.clone(),
                (Some(current), None) => current.clone(),
                (None, None) => empty_results(),
            };
            context.commit(state, Phase::Success, results, None)
        }
    };

    let failure = move |state: &StoreState, action: &Action, seed: Option<&Value>| {
        let results = kept_results(&context, state, seed);
        let error = context.payload(action).cloned().unwrap_or(Value::Null);
        context.commit(state, Phase::Failure, results, Some(error))
    };

    Transitions::new()
        .on(Phase::Initial, initial)
        .on(Phase::InProgress, in_progress)
        .on(Phase::Success, success)
        .on(Phase::Failure, failure)
}

/// Replace policy: every phase rewrites the whole slice.
///
/// Select it explicitly with
/// `ManagerBuilder::transitions(replace_transitions)`.
pub fn replace_transitions(core: &ManagerCore, results_field: &str) -> Transitions {
    let context = SliceContext::new(core, results_field);

    let seeded = |phase: Phase| {
        let context = context.clone();
        move |state: &StoreState, _action: &Action, seed: Option<&Value>| {
            let results = seed.cloned().unwrap_or_else(empty_results);
            context.commit(state, phase, results, None)
        }
    };

    let success = {
        let context = context.clone();
        move |state: &StoreState, action: &Action, _seed: Option<&Value>| {
            let results = context.payload(action).cloned().unwrap_or(Value::Null);
            context.commit(state, Phase::Success, results, None)
        }
    };

    let failure = {
        let context = context.clone();
        move |state: &StoreState, action: &Action, seed: Option<&Value>| {
            let results = seed.cloned().unwrap_or_else(empty_results);
            let error = context.payload(action).cloned().unwrap_or(Value::Null);
            context.commit(state, Phase::Failure, results, Some(error))
        }
    };

    Transitions::new()
        .on(Phase::Initial, seeded(Phase::Initial))
        .on(Phase::InProgress, seeded(Phase::InProgress))
        .on(Phase::Success, success)
        .on(Phase::Failure, failure)
}

fn kept_results(context: &SliceContext, state: &StoreState, seed: Option<&Value>) -> Value {
    context
        .current_results(state)
        .or(seed)
        .cloned()
        .unwrap_or_else(empty_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ManagerBuilder;
    use crate::core::ConcernState;
    use crate::manager::Manager;
    use serde_json::json;

    fn content() -> Manager {
        ManagerBuilder::new().name("CONTENT").build().unwrap()
    }

    fn with_results(manager: &Manager, results: Value) -> StoreState {
        StoreState::new().with_slice(
            manager.name(),
            ConcernState::new("results", results, manager.action_types().success.clone()),
        )
    }

    #[test]
    fn merge_initial_on_empty_state_uses_seed() {
        let manager = content();
        let action = manager.initial([json!({"data": "test"})]);

        let next = manager
            .transitions()
            .initial(&StoreState::new(), &action, Some(&json!({})));

        assert_eq!(
            serde_json::to_value(&next).unwrap(),
            json!({ "CONTENT": { "results": {}, "status": "CONTENT_FETCH_INITIAL", "error": null } })
        );
    }

    #[test]
    fn merge_initial_without_seed_starts_empty() {
        let manager = content();
        let action = manager.initial(Vec::<Value>::new());

        let next = manager.transitions().initial(&StoreState::new(), &action, None);

        assert_eq!(next.slice("CONTENT").unwrap().results, json!({}));
    }

    #[test]
    fn merge_success_merges_payload_into_results() {
        let manager = content();
        let state = with_results(&manager, json!({"k1": "v1"}));

        let next = manager
            .transitions()
            .success(&state, &manager.success([json!({"k2": "v2"})]));

        let slice = next.slice("CONTENT").unwrap();
        assert_eq!(slice.results, json!({"k1": "v1", "k2": "v2"}));
        assert_eq!(slice.status, "CONTENT_FETCH_SUCCESS");
        assert_eq!(slice.error, None);
    }

    #[test]
    fn merge_success_on_empty_state_takes_payload() {
        let manager = content();

        let next = manager
            .transitions()
            .success(&StoreState::new(), &manager.success([json!("test")]));

        assert_eq!(next.slice("CONTENT").unwrap().results, json!("test"));
    }

    #[test]
    fn merge_failure_keeps_results_and_sets_error() {
        let manager = content();
        let state = with_results(&manager, json!({"k1": "v1"}));

        let next = manager
            .transitions()
            .failure(&state, &manager.failure([json!("boom")]), None);

        let slice = next.slice("CONTENT").unwrap();
        assert_eq!(slice.results, json!({"k1": "v1"}));
        assert_eq!(slice.error, Some(json!("boom")));
        assert_eq!(slice.status, "CONTENT_FETCH_FAILED");
    }

    #[test]
    fn merge_in_progress_keeps_results_and_clears_error() {
        let manager = content();
        let failed = manager.transitions().failure(
            &with_results(&manager, json!({"k1": "v1"})),
            &manager.failure([json!("boom")]),
            None,
        );

        let next = manager.transitions().in_progress(
            &failed,
            &manager.in_progress(Vec::<Value>::new()),
            Some(&json!({"ignored": true})),
        );

        let slice = next.slice("CONTENT").unwrap();
        assert_eq!(slice.results, json!({"k1": "v1"}));
        assert_eq!(slice.error, None);
        assert_eq!(slice.status, "CONTENT_FETCH_IN_PROGRESS");
    }

    #[test]
    fn merge_success_then_initial_keeps_loaded_and_seed_fields() {
        let manager = content();
        let loaded = manager
            .transitions()
            .success(&StoreState::new(), &manager.success([json!({"k1": "loaded"})]));

        let next = manager.transitions().initial(
            &loaded,
            &manager.initial(Vec::<Value>::new()),
            Some(&json!({"k1": "seed", "page": 1})),
        );

        let slice = next.slice("CONTENT").unwrap();
        assert_eq!(slice.results, json!({"k1": "loaded", "page": 1}));
        assert_eq!(slice.status, "CONTENT_FETCH_INITIAL");
        assert_eq!(slice.error, None);
    }

    #[test]
    fn transitions_leave_other_concerns_alone() {
        let manager = content();
        let state = StoreState::new().with_slice(
            "OTHER",
            ConcernState::new("results", json!([1]), "OTHER_FETCH_SUCCESS"),
        );

        let next = manager
            .transitions()
            .success(&state, &manager.success([json!({"a": 1})]));

        assert_eq!(next.slice("OTHER"), state.slice("OTHER"));
    }

    #[test]
    fn payload_follows_first_argument_name() {
        let manager = ManagerBuilder::new()
            .name("TODOS")
            .argument_names(["items", "meta"])
            .build()
            .unwrap();

        let next = manager.transitions().success(
            &StoreState::new(),
            &manager.success([json!({"a": 1}), json!("meta")]),
        );

        assert_eq!(next.slice("TODOS").unwrap().results, json!({"a": 1}));
    }

    #[test]
    fn replace_policy_rewrites_slice() {
        let manager = ManagerBuilder::new()
            .name("CONTENT")
            .transitions(replace_transitions)
            .build()
            .unwrap();
        let state = with_results(&manager, json!({"k1": "v1"}));

        let next = manager
            .transitions()
            .success(&state, &manager.success([json!({"k2": "v2"})]));
        assert_eq!(next.slice("CONTENT").unwrap().results, json!({"k2": "v2"}));

        let next = manager.transitions().initial(&next, &manager.initial([json!(1)]), None);
        assert_eq!(next.slice("CONTENT").unwrap().results, json!({}));
    }

    #[test]
    fn replace_failure_uses_seed_for_results() {
        let manager = ManagerBuilder::new()
            .name("CONTENT")
            .transitions(replace_transitions)
            .build()
            .unwrap();
        let state = with_results(&manager, json!({"k1": "v1"}));

        let next = manager
            .transitions()
            .failure(&state, &manager.failure([json!("test")]), Some(&json!({})));

        assert_eq!(
            serde_json::to_value(&next).unwrap(),
            json!({ "CONTENT": { "results": {}, "status": "CONTENT_FETCH_FAILED", "error": "test" } })
        );
    }

    #[test]
    fn replace_uses_configured_results_field() {
        let manager = ManagerBuilder::new()
            .name("CONTENT")
            .results_field("data")
            .transitions(replace_transitions)
            .build()
            .unwrap();

        let next = manager
            .transitions()
            .success(&StoreState::new(), &manager.success([json!("test")]));

        assert_eq!(
            serde_json::to_value(&next).unwrap(),
            json!({ "CONTENT": { "data": "test", "status": "CONTENT_FETCH_SUCCESS", "error": null } })
        );
    }
}
