use pretty_assertions::assert_eq;
use qrcodes_core::{
    ContractViolation, FetchPhase, FetchStatus, PageStateResolver, RenderState, Route,
    DEFAULT_CREATE_ROUTE,
};

fn resolver() -> PageStateResolver {
    PageStateResolver::new(Route::new("/new"))
}

fn statuses_for(items: Option<Vec<&'static str>>) -> Vec<FetchStatus<&'static str>> {
    FetchPhase::ALL
        .into_iter()
        .filter_map(|phase| FetchStatus::from_parts(phase, items.clone()).ok())
        .collect()
}

#[test]
fn idle_resolves_to_loading() {
    let state = resolver().resolve(&FetchStatus::<&str>::idle());
    assert_eq!(state, RenderState::Loading);
}

#[test]
fn idle_and_loading_ignore_items() {
    for phase in [FetchPhase::Idle, FetchPhase::Loading] {
        for items in [None, Some(vec![]), Some(vec!["a", "b"])] {
            let status = FetchStatus::from_parts(phase, items).expect("well formed");
            assert_eq!(resolver().resolve(&status), RenderState::Loading);
        }
    }
}

#[test]
fn settled_without_items_is_empty_with_target() {
    let state = resolver().resolve(&FetchStatus::<&str>::settled(vec![]));
    assert_eq!(
        state,
        RenderState::Empty {
            target: Route::new("/new")
        }
    );
}

#[test]
fn settled_with_items_is_populated_and_fresh() {
    let state = resolver().resolve(&FetchStatus::settled(vec!["Item1", "Item2"]));
    assert_eq!(
        state,
        RenderState::Populated {
            items: vec!["Item1", "Item2"],
            stale: false,
        }
    );
}

#[test]
fn refetching_keeps_items_visible_and_marks_stale() {
    let state = resolver().resolve(&FetchStatus::refetching(vec!["Item1", "Item2"]));
    assert_eq!(
        state,
        RenderState::Populated {
            items: vec!["Item1", "Item2"],
            stale: true,
        }
    );
}

#[test]
fn refetching_an_empty_collection_stays_empty() {
    let state = resolver().resolve(&FetchStatus::<&str>::refetching(vec![]));
    assert!(state.is_empty());
}

#[test]
fn populated_order_matches_input_order() {
    let items = vec!["c", "a", "b"];
    let state = resolver().resolve(&FetchStatus::settled(items.clone()));
    assert_eq!(state.items(), items.as_slice());
}

#[test]
fn resolve_is_pure() {
    let resolver = resolver();
    let inputs = [
        FetchStatus::idle(),
        FetchStatus::loading(),
        FetchStatus::settled(vec![]),
        FetchStatus::settled(vec!["x"]),
        FetchStatus::refetching(vec!["x", "y"]),
    ];
    for status in inputs {
        let before = status.clone();
        let first = resolver.resolve(&status);
        let second = resolver.resolve(&status);
        assert_eq!(first, second);
        assert_eq!(status, before);
    }
}

#[test]
fn every_reachable_status_maps_to_exactly_one_state() {
    for items in [None, Some(vec![]), Some(vec!["a"]), Some(vec!["a", "b", "c"])] {
        for status in statuses_for(items) {
            let state = resolver().resolve(&status);
            let matches = [
                state.is_loading(),
                state.is_empty(),
                matches!(state, RenderState::Populated { .. }),
            ];
            assert_eq!(matches.iter().filter(|hit| **hit).count(), 1, "{status:?}");
            if let RenderState::Populated { items, .. } = &state {
                assert!(!items.is_empty());
            }
        }
    }
}

#[test]
fn completed_phase_without_items_is_rejected() {
    for phase in [FetchPhase::Settled, FetchPhase::Refetching] {
        let err = FetchStatus::<&str>::from_parts(phase, None).unwrap_err();
        assert_eq!(err, ContractViolation::MissingItems { phase });
    }
}

#[test]
fn contract_violation_names_the_phase() {
    let err = FetchStatus::<&str>::from_parts(FetchPhase::Settled, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "fetch phase `settled` requires items but none were provided"
    );
}

#[test]
fn default_resolver_targets_creation_page() {
    let state = PageStateResolver::default().resolve(&FetchStatus::<u8>::settled(vec![]));
    assert_eq!(
        state,
        RenderState::Empty {
            target: Route::new(DEFAULT_CREATE_ROUTE)
        }
    );
}

#[test]
fn map_items_keeps_phase() {
    let status = FetchStatus::refetching(vec![1u32, 2]).map_items(|n| n * 10);
    assert_eq!(status.phase(), FetchPhase::Refetching);
    assert_eq!(status.items(), Some(&[10u32, 20][..]));
}
