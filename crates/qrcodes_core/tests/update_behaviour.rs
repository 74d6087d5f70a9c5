use std::sync::Once;

use pretty_assertions::assert_eq;
use qrcodes_core::{
    update, Destination, Effect, FetchStatus, Msg, PageState, QrCode, RenderState, Route,
    CREATE_ACTION_LABEL, PAGE_TITLE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(admin_logging::initialize_for_tests);
}

fn code(id: u64, title: &str) -> QrCode {
    QrCode {
        id,
        title: title.to_string(),
        product_title: Some("Snowboard".to_string()),
        destination: Destination::Product,
        discount_code: None,
        scans: 0,
        created_at: "2024-01-03T10:00:00Z".to_string(),
    }
}

fn settled_with(state: PageState, codes: Vec<QrCode>) -> PageState {
    let (state, _) = update(state, Msg::StatusChanged(FetchStatus::settled(codes)));
    state
}

#[test]
fn new_page_shows_loading_and_create_action() {
    init_logging();
    let view = PageState::new(Route::new("/qrcodes/new")).view();

    assert_eq!(view.title, PAGE_TITLE);
    assert_eq!(view.primary_action.label, CREATE_ACTION_LABEL);
    assert_eq!(view.primary_action.target, Route::new("/qrcodes/new"));
    assert_eq!(view.body, RenderState::Loading);
    assert_eq!(view.notice, None);
}

#[test]
fn status_updates_flow_through_resolver() {
    init_logging();
    let state = PageState::default();
    let (state, effects) = update(state, Msg::StatusChanged(FetchStatus::loading()));
    assert!(effects.is_empty());
    assert_eq!(state.view().body, RenderState::Loading);

    let state = settled_with(state, vec![code(1, "Winter sale")]);
    assert_eq!(
        state.view().body,
        RenderState::Populated {
            items: vec![code(1, "Winter sale")],
            stale: false,
        }
    );

    let (state, _) = update(
        state,
        Msg::StatusChanged(FetchStatus::refetching(vec![code(1, "Winter sale")])),
    );
    assert_eq!(
        state.view().body,
        RenderState::Populated {
            items: vec![code(1, "Winter sale")],
            stale: true,
        }
    );
}

#[test]
fn empty_collection_offers_creation_target() {
    init_logging();
    let state = settled_with(PageState::new(Route::new("/new")), Vec::new());
    assert_eq!(
        state.view().body,
        RenderState::Empty {
            target: Route::new("/new")
        }
    );
}

#[test]
fn status_change_marks_dirty_once() {
    init_logging();
    let mut state = settled_with(PageState::default(), Vec::new());
    assert!(state.view().dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn create_clicked_navigates_to_create_route() {
    init_logging();
    let state = PageState::new(Route::new("/qrcodes/new"));
    let (state, effects) = update(state, Msg::CreateClicked);

    assert_eq!(
        effects,
        vec![Effect::Navigate {
            target: Route::new("/qrcodes/new")
        }]
    );
    assert!(!state.view().dirty);
}

#[test]
fn row_selected_navigates_to_edit_page() {
    init_logging();
    let state = settled_with(PageState::default(), vec![code(4, "A"), code(9, "B")]);
    let (_state, effects) = update(state, Msg::RowSelected { id: 9 });

    assert_eq!(
        effects,
        vec![Effect::Navigate {
            target: Route::new("/qrcodes/9")
        }]
    );
}

#[test]
fn row_selected_ignores_unknown_id() {
    init_logging();
    let state = settled_with(PageState::default(), vec![code(4, "A")]);
    let (_state, effects) = update(state, Msg::RowSelected { id: 5 });
    assert!(effects.is_empty());
}

#[test]
fn refresh_requested_only_when_no_fetch_in_flight() {
    init_logging();
    let (state, effects) = update(PageState::default(), Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::Refetch]);

    let (state, _) = update(state, Msg::StatusChanged(FetchStatus::loading()));
    let (state, effects) = update(state, Msg::RefreshRequested);
    assert!(effects.is_empty());

    let state = settled_with(state, vec![code(1, "A")]);
    let (state, effects) = update(state, Msg::RefreshRequested);
    assert_eq!(effects, vec![Effect::Refetch]);

    let (state, _) = update(
        state,
        Msg::StatusChanged(FetchStatus::refetching(vec![code(1, "A")])),
    );
    let (_state, effects) = update(state, Msg::RefreshRequested);
    assert!(effects.is_empty());
}

#[test]
fn fetch_failure_sets_notice_until_next_settle() {
    init_logging();
    let state = settled_with(PageState::default(), vec![code(1, "A")]);
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            message: "network error".to_string(),
        },
    );
    let view = state.view();
    assert_eq!(view.notice.as_deref(), Some("network error"));
    assert_eq!(view.body.items().len(), 1);

    let (state, _) = update(
        state,
        Msg::StatusChanged(FetchStatus::refetching(vec![code(1, "A")])),
    );
    assert!(state.view().notice.is_some());

    let state = settled_with(state, vec![code(1, "A")]);
    assert_eq!(state.view().notice, None);
}
