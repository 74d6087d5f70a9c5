use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::StatusChanged(status) => {
            state.apply_status(status);
            Vec::new()
        }
        Msg::FetchFailed { message } => {
            state.apply_failure(message);
            Vec::new()
        }
        Msg::CreateClicked => vec![Effect::Navigate {
            target: state.create_route().clone(),
        }],
        Msg::RowSelected { id } => match state.find_code(id) {
            Some(code) => vec![Effect::Navigate {
                target: code.edit_route(),
            }],
            None => Vec::new(),
        },
        Msg::RefreshRequested => {
            // One request at a time; the data source owns the in-flight fetch.
            if state.phase().in_flight() {
                Vec::new()
            } else {
                vec![Effect::Refetch]
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
