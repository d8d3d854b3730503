use crate::{
    AppState, BackendReply, Effect, Msg, RequestState, BACKEND_FAILURE_PREFIX,
    MISSING_DOCUMENT_MESSAGE, MISSING_PROMPT_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentSelected(document) => {
            // The document belongs to the outstanding request until it completes.
            if state.request_state() == RequestState::Idle {
                state.select_document(document);
            }
            Vec::new()
        }
        Msg::PromptChanged(text) => {
            if state.request_state() == RequestState::Idle {
                state.set_prompt(text);
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::ReplyReceived { request_id, reply } => {
            if state.finish_request(request_id) {
                match reply {
                    BackendReply::Failed(message) => {
                        state.set_error(format!("{BACKEND_FAILURE_PREFIX}{message}"));
                    }
                    BackendReply::Translated(text) => {
                        state.set_response(text);
                        state.clear_prompt();
                    }
                }
            }
            Vec::new()
        }
        Msg::TransportFailed { request_id } => {
            if state.finish_request(request_id) {
                state.set_connectivity_error();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    if state.request_state() == RequestState::InFlight {
        return Vec::new();
    }

    let Some(document) = state.document().cloned() else {
        state.set_error(MISSING_DOCUMENT_MESSAGE);
        return Vec::new();
    };
    if state.prompt().trim().is_empty() {
        state.set_error(MISSING_PROMPT_MESSAGE);
        return Vec::new();
    }

    let prompt = state.prompt().to_owned();
    let request_id = state.begin_request();
    vec![Effect::Upload {
        request_id,
        document,
        prompt,
    }]
}
