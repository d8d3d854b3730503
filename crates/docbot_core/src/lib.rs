//! DocBot core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{BackendReply, Msg};
pub use state::{
    connectivity_message, AppState, RequestId, RequestState, SelectedDocument, SubmissionResult,
    BACKEND_FAILURE_PREFIX, DEFAULT_BACKEND_URL, MISSING_DOCUMENT_MESSAGE, MISSING_PROMPT_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, ANALYZING_STATUS, NO_DOCUMENT_LABEL};
