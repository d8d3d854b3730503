use crate::{AppState, RequestState};

pub const NO_DOCUMENT_LABEL: &str = "Click to upload PDF Document";
pub const ANALYZING_STATUS: &str = "Analyzing document and generating response...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub request: RequestState,
    pub document_label: String,
    pub document_filename: Option<String>,
    /// False when the selected file does not carry a `.pdf` extension.
    pub document_looks_like_pdf: bool,
    pub prompt: String,
    pub prompt_editable: bool,
    pub submit_enabled: bool,
    pub status_line: Option<String>,
    pub error: Option<String>,
    pub response: Option<String>,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        let in_flight = state.request_state() == RequestState::InFlight;
        let document = state.document();
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_owned());

        Self {
            request: state.request_state(),
            document_label: match document {
                Some(document) => format!("File Loaded: {}", document.filename),
                None => NO_DOCUMENT_LABEL.to_owned(),
            },
            document_filename: document.map(|document| document.filename.clone()),
            document_looks_like_pdf: document.map_or(true, |document| document.looks_like_pdf()),
            prompt: state.prompt().to_owned(),
            prompt_editable: !in_flight,
            submit_enabled: !in_flight && document.is_some(),
            status_line: in_flight.then(|| ANALYZING_STATUS.to_owned()),
            error: non_empty(state.result().error()),
            response: non_empty(state.result().response()),
        }
    }
}
