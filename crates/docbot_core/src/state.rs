use bytes::Bytes;

use crate::view_model::AppViewModel;

pub type RequestId = u64;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const MISSING_DOCUMENT_MESSAGE: &str = "Please select a PDF file before submitting.";
pub const MISSING_PROMPT_MESSAGE: &str =
    "Please enter a prompt (e.g., 'Translate to French') to start the task.";
pub const BACKEND_FAILURE_PREFIX: &str = "Processing Failed: ";

/// Message shown for every transport failure, whatever the underlying cause.
pub fn connectivity_message(backend_url: &str) -> String {
    format!("Could not connect to the backend. Ensure FastAPI is running on {backend_url}.")
}

/// A picked file. The bytes are passed through to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

impl SelectedDocument {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Filter hint only; nothing is rejected on this basis.
    pub fn looks_like_pdf(&self) -> bool {
        self.filename.to_ascii_lowercase().ends_with(".pdf")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
}

/// Outcome shown to the user. Error and response text never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionResult {
    #[default]
    Empty,
    Error(String),
    Response(String),
}

impl SubmissionResult {
    pub fn error(&self) -> &str {
        match self {
            SubmissionResult::Error(message) => message,
            _ => "",
        }
    }

    pub fn response(&self) -> &str {
        match self {
            SubmissionResult::Response(text) => text,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    document: Option<SelectedDocument>,
    prompt: String,
    in_flight: Option<RequestId>,
    result: SubmissionResult,
    next_request_id: RequestId,
    connectivity_message: String,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_backend_url(DEFAULT_BACKEND_URL)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State whose connectivity message names the configured backend.
    pub fn with_backend_url(backend_url: &str) -> Self {
        Self {
            document: None,
            prompt: String::new(),
            in_flight: None,
            result: SubmissionResult::Empty,
            next_request_id: 1,
            connectivity_message: connectivity_message(backend_url),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn result(&self) -> &SubmissionResult {
        &self.result
    }

    pub fn request_state(&self) -> RequestState {
        if self.in_flight.is_some() {
            RequestState::InFlight
        } else {
            RequestState::Idle
        }
    }

    pub fn in_flight_request(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn select_document(&mut self, document: SelectedDocument) {
        self.document = Some(document);
        self.result = SubmissionResult::Empty;
        self.dirty = true;
    }

    pub(crate) fn set_prompt(&mut self, prompt: String) {
        if self.prompt != prompt {
            self.prompt = prompt;
            self.dirty = true;
        }
    }

    pub(crate) fn clear_prompt(&mut self) {
        self.set_prompt(String::new());
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.result = SubmissionResult::Error(message.into());
        self.dirty = true;
    }

    pub(crate) fn set_response(&mut self, text: String) {
        self.result = SubmissionResult::Response(text);
        self.dirty = true;
    }

    pub(crate) fn set_connectivity_error(&mut self) {
        let message = self.connectivity_message.clone();
        self.set_error(message);
    }

    /// Clears the previous outcome and marks a new request as in flight.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);
        self.result = SubmissionResult::Empty;
        self.dirty = true;
        request_id
    }

    /// Ends the in-flight request if `request_id` is the one outstanding.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> bool {
        if self.in_flight == Some(request_id) {
            self.in_flight = None;
            self.dirty = true;
            true
        } else {
            false
        }
    }
}
