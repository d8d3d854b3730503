#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file.
    DocumentSelected(crate::SelectedDocument),
    /// User edited the prompt box. The text is kept verbatim.
    PromptChanged(String),
    /// User pressed submit.
    SubmitClicked,
    /// The backend delivered a reply for a request.
    ReplyReceived {
        request_id: crate::RequestId,
        reply: BackendReply,
    },
    /// The request could not be completed or its reply could not be read.
    TransportFailed { request_id: crate::RequestId },
    /// Nothing to apply, e.g. the engine reporting that an upload has started.
    NoOp,
}

/// Payload-level outcome reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply {
    /// The reply carried an `error` field.
    Failed(String),
    /// The reply carried the generated text.
    Translated(String),
}
