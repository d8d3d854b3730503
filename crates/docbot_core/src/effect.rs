use crate::{RequestId, SelectedDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the document and the raw prompt to the backend in one request.
    Upload {
        request_id: RequestId,
        document: SelectedDocument,
        prompt: String,
    },
}
