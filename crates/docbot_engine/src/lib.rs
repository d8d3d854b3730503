//! DocBot engine: executes uploads against the document backend.
mod engine;
mod reply;
mod types;
mod upload;

pub use engine::EngineHandle;
pub use reply::parse_reply;
pub use types::{
    EngineError, EngineEvent, FailureKind, RequestId, UploadError, UploadReply, UploadRequest,
};
pub use upload::{ReqwestUploader, UploadSettings, Uploader, UPLOAD_PATH};
