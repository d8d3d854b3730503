use docbot_logging::{docbot_debug, docbot_info, docbot_warn};
use reqwest::multipart::{Form, Part};
use url::Url;

use crate::reply::parse_reply;
use crate::{FailureKind, RequestId, UploadError, UploadReply, UploadRequest};

/// Endpoint path, relative to the backend base URL.
pub const UPLOAD_PATH: &str = "upload-and-translate/";

const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub backend_url: String,
}

impl UploadSettings {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Full upload URL. The base keeps any path prefix it carries, with or without a trailing slash.
    pub fn endpoint(&self) -> Result<Url, UploadError> {
        let mut base = Url::parse(self.backend_url.trim())
            .map_err(|err| UploadError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(UploadError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {}", base.scheme()),
            ));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(UPLOAD_PATH)
            .map_err(|err| UploadError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(
        &self,
        request_id: RequestId,
        request: &UploadRequest,
    ) -> Result<UploadReply, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    // No timeout: the transport's own limits bound the call.
    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))
    }

    fn build_form(request: &UploadRequest) -> Result<Form, UploadError> {
        let file = Part::bytes(request.bytes.to_vec())
            .file_name(request.filename.clone())
            .mime_str(PDF_MIME)
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))?;
        Ok(Form::new()
            .part("file", file)
            .text("prompt", request.prompt.clone()))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(
        &self,
        request_id: RequestId,
        request: &UploadRequest,
    ) -> Result<UploadReply, UploadError> {
        let endpoint = self.settings.endpoint()?;
        let client = self.build_client()?;
        let form = Self::build_form(request)?;

        docbot_info!(
            "Upload request_id={} endpoint={} file={} bytes={} prompt_len={}",
            request_id,
            endpoint,
            request.filename,
            request.bytes.len(),
            request.prompt.len()
        );

        let response = client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Status codes carry no meaning here; the payload decides.
        let status = response.status();
        if !status.is_success() {
            docbot_warn!("Upload request_id={} returned status {}", request_id, status);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        docbot_debug!("Upload request_id={} reply_bytes={}", request_id, body.len());
        parse_reply(&body)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> UploadError {
    if err.is_timeout() {
        return UploadError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_connect() {
        return UploadError::new(FailureKind::Connect, err.to_string());
    }
    if err.is_builder() {
        return UploadError::new(FailureKind::InvalidUrl, err.to_string());
    }
    UploadError::new(FailureKind::Network, err.to_string())
}
