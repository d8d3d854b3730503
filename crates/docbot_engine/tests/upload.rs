use std::net::TcpListener;
use std::sync::Once;

use bytes::Bytes;
use docbot_engine::{
    FailureKind, ReqwestUploader, UploadReply, UploadRequest, UploadSettings, Uploader,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(docbot_logging::initialize_for_tests);
}

fn request(prompt: &str) -> UploadRequest {
    UploadRequest {
        filename: "thesis.pdf".to_string(),
        bytes: Bytes::from_static(b"%PDF-1.7 fake document body"),
        prompt: prompt.to_string(),
    }
}

async fn backend_replying(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-and-translate/"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn uploader_posts_multipart_and_returns_translation() {
    init_logging();
    let server =
        backend_replying(ResponseTemplate::new(200).set_body_json(json!({"translation": "Hola"})))
            .await;
    let uploader = ReqwestUploader::new(UploadSettings::new(server.uri()));

    let reply = uploader
        .upload(1, &request("  Translate to Spanish "))
        .await
        .expect("upload ok");
    assert_eq!(reply, UploadReply::Translated("Hola".to_string()));

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "content type was {content_type}"
    );

    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains(r#"name="file"; filename="thesis.pdf""#), "{body}");
    assert!(body.contains("application/pdf"), "{body}");
    assert!(body.contains("%PDF-1.7 fake document body"), "{body}");
    assert!(body.contains(r#"name="prompt""#), "{body}");
    assert!(body.contains("\r\n\r\n  Translate to Spanish \r\n"), "{body}");
}

#[tokio::test]
async fn uploader_reports_backend_error_field() {
    init_logging();
    let server = backend_replying(
        ResponseTemplate::new(200).set_body_json(json!({"error": "API key not valid"})),
    )
    .await;
    let uploader = ReqwestUploader::new(UploadSettings::new(server.uri()));

    let reply = uploader.upload(2, &request("Summarize")).await.unwrap();
    assert_eq!(reply, UploadReply::Failed("API key not valid".to_string()));
}

#[tokio::test]
async fn uploader_ignores_status_and_reads_payload() {
    init_logging();
    let server =
        backend_replying(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"}))).await;
    let uploader = ReqwestUploader::new(UploadSettings::new(server.uri()));

    let reply = uploader.upload(3, &request("Summarize")).await.unwrap();
    assert_eq!(reply, UploadReply::Failed("boom".to_string()));
}

#[tokio::test]
async fn uploader_flags_non_json_reply_as_malformed() {
    init_logging();
    let server = backend_replying(
        ResponseTemplate::new(502).set_body_raw("<html>Bad Gateway</html>", "text/html"),
    )
    .await;
    let uploader = ReqwestUploader::new(UploadSettings::new(server.uri()));

    let err = uploader.upload(4, &request("Summarize")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedReply);
}

#[tokio::test]
async fn uploader_fails_when_backend_is_unreachable() {
    init_logging();
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let uploader = ReqwestUploader::new(UploadSettings::new(format!("http://127.0.0.1:{port}")));

    let err = uploader.upload(5, &request("Summarize")).await.unwrap_err();
    assert!(
        matches!(err.kind, FailureKind::Connect | FailureKind::Network),
        "unexpected kind {:?}",
        err.kind
    );
}

#[tokio::test]
async fn uploader_rejects_invalid_backend_url_without_network() {
    init_logging();
    let uploader = ReqwestUploader::new(UploadSettings::new("localhost:8000 nope"));

    let err = uploader.upload(6, &request("Summarize")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
