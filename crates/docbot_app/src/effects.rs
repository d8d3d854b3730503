use docbot_core::{BackendReply, Effect, Msg, RequestId};
use docbot_engine::{EngineEvent, EngineHandle, UploadReply, UploadRequest};
use docbot_logging::{docbot_debug, docbot_error, docbot_info, docbot_warn};

/// Executes controller effects on the upload engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Runs effects; returns follow-up messages for effects that could not be started.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::Upload {
                    request_id,
                    document,
                    prompt,
                } => {
                    docbot_info!(
                        "Upload queued request_id={} file={} bytes={}",
                        request_id,
                        document.filename,
                        document.bytes.len()
                    );
                    let request = UploadRequest {
                        filename: document.filename,
                        bytes: document.bytes,
                        prompt,
                    };
                    if let Err(err) = self.engine.submit(request_id, request) {
                        docbot_error!("Upload request_id={} not started: {}", request_id, err);
                        follow_ups.push(Msg::TransportFailed { request_id });
                    }
                }
            }
        }
        follow_ups
    }

    /// Blocks until the engine reports progress on `request_id`.
    pub fn next_msg(&self, request_id: RequestId) -> Msg {
        match self.engine.recv() {
            Ok(event) => map_event(event),
            Err(err) => {
                docbot_error!("Upload request_id={} lost: {}", request_id, err);
                Msg::TransportFailed { request_id }
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadStarted { request_id } => {
            docbot_debug!("Upload started request_id={}", request_id);
            Msg::NoOp
        }
        EngineEvent::UploadCompleted { request_id, result } => match result {
            Ok(reply) => Msg::ReplyReceived {
                request_id,
                reply: map_reply(reply),
            },
            Err(err) => {
                docbot_warn!(
                    "Upload request_id={} failed ({}): {}",
                    request_id,
                    err.kind,
                    err.message
                );
                Msg::TransportFailed { request_id }
            }
        },
    }
}

fn map_reply(reply: UploadReply) -> BackendReply {
    match reply {
        UploadReply::Failed(message) => BackendReply::Failed(message),
        UploadReply::Translated(text) => BackendReply::Translated(text),
    }
}
