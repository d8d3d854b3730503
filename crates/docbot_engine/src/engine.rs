use std::sync::{mpsc, Arc};
use std::thread;

use docbot_logging::{docbot_debug, docbot_warn};

use crate::upload::{ReqwestUploader, UploadSettings, Uploader};
use crate::{EngineError, EngineEvent, RequestId, UploadRequest};

enum EngineCommand {
    Upload {
        request_id: RequestId,
        request: UploadRequest,
    },
}

/// Runs uploads on a dedicated worker thread and reports back over a channel.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> Result<Self, EngineError> {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("docbot-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let uploader = uploader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(uploader.as_ref(), command, event_tx).await;
                    });
                }
                docbot_debug!("Upload worker shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, request: UploadRequest) -> Result<(), EngineError> {
        self.cmd_tx
            .send(EngineCommand::Upload {
                request_id,
                request,
            })
            .map_err(|_| EngineError::Disconnected)
    }

    /// Blocks until the worker reports the next event.
    pub fn recv(&self) -> Result<EngineEvent, EngineError> {
        self.event_rx.recv().map_err(|_| EngineError::Disconnected)
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload {
            request_id,
            request,
        } => {
            let _ = event_tx.send(EngineEvent::UploadStarted { request_id });
            let result = uploader.upload(request_id, &request).await;
            if let Err(err) = &result {
                docbot_warn!("Upload request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::UploadCompleted { request_id, result });
        }
    }
}
