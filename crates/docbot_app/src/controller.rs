use docbot_core::{update, AppState, AppViewModel, Msg};

use crate::effects::EffectRunner;

/// Owns the submission state and feeds it messages one at a time.
pub struct Controller {
    state: AppState,
    runner: EffectRunner,
}

impl Controller {
    pub fn new(state: AppState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies `msg` and any follow-ups, returning the latest view if anything visible changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        let mut pending = vec![msg];
        let mut changed = false;
        while let Some(msg) = pending.pop() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            changed |= state.consume_dirty();
            self.state = state;
            pending.extend(self.runner.run(effects));
        }
        changed.then(|| self.state.view())
    }

    /// Blocks until the outstanding request, if any, has finished.
    ///
    /// `on_view` sees every intermediate view, so callers can render the in-flight status.
    pub fn settle(&mut self, mut on_view: impl FnMut(&AppViewModel)) {
        while let Some(request_id) = self.state.in_flight_request() {
            let msg = self.runner.next_msg(request_id);
            if let Some(view) = self.dispatch(msg) {
                on_view(&view);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use docbot_core::{RequestState, SelectedDocument, MISSING_DOCUMENT_MESSAGE};
    use docbot_engine::{
        EngineHandle, FailureKind, RequestId, UploadError, UploadReply, UploadRequest, Uploader,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    struct CountingUploader {
        calls: AtomicUsize,
        result: Result<UploadReply, UploadError>,
    }

    #[async_trait::async_trait]
    impl Uploader for CountingUploader {
        async fn upload(
            &self,
            _request_id: RequestId,
            _request: &UploadRequest,
        ) -> Result<UploadReply, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn controller(result: Result<UploadReply, UploadError>) -> (Controller, Arc<CountingUploader>) {
        let uploader = Arc::new(CountingUploader {
            calls: AtomicUsize::new(0),
            result,
        });
        let engine = EngineHandle::with_uploader(uploader.clone()).unwrap();
        let controller = Controller::new(AppState::new(), EffectRunner::new(engine));
        (controller, uploader)
    }

    fn ready(controller: &mut Controller, prompt: &str) {
        controller.dispatch(Msg::DocumentSelected(SelectedDocument::new(
            "doc.pdf",
            b"%PDF".to_vec(),
        )));
        controller.dispatch(Msg::PromptChanged(prompt.to_string()));
    }

    #[test]
    fn submit_shows_in_flight_then_settles_with_response() {
        let (mut controller, uploader) = controller(Ok(UploadReply::Translated("Hallo".into())));
        ready(&mut controller, "Translate to German");

        let view = controller.dispatch(Msg::SubmitClicked).unwrap();
        assert_eq!(view.request, RequestState::InFlight);

        let mut views = Vec::new();
        controller.settle(|view| views.push(view.clone()));

        let last = views.last().unwrap();
        assert_eq!(last.request, RequestState::Idle);
        assert_eq!(last.response.as_deref(), Some("Hallo"));
        assert_eq!(last.prompt, "");
        assert_eq!(uploader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn transport_failure_settles_with_connectivity_message() {
        let (mut controller, uploader) = controller(Err(UploadError {
            kind: FailureKind::Connect,
            message: "refused".into(),
        }));
        ready(&mut controller, "Summarize");

        controller.dispatch(Msg::SubmitClicked);
        controller.settle(|_| {});

        assert_eq!(controller.state().request_state(), RequestState::Idle);
        assert!(controller
            .state()
            .result()
            .error()
            .starts_with("Could not connect to the backend."));
        assert_eq!(uploader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn validation_failure_makes_no_call() {
        let (mut controller, uploader) = controller(Ok(UploadReply::Translated("x".into())));

        let view = controller.dispatch(Msg::SubmitClicked).unwrap();
        controller.settle(|_| {});

        assert_eq!(view.error.as_deref(), Some(MISSING_DOCUMENT_MESSAGE));
        assert_eq!(uploader.calls.load(Ordering::SeqCst), 0);
    }
}
