use docbot_core::{AppViewModel, RequestState};

/// Text lines for a view, in the order the form shows them.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("[{}]", view.document_label));
    if view.document_filename.is_some() && !view.document_looks_like_pdf {
        lines.push("  (this file does not look like a PDF; it will be sent as is)".to_string());
    }
    if !view.prompt.is_empty() {
        lines.push(format!("Prompt: {}", view.prompt));
    }
    if let Some(status) = &view.status_line {
        lines.push(format!("... {status}"));
    }
    if let Some(error) = &view.error {
        lines.push(format!("! {error}"));
    }
    if let Some(response) = &view.response {
        lines.push("AI Response".to_string());
        lines.push("-----------".to_string());
        lines.extend(response.lines().map(ToOwned::to_owned));
    }
    if view.request == RequestState::Idle && view.document_filename.is_none() {
        lines.push("Type /open <path> to choose a document.".to_string());
    }

    lines
}
