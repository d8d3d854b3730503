//! Terminal front end: turns typed lines into controller messages and prints views.
mod input;
mod render;

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use docbot_core::{AppViewModel, Msg, SelectedDocument, SubmissionResult};
use docbot_logging::{docbot_info, docbot_warn};

use crate::controller::Controller;
pub use input::{parse_line, Command, HELP};
pub use render::render;

/// Reads a document from disk. The file name is what the backend sees.
pub fn read_document(path: &Path) -> Result<SelectedDocument> {
    let bytes = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(SelectedDocument::new(filename, bytes))
}

/// Selects `file`, sends `prompt`, and prints the response to `out` or the
/// error to `err`. Returns whether a response arrived.
pub fn run_once(
    controller: &mut Controller,
    file: &Path,
    prompt: &str,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let document = read_document(file)?;
    if !document.looks_like_pdf() {
        docbot_warn!("{} does not have a .pdf extension", document.filename);
    }
    controller.dispatch(Msg::DocumentSelected(document));
    controller.dispatch(Msg::PromptChanged(prompt.to_string()));
    if let Some(view) = controller.dispatch(Msg::SubmitClicked) {
        if let Some(status) = &view.status_line {
            writeln!(out, "{status}")?;
        }
    }
    controller.settle(|_| {});

    match controller.state().result() {
        SubmissionResult::Response(text) => {
            writeln!(out, "{text}")?;
            Ok(true)
        }
        SubmissionResult::Error(message) => {
            writeln!(err, "Error: {message}")?;
            Ok(false)
        }
        SubmissionResult::Empty => Ok(false),
    }
}

/// Line-oriented loop until `/quit` or end of input.
pub fn run_interactive(
    controller: &mut Controller,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "DocBot. Type /help for commands.")?;
    print_view(out, &controller.state().view())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).context("could not read input")? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let Ok(line) = std::str::from_utf8(raw) else {
            docbot_warn!("Skipping {} bytes of non-UTF-8 input", raw.len());
            writeln!(out, "! input was not valid UTF-8")?;
            continue;
        };

        match parse_line(line) {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Status => print_view(out, &controller.state().view())?,
            Command::Unknown(text) => writeln!(out, "Unknown command {text:?}. Type /help.")?,
            Command::Open(path) => match read_document(&path) {
                Ok(document) => {
                    docbot_info!("Selected {} ({} bytes)", document.filename, document.bytes.len());
                    apply(controller, Msg::DocumentSelected(document), out)?;
                }
                Err(err) => writeln!(out, "! {err:#}")?,
            },
            Command::SetPrompt(text) => apply(controller, Msg::PromptChanged(text), out)?,
            Command::Submit => submit(controller, out)?,
            Command::PromptAndSubmit(text) => {
                controller.dispatch(Msg::PromptChanged(text));
                submit(controller, out)?;
            }
        }
    }
    Ok(())
}

fn submit(controller: &mut Controller, out: &mut impl Write) -> Result<()> {
    apply(controller, Msg::SubmitClicked, out)?;
    let mut rendered = Ok(());
    controller.settle(|view| {
        if rendered.is_ok() {
            rendered = print_view(out, view);
        }
    });
    rendered
}

fn apply(controller: &mut Controller, msg: Msg, out: &mut impl Write) -> Result<()> {
    match controller.dispatch(msg) {
        Some(view) => print_view(out, &view),
        None => Ok(()),
    }
}

fn print_view(out: &mut impl Write, view: &AppViewModel) -> Result<()> {
    for line in render(view) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
