use std::path::PathBuf;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    SetPrompt(String),
    Submit,
    /// Plain text: replace the prompt and submit it, like pressing Enter in the form.
    PromptAndSubmit(String),
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  /open <path>     select a PDF document
  /prompt <text>   set the instruction without sending it
  /submit          send the document and the current instruction
  /status          show the current state
  /help            show this help
  /quit            exit
Any other line replaces the instruction and sends it.";

/// Parses a line with its line terminator already removed. Prompt text is kept verbatim.
pub fn parse_line(line: &str) -> Command {
    let Some(command) = line.strip_prefix('/') else {
        return Command::PromptAndSubmit(line.to_string());
    };
    let (name, rest) = match command.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (command, ""),
    };

    match name {
        "open" if !rest.trim().is_empty() => Command::Open(PathBuf::from(rest.trim())),
        "prompt" => Command::SetPrompt(rest.to_string()),
        "submit" => Command::Submit,
        "status" => Command::Status,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}
