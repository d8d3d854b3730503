use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::logging::LogDestination;

/// Send a PDF and an instruction to the DocBot backend and print the reply.
#[derive(Debug, Parser)]
#[command(name = "docbot", version, about)]
pub struct Args {
    /// Backend base URL, e.g. http://localhost:8000
    #[arg(long, env = "DOCBOT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// RON configuration file. Defaults to ./docbot.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run once with this document instead of starting the interactive console.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Instruction sent with --file.
    #[arg(long, requires = "file")]
    pub prompt: Option<String>,

    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Log debug records as well.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_flags_parse() {
        let args = Args::try_parse_from([
            "docbot",
            "--file",
            "paper.pdf",
            "--prompt",
            " Translate ",
            "--backend-url",
            "http://10.0.0.2:8000",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("paper.pdf")));
        assert_eq!(args.prompt.as_deref(), Some(" Translate "));
        assert_eq!(args.backend_url.as_deref(), Some("http://10.0.0.2:8000"));
        assert_eq!(args.log, LogDestination::File);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn prompt_requires_file() {
        assert!(Args::try_parse_from(["docbot", "--prompt", "Summarize"]).is_err());
    }

    #[test]
    fn log_destination_accepts_off() {
        let args = Args::try_parse_from(["docbot", "--log", "off"]).unwrap();
        assert_eq!(args.log, LogDestination::Off);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }
}
