mod cli;
mod config;
mod console;
mod controller;
mod effects;
mod logging;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use docbot_core::AppState;
use docbot_engine::{EngineHandle, UploadSettings};
use docbot_logging::{docbot_error, docbot_info};

use crate::controller::Controller;
use crate::effects::EffectRunner;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            docbot_error!("{:#}", err);
            eprintln!("docbot: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = cli::Args::parse();
    logging::initialize(args.log, args.log_level(), Path::new(logging::LOG_FILE));

    let file_config = config::load_file(args.config.as_deref())?;
    let config = config::resolve(args.backend_url.as_deref(), file_config.as_ref())?;
    docbot_info!(
        "Starting docbot backend_url={} source={:?}",
        config.backend_url,
        config.source
    );

    let engine = EngineHandle::new(UploadSettings::new(config.backend_url.clone()))
        .context("could not start the upload engine")?;
    let mut controller = Controller::new(
        AppState::with_backend_url(&config.backend_url),
        EffectRunner::new(engine),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.file {
        Some(file) => {
            let prompt = args.prompt.unwrap_or_default();
            let mut err = io::stderr().lock();
            let answered = console::run_once(&mut controller, &file, &prompt, &mut out, &mut err)?;
            Ok(if answered {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        None => {
            console::run_interactive(&mut controller, io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
