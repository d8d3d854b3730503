//! Backend configuration.
//!
//! Precedence, highest first: `--backend-url`, `DOCBOT_BACKEND_URL` (both via
//! clap), the RON config file, then the built-in default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docbot_core::DEFAULT_BACKEND_URL;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "docbot.ron";

/// Contents of the optional config file, e.g. `(backend_url: Some("http://host:8000"))`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub backend_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine,
    File,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
    pub source: ConfigSource,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },
    #[error("backend URL {url:?} must use http or https")]
    UnsupportedScheme { url: String },
}

/// Loads the config file. A missing file is only an error when the path was given explicitly.
pub fn load_file(path: Option<&Path>) -> Result<Option<FileConfig>, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => return Ok(None),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse { path, source })
}

pub fn resolve(
    command_line_url: Option<&str>,
    file: Option<&FileConfig>,
) -> Result<AppConfig, ConfigError> {
    let (raw, source) = match (command_line_url, file.and_then(|f| f.backend_url.as_deref())) {
        (Some(url), _) => (url, ConfigSource::CommandLine),
        (None, Some(url)) => (url, ConfigSource::File),
        (None, None) => (DEFAULT_BACKEND_URL, ConfigSource::Default),
    };

    Ok(AppConfig {
        backend_url: validate_backend_url(raw)?,
        source,
    })
}

/// Checks the URL and drops trailing slashes so messages read the same however it was typed.
fn validate_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            url: trimmed.to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}
