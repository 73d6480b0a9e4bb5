use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the file and network edges. The grouping pipeline itself
/// never fails.
#[derive(Debug, Error)]
pub enum FortuneError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FortuneError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FortuneError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FortuneError>;
