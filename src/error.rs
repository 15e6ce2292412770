use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::ConfigError;

/// Failures of the command-line shell. Parsing and rendering never fail.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to read standard input: {0}")]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
