use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The external process could not be started at all.
    #[error("could not spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The external process exited non-zero; carries its captured stderr.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// The external process succeeded but its stdout was not the expected JSON.
    #[error("`{command}` returned invalid JSON: {source}")]
    BadResponse {
        command: String,
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },
}
