use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The snapshot could not be obtained. Unrecoverable for the session.
#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("Statistics file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("No embedded statistics found in {}", path.display())]
    MissingEmbedded { path: PathBuf },

    #[error("Invalid statistics JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A rendering instance could not be created for one chart slot
#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("Slot {slot} rejected spec: {reason}")]
    Rejected { slot: &'static str, reason: String },
}
