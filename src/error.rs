use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("{0}")]
    Notes(#[from] NoteError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum NoteError {
    #[error("Failed to read notes from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Notes file {} is not a JSON object of strings: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode notes: {0}")]
    Encode(serde_json::Error),

    #[error("Failed to write notes to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum CompletionError {
    #[error("no API key configured (set OPENAI_API_KEY or --api-key)")]
    MissingApiKey,

    #[error("{0}")]
    Http(#[from] ureq::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no message content")]
    EmptyResponse,
}
