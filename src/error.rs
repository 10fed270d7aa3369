//! Error type for the spotq crate.

use thiserror::Error;

/// Errors that can occur while parsing commands or talking to Spotify.
///
/// `Validation` is the one kind meant for the user: a rejected command, a
/// missing client credential or a failed authorization. The prompt loop
/// prints it and keeps going. The remaining variants wrap lower-level
/// failures that bubble up through [`crate::Res`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
