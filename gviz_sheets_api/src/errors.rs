//! Error types for the feed client.

/// Errors that can occur while fetching and decoding a sheet feed.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be built from the base URL and feed identifier.
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The HTTP request did not complete (connect failure, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status and a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body did not contain the `setResponse(...)` wrapper.
    #[error("Could not parse Google Sheet response")]
    MissingPayload,
    /// The wrapped payload was not valid JSON for the expected shape.
    #[error("Invalid sheet payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload itself reported `status: "error"`.
    #[error("{message}")]
    Feed { message: String },
}

/// Coarse classification of [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or HTTP-level failure.
    Transport,
    /// The body could not be unwrapped or decoded.
    Parse,
    /// The feed reported an explicit error status.
    Feed,
}

impl Error {
    /// Returns which part of the fetch pipeline produced this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl(_) | Self::Transport(_) | Self::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            Self::MissingPayload | Self::Json(_) => ErrorKind::Parse,
            Self::Feed { .. } => ErrorKind::Feed,
        }
    }
}
