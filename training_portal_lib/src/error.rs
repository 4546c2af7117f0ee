//! Error types for the library layer.

use std::fmt;

/// Which collection a page was loading when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Offerings,
    Recordings,
}

/// Errors produced by the library layer, wrapping feed client errors
/// and adding configuration failures.
#[derive(Debug)]
pub enum PortalError {
    /// An error from the underlying feed client.
    Api(gviz_sheets_api::Error),
    /// The portal configuration is unusable (e.g. a blank feed identifier).
    Config(String),
}

impl PortalError {
    /// The single generic failure text shown in place of a collection.
    ///
    /// Pages never display partial data after a top-level failure; they
    /// show this message with a retry action instead.
    pub fn user_message(&self, collection: Collection) -> &'static str {
        match collection {
            Collection::Offerings => {
                "Unable to load training data. Please ensure the Google Sheet is accessible."
            }
            Collection::Recordings => {
                "Unable to load recordings. Please ensure the Google Sheet is accessible."
            }
        }
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "Feed error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<gviz_sheets_api::Error> for PortalError {
    fn from(e: gviz_sheets_api::Error) -> Self {
        Self::Api(e)
    }
}
