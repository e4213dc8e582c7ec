// src/error.rs

use thiserror::Error;

/// Failure taxonomy shared by controllers and store adapters.
///
/// None of these are fatal: the UI surfaces them as transient notifications
/// and the local collections are left exactly as they were before the failed
/// operation. No retries happen anywhere in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad input, rejected before any remote call is made.
    #[error("{0}")]
    Validation(String),

    /// The remote store refused or failed the operation. Carries the
    /// human-readable message from the response body when one is available.
    #[error("{0}")]
    Remote(String),

    /// Something unexpected broke during the call sequence, e.g. a success
    /// response with a body that does not decode.
    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Remote(format!("network error: {}", err))
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        Error::Remote(err.to_string())
    }
}
