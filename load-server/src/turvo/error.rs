//! Turvo client error types.

/// Errors from talking to the Turvo API.
///
/// Any non-success response is reported as [`TurvoError::Api`] with the
/// responder's status and body, whatever the status is.
#[derive(Debug, thiserror::Error)]
pub enum TurvoError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The token endpoint answered but gave no usable token
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A location name matched nothing
    #[error("no location found for name {0:?}")]
    LocationNotFound(String),

    /// Client could not be configured
    #[error("invalid client configuration: {0}")]
    Config(String),
}
