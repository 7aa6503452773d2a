//! Transform error types.
//!
//! These are validation failures of a single load. They are never retried
//! and abort the load before anything is sent to the TMS.

use super::appointment::StopKind;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TransformError {
    /// An appointment time is missing or not RFC 3339
    #[error("failed to parse {stop} apptTime {value:?}: {source}")]
    InvalidApptTime {
        stop: StopKind,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The status label is not in the status table
    #[error("invalid status code: {0}")]
    UnknownStatus(String),
}
