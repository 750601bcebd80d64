use thiserror::Error;

/// Convenience result type for record operations that can fail.
pub type RecordResult<T> = Result<T, RecordError>;

/// Error type returned by record helpers.
///
/// Absent keys and null values are ordinary data and never produce an error; failures come from
/// malformed JSON input or from a nested helper finding a slot of the wrong shape.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Underlying JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input parsed, but its top level is not a JSON object.
    #[error("expected a json object, found {found}")]
    NotAnObject { found: String },

    /// A nested helper found a truthy value of the wrong type at `key`.
    #[error("type mismatch at key '{key}': expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}
