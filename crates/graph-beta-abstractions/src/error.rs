//! Error type shared by readers, writers and models.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    /// The wire value has a different JSON type than the getter expects.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The wire value has the right JSON type but cannot be coerced.
    #[error("invalid {kind} value `{value}`: {reason}")]
    InvalidValue {
        kind: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown {type_name} value `{value}`")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },
    #[error("writer state: {0}")]
    WriterState(String),
    #[error("unsupported content type `{0}`")]
    UnsupportedContentType(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SerializationError {
    pub fn invalid_value(
        kind: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        SerializationError::InvalidValue {
            kind,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
