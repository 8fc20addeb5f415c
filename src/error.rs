//! Error Types

use thiserror::Error;

use crate::form::FormField;

/// Failure loading the user feed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("invalid user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

/// Reasons an add-user submit is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no add-user form is open")]
    NotOpen,

    #[error("missing required fields: {}", field_names(.0))]
    MissingFields(Vec<FormField>),

    #[error("user ids exhausted")]
    IdsExhausted,
}

fn field_names(fields: &[FormField]) -> String {
    fields.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
}
