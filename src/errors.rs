use std::collections::BTreeMap;

use reqwest::StatusCode;
use thiserror::Error;

use crate::data_types::{FieldErrors, FieldName};

/// Rule that rejected a single form field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field is required")]
    Required,
    #[error("value does not match the expected format")]
    Pattern,
    #[error("value is below the minimum")]
    Min,
    #[error("value is above the maximum")]
    Max,
    #[error("unknown dish type")]
    UnknownType,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(BTreeMap<FieldName, ValidationError>),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("dish rejected by server ({status})")]
    Rejected {
        status: StatusCode,
        field_errors: FieldErrors,
    },
    #[error("dish rejected by server ({0}), no field errors given")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl SubmitError {
    /// Field messages sent back by the server, if the failure carried any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmitError::Rejected { field_errors, .. } => Some(field_errors),
            _ => None,
        }
    }
}
