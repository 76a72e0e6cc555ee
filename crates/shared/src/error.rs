use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::view::ResultKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Returned when an action result is unwrapped as a variant it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected:?} result, got {actual:?}")]
pub struct ResultKindError {
    pub expected: ResultKind,
    pub actual: ResultKind,
}

impl From<ResultKindError> for ApiError {
    fn from(value: ResultKindError) -> Self {
        Self::new(ErrorCode::Internal, value.to_string())
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
