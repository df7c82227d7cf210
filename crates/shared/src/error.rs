use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotNumeric,
    OutOfDomain,
    /// More digits than the target integer type holds.
    TooLarge,
}

/// User-facing rejection of an input value. The message is shown verbatim in the
/// result slot and no partial trace accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct InputError {
    pub code: ErrorCode,
    pub message: String,
}

impl InputError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Rewrites the message while keeping the code, so each feature can phrase
    /// its own rejection.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self {
            code: self.code,
            message: message.into(),
        }
    }
}
