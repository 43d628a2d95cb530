//! Outcome types for the order-creation endpoint.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// What the final step renders after a submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// 2xx response. The body is opaque to the client and rendered
    /// verbatim.
    Accepted { result: serde_json::Value },
    /// Non-2xx status or transport failure. The message is shown to the
    /// user as plain text, never as markup.
    Failed { message: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

impl From<Result<serde_json::Value, SubmitError>> for SubmitOutcome {
    fn from(result: Result<serde_json::Value, SubmitError>) -> Self {
        match result {
            Ok(value) => Self::Accepted { result: value },
            Err(error) => Self::Failed {
                message: error.to_string(),
            },
        }
    }
}

/// Why a submission attempt failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SubmitError {
    Serialization(String),
    Network(String),
    Status { code: u16, message: String },
    InvalidResponse(String),
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SubmitError::Serialization(ref msg) => {
                write!(f, "could not encode the order: {}", msg)
            }
            SubmitError::Network(ref msg) => write!(f, "request failed: {}", msg),
            SubmitError::Status { code, ref message } => {
                write!(f, "server returned {}: {}", code, message)
            }
            SubmitError::InvalidResponse(ref msg) => {
                write!(f, "unreadable server response: {}", msg)
            }
        }
    }
}
