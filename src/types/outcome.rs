use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminated result of a tool invocation.
///
/// Serializes to the wire shape the host agent runtime renders:
/// `{"status": "success", "report": ...}` or
/// `{"status": "error", "error_message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome {
    Success { report: String },
    Error { error_message: String },
}

impl ToolOutcome {
    /// Build a success outcome from a finished report
    pub fn success(report: impl Into<String>) -> Self {
        Self::Success {
            report: report.into(),
        }
    }

    /// Build an error outcome from a diagnostic message
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The report or error message, whichever is present
    pub fn message(&self) -> &str {
        match self {
            Self::Success { report } => report,
            Self::Error { error_message } => error_message,
        }
    }

    /// Serialize into the JSON value handed back to the host runtime
    pub fn into_value(self) -> crate::error::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<std::result::Result<String, LookupError>> for ToolOutcome {
    fn from(result: std::result::Result<String, LookupError>) -> Self {
        match result {
            Ok(report) => Self::Success { report },
            Err(err) => Self::Error {
                error_message: err.to_string(),
            },
        }
    }
}
