use thiserror::Error;

/// Main error type for tool registration and dispatch
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;

/// Failure taxonomy for upstream lookups.
///
/// Every variant carries the final, human-readable message shown to the
/// caller. These never escape a tool's `execute`: they are folded into the
/// error variant of [`ToolOutcome`](crate::ToolOutcome) so the host runtime
/// always receives a well-formed result.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network or HTTP failure reaching an upstream
    #[error("{0}")]
    Transport(String),

    /// Upstream responded but the payload violates the expected shape
    #[error("{0}")]
    UpstreamFormat(String),

    /// Well-formed response but no matching data
    #[error("{0}")]
    NotFound(String),

    /// Input outside the tool's fixed support set
    #[error("{0}")]
    UnsupportedInput(String),
}
