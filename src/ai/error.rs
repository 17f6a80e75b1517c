//! AI-specific error handling.

use thiserror::Error;

/// AI service errors.
#[derive(Error, Debug)]
pub enum AiError {
    /// API key not found in environment variables.
    #[error("API key not found. Set CLAUDE_API_KEY or ANTHROPIC_API_KEY environment variable")]
    ApiKeyNotFound,

    /// The API request failed with an error status.
    #[error("AI request failed: {0}")]
    ApiRequestFailed(String),

    /// The API response did not have the expected shape.
    #[error("Invalid response format from AI service: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
