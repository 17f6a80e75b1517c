//! AI client abstraction and Claude implementation.

pub mod claude;
pub mod error;
pub mod prompts;

#[cfg(test)]
pub(crate) mod test_utils;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Result;

pub use claude::ClaudeClient;
pub use error::AiError;

/// Timeout applied to every AI request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Trait for AI text-completion clients.
///
/// The pipeline stages depend on this seam rather than on a concrete
/// client, so tests can substitute a scripted mock.
pub trait AiClient: Send + Sync {
    /// Sends a request to the AI service and returns the raw response text.
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}
