//! Claude API client implementation.

use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ai::{error::AiError, AiClient, REQUEST_TIMEOUT};

/// Default API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Maximum tokens requested per completion.
const MAX_TOKENS: i32 = 4096;

/// Claude API request message.
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

/// Claude API request body.
#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: i32,
    system: String,
    messages: Vec<Message>,
}

/// Claude API response content.
#[derive(Deserialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    text: String,
}

/// Claude API response.
#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<Content>,
}

/// Claude API client.
#[derive(Debug)]
pub struct ClaudeClient {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier.
    model: String,
    /// Base URL for the API.
    base_url: String,
}

impl ClaudeClient {
    /// Creates a new client, reading the API key from `CLAUDE_API_KEY` or
    /// `ANTHROPIC_API_KEY`.
    pub fn new(model: String) -> Result<Self> {
        let api_key = std::env::var("CLAUDE_API_KEY")
            .or_else(|_| std::env::var("ANTHROPIC_API_KEY"))
            .map_err(|_| AiError::ApiKeyNotFound)?;

        Ok(Self::with_credentials(model, api_key))
    }

    /// Creates a new client with an explicit API key.
    pub fn with_credentials(model: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL (e.g. a proxy or a test server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the model identifier this client targets.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl AiClient for ClaudeClient {
    fn send_request<'a>(
        &'a self,
        system_prompt: &'a str,
        user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let request = ClaudeRequest {
                model: self.model.clone(),
                max_tokens: MAX_TOKENS,
                system: system_prompt.to_string(),
                messages: vec![Message {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                }],
            };

            let url = format!("{}/v1/messages", self.base_url.trim_end_matches('/'));
            info!(url = %url, model = %self.model, "Sending request to Claude API");
            debug!(
                system_prompt_len = system_prompt.len(),
                user_prompt_len = user_prompt.len(),
                "Claude API request sizes"
            );

            let response = self
                .client
                .post(&url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", "2023-06-01")
                .header("content-type", "application/json")
                .json(&request)
                .send()
                .await
                .map_err(|e| AiError::NetworkError(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_else(|e| {
                    debug!("Failed to read error response body: {e}");
                    String::new()
                });
                return Err(AiError::ApiRequestFailed(format!("HTTP {status}: {error_text}")).into());
            }

            let claude_response: ClaudeResponse = response
                .json()
                .await
                .map_err(|e| AiError::InvalidResponseFormat(e.to_string()))?;

            let text = claude_response
                .content
                .first()
                .filter(|c| c.content_type == "text")
                .map(|c| c.text.clone())
                .ok_or_else(|| {
                    AiError::InvalidResponseFormat("No text content in response".to_string())
                })?;

            debug!(response_len = text.len(), "Received Claude API response");

            Ok(text)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ClaudeClient {
        ClaudeClient::with_credentials("claude-test".to_string(), "key-123".to_string())
            .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn returns_first_text_block() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "key-123"))
            .and(header("anthropic-version", "2023-06-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "a technical summary"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let text = client.send_request("system", "user").await.unwrap();
        assert_eq!(text, "a technical summary");
    }

    #[tokio::test]
    async fn error_status_surfaces_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.send_request("system", "user").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("529"), "missing status: {msg}");
        assert!(msg.contains("overloaded"), "missing body: {msg}");
    }

    #[tokio::test]
    async fn missing_text_content_is_format_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "tool_use", "text": ""}]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.send_request("system", "user").await.unwrap_err();
        assert!(err.to_string().contains("Invalid response format"));
    }

    #[test]
    fn missing_api_key_is_reported() {
        // Only run the env-dependent path when neither variable is set,
        // to avoid clobbering a developer's real credentials.
        if std::env::var("CLAUDE_API_KEY").is_err() && std::env::var("ANTHROPIC_API_KEY").is_err() {
            let err = ClaudeClient::new("claude-test".to_string()).unwrap_err();
            assert!(err.to_string().contains("API key not found"));
        }
    }
}
