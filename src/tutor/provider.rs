//! Chat-completion provider
//!
//! [`ChatProvider`] is the seam between the tutoring client and the
//! outside world. [`OpenAiCompatibleProvider`] speaks the
//! `/chat/completions` dialect shared by DashScope, OpenAI and local
//! servers. Wire types are private to this module.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};
use url::Url;

use super::message::ChatMessage;
use crate::config::ProviderConfig;

/// Provider call failures. All of them end in the fallback answer.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(String),

    #[error("provider returned HTTP {0}: {1}")]
    Status(u16, String),

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

/// One chat-completion request, independent of wire format
#[derive(Debug, Clone)]
pub struct ChatCompletion {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Backend that turns a conversation into one assistant reply
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the conversation and return the first choice's text
    async fn complete(
        &self,
        credential: &str,
        request: &ChatCompletion,
    ) -> Result<String, ProviderError>;

    /// Human-readable name for logs
    fn name(&self) -> &str;
}

/// Provider for any endpoint implementing `/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleProvider {
    client: Client,
    endpoint: Url,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a provider with an explicit endpoint
    pub fn new(endpoint: &str, model: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        use anyhow::Context;

        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("Invalid provider endpoint: {}", endpoint))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            model: model.into(),
        })
    }

    /// Create a provider from config
    pub fn from_config(config: &ProviderConfig) -> anyhow::Result<Self> {
        Self::new(&config.endpoint, config.model.clone(), config.timeout_secs)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatProvider for OpenAiCompatibleProvider {
    async fn complete(
        &self,
        credential: &str,
        request: &ChatCompletion,
    ) -> Result<String, ProviderError> {
        let payload = CompletionRequest {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            messages = request.messages.len(),
            "sending chat completion"
        );

        let resp = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(credential)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status(status.as_u16(), extract_error(&body)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;
        trace!(body = %body, "chat completion response");

        let parsed: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ProviderError::Malformed("no message content in first choice".into()))
    }

    fn name(&self) -> &str {
        &self.model
    }
}

// ============== Wire types ==============

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull `error.message` out of an OpenAI-style error body
fn extract_error(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => env.error.message,
        Err(_) if body.is_empty() => "empty body".to_string(),
        Err(_) => body.chars().take(200).collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{closed_endpoint, MockEndpoint, Reply};
    use super::*;

    fn request() -> ChatCompletion {
        ChatCompletion {
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("question")],
            max_tokens: 800,
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn test_success_returns_content() {
        let mock = MockEndpoint::start(Reply::Ok("  answer text\n".into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();

        let answer = provider.complete("sk-test", &request()).await.unwrap();
        assert_eq!(answer, "  answer text\n");
        assert_eq!(mock.hits(), 1);

        let (auth, body) = mock.last_request().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(body["model"], "qwen-turbo");
        assert_eq!(body["max_tokens"], 800);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "question");
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_http_error() {
        let mock = MockEndpoint::start(Reply::Status(500)).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();

        let err = provider.complete("sk-test", &request()).await.unwrap_err();
        match err {
            ProviderError::Status(code, msg) => {
                assert_eq!(code, 500);
                assert_eq!(msg, "upstream exploded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock = MockEndpoint::start(Reply::Raw("not json".into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();

        let err = provider.complete("sk-test", &request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_missing_choices() {
        let mock = MockEndpoint::start(Reply::Raw(r#"{"choices":[]}"#.into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();

        let err = provider.complete("sk-test", &request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_empty_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#;
        let mock = MockEndpoint::start(Reply::Raw(body.into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();

        let err = provider.complete("sk-test", &request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let url = closed_endpoint().await;
        let provider = OpenAiCompatibleProvider::new(&url, "qwen-turbo", 5).unwrap();

        let err = provider.complete("sk-test", &request()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        assert!(OpenAiCompatibleProvider::new("not a url", "m", 5).is_err());
    }

    #[test]
    fn test_extract_error() {
        assert_eq!(extract_error(r#"{"error":{"message":"bad key"}}"#), "bad key");
        assert_eq!(extract_error(""), "empty body");
        assert_eq!(extract_error("oops"), "oops");
    }
}
