//! Tutoring client
//!
//! Turns a question about a knowledge point into exactly one provider call
//! and always produces an answer:
//!
//! ```text
//! no credential ──────────────► instructional message   (no I/O)
//! provider ok   ──────────────► provider content         (unmodified)
//! provider err / bad body ────► FallbackTable::answer
//! ```
//!
//! No retries. The user re-asks.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use super::fallback::FallbackTable;
use super::message::ChatMessage;
use super::prompt::{system_prompt, KnowledgeContext};
use super::provider::{ChatCompletion, ChatProvider};
use crate::config::ProviderConfig;

/// Shown when no provider credential is configured
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "请先在设置页面配置通义千问 API Key 才能使用 AI 辅导功能。";

/// One tutoring question
#[derive(Debug, Clone)]
pub struct TutorRequest {
    /// Knowledge point the question is about (keys the fallback table)
    pub knowledge_id: String,
    pub question: String,
    pub context: KnowledgeContext,
    /// Prior turns, oldest first
    pub history: Vec<ChatMessage>,
    pub credential: Option<String>,
}

impl TutorRequest {
    pub fn new(
        knowledge_id: impl Into<String>,
        question: impl Into<String>,
        context: KnowledgeContext,
    ) -> Self {
        Self {
            knowledge_id: knowledge_id.into(),
            question: question.into(),
            context,
            history: Vec::new(),
            credential: None,
        }
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential;
        self
    }
}

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    Provider,
    Fallback,
    MissingCredential,
}

/// The assistant's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorReply {
    pub answer: String,
    pub source: AnswerSource,
}

impl TutorReply {
    pub fn is_preset(&self) -> bool {
        self.source == AnswerSource::Fallback
    }
}

/// Tutoring client over any [`ChatProvider`]
#[derive(Clone)]
pub struct TutorClient {
    provider: Arc<dyn ChatProvider>,
    fallback: Arc<FallbackTable>,
    max_tokens: u32,
    temperature: f32,
}

impl TutorClient {
    pub fn new(provider: Arc<dyn ChatProvider>, fallback: FallbackTable, config: &ProviderConfig) -> Self {
        Self {
            provider,
            fallback: Arc::new(fallback),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    pub fn fallback(&self) -> &FallbackTable {
        &self.fallback
    }

    /// Build the provider request: system prompt, history, then the question
    pub fn build_completion(&self, request: &TutorRequest) -> ChatCompletion {
        let mut messages = Vec::with_capacity(request.history.len() + 2);
        messages.push(ChatMessage::system(system_prompt(&request.context)));
        messages.extend(request.history.iter().cloned());
        messages.push(ChatMessage::user(request.question.trim()));

        ChatCompletion {
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Answer a question. Never fails.
    pub async fn ask(&self, request: &TutorRequest) -> TutorReply {
        let credential = match request.credential.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => {
                debug!(knowledge_id = %request.knowledge_id, "no credential configured");
                return TutorReply {
                    answer: MISSING_CREDENTIAL_MESSAGE.to_string(),
                    source: AnswerSource::MissingCredential,
                };
            }
        };

        if request.question.trim().is_empty() {
            return self.fallback_reply(request);
        }

        let completion = self.build_completion(request);
        match self.provider.complete(credential, &completion).await {
            Ok(answer) => {
                debug!(
                    provider = self.provider.name(),
                    knowledge_id = %request.knowledge_id,
                    answer_len = answer.len(),
                    "provider answered"
                );
                TutorReply {
                    answer,
                    source: AnswerSource::Provider,
                }
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    knowledge_id = %request.knowledge_id,
                    error = %e,
                    "provider call failed, using fallback answer"
                );
                self.fallback_reply(request)
            }
        }
    }

    fn fallback_reply(&self, request: &TutorRequest) -> TutorReply {
        TutorReply {
            answer: self
                .fallback
                .answer(&request.knowledge_id, &request.question)
                .to_string(),
            source: AnswerSource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::tutor::fallback::FallbackEntry;
    use crate::tutor::message::Role;
    use crate::tutor::provider::testing::{closed_endpoint, MockEndpoint, Reply};
    use crate::tutor::provider::{OpenAiCompatibleProvider, ProviderError};

    /// Scripted provider that records calls
    struct Scripted {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        seen: Mutex<Vec<ChatCompletion>>,
    }

    impl Scripted {
        fn new(reply: Result<String, u16>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatProvider for Scripted {
        async fn complete(
            &self,
            _credential: &str,
            request: &ChatCompletion,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(code) => Err(ProviderError::Status(*code, "boom".into())),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn fallback() -> FallbackTable {
        FallbackTable::new().with_entry(
            "earth-rotation",
            FallbackEntry::new("default answer").keyword("speed", "speed answer"),
        )
    }

    fn client(provider: Arc<dyn ChatProvider>) -> TutorClient {
        TutorClient::new(provider, fallback(), &ProviderConfig::default())
    }

    fn request(question: &str) -> TutorRequest {
        let context = KnowledgeContext {
            title: "地球的自转".into(),
            description: "地球绕地轴自西向东旋转".into(),
            keywords: vec!["自转".into(), "角速度".into()],
            extra: None,
        };
        TutorRequest::new("earth-rotation", question, context)
            .with_credential(Some("sk-test".into()))
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let provider = Scripted::new(Ok("never".into()));
        let client = client(provider.clone());

        for credential in [None, Some(String::new()), Some("   ".to_string())] {
            let reply = client
                .ask(&request("what speed?").with_credential(credential))
                .await;
            assert_eq!(reply.answer, MISSING_CREDENTIAL_MESSAGE);
            assert_eq!(reply.source, AnswerSource::MissingCredential);
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_answer_is_unmodified() {
        let provider = Scripted::new(Ok("  exact answer \n".into()));
        let client = client(provider.clone());

        let reply = client.ask(&request("what speed?")).await;
        assert_eq!(reply.answer, "  exact answer \n");
        assert_eq!(reply.source, AnswerSource::Provider);
        assert!(!reply.is_preset());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_matches_fallback() {
        let provider = Scripted::new(Err(500));
        let client = client(provider.clone());

        for question in ["what speed?", "why?"] {
            let reply = client.ask(&request(question)).await;
            assert_eq!(reply.answer, fallback().answer("earth-rotation", question));
            assert!(reply.is_preset());
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_message_order() {
        let provider = Scripted::new(Ok("ok".into()));
        let client = client(provider.clone());

        let history = vec![ChatMessage::user("first"), ChatMessage::assistant("reply")];
        client
            .ask(&request("  second  ").with_history(history))
            .await;

        let seen = provider.seen.lock().unwrap();
        let messages = &seen[0].messages;
        let roles: Vec<_> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::System, Role::User, Role::Assistant, Role::User]);
        assert!(messages[0].content.contains("地球的自转"));
        assert!(messages[0].content.contains("自转、角速度"));
        assert_eq!(messages[1].content, "first");
        assert_eq!(messages[3].content, "second");
        assert_eq!(seen[0].max_tokens, 800);
    }

    #[tokio::test]
    async fn test_blank_question_skips_provider() {
        let provider = Scripted::new(Ok("never".into()));
        let client = client(provider.clone());

        let reply = client.ask(&request("  ")).await;
        assert_eq!(reply.answer, "default answer");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_over_http_success() {
        let mock = MockEndpoint::start(Reply::Ok("地球自西向东自转。".into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();
        let client = client(Arc::new(provider));

        let reply = client.ask(&request("方向？")).await;
        assert_eq!(reply.answer, "地球自西向东自转。");
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn test_over_http_500_falls_back() {
        let mock = MockEndpoint::start(Reply::Status(500)).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();
        let client = client(Arc::new(provider));

        let reply = client.ask(&request("what speed?")).await;
        assert_eq!(reply.answer, "speed answer");
        assert_eq!(reply.source, AnswerSource::Fallback);
    }

    #[tokio::test]
    async fn test_over_http_transport_error_falls_back() {
        let url = closed_endpoint().await;
        let provider = OpenAiCompatibleProvider::new(&url, "qwen-turbo", 5).unwrap();
        let client = client(Arc::new(provider));

        let reply = client.ask(&request("why?")).await;
        assert_eq!(reply.answer, fallback().answer("earth-rotation", "why?"));
    }

    #[tokio::test]
    async fn test_over_http_malformed_falls_back() {
        let mock = MockEndpoint::start(Reply::Raw("{\"unexpected\":true}".into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();
        let client = client(Arc::new(provider));

        let reply = client.ask(&request("why?")).await;
        assert!(reply.is_preset());
    }

    #[tokio::test]
    async fn test_over_http_empty_content_falls_back() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":""}}]}"#;
        let mock = MockEndpoint::start(Reply::Raw(body.into())).await;
        let provider = OpenAiCompatibleProvider::new(&mock.url, "qwen-turbo", 5).unwrap();
        let client = client(Arc::new(provider));

        let reply = client.ask(&request("what speed?")).await;
        assert_eq!(reply.answer, "speed answer");
        assert_eq!(reply.source, AnswerSource::Fallback);
        assert_eq!(mock.hits(), 1);
    }
}
