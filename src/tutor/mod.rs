//! Tutor module - AI tutoring pipeline
//!
//! ```text
//! ChatSession ──► TutorClient ──► ChatProvider (HTTP)
//!                      │
//!                      └──► FallbackTable (on failure)
//! ```

pub mod client;
pub mod fallback;
pub mod message;
pub mod prompt;
pub mod provider;
pub mod session;

pub use client::{AnswerSource, TutorClient, TutorReply, TutorRequest, MISSING_CREDENTIAL_MESSAGE};
pub use fallback::{FallbackEntry, FallbackTable, GENERIC_ANSWER};
pub use message::{ChatMessage, Role};
pub use prompt::KnowledgeContext;
pub use provider::{ChatCompletion, ChatProvider, OpenAiCompatibleProvider, ProviderError};
pub use session::{ChatSession, PendingTurn, SessionError};
