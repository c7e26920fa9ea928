//! Chat session - Ordered conversation history
//!
//! History is append-only. Every question gets a ULID turn id when it is
//! submitted; the answer is appended when it arrives, tagged with that id.
//! With overlapping requests, answers land in arrival order but each one
//! stays paired with the question that produced it.

use std::collections::HashSet;

use thiserror::Error;
use ulid::Ulid;

use super::client::TutorRequest;
use super::message::{ChatMessage, Role};
use super::prompt::KnowledgeContext;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown or already answered turn: {0}")]
    UnknownTurn(Ulid),
}

/// A submitted question waiting for its answer
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub id: Ulid,
    pub question: String,
    /// History as it stood before this question
    pub history: Vec<ChatMessage>,
}

/// A history entry with the turn it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub turn: Ulid,
    pub message: ChatMessage,
}

/// Conversation about one knowledge point
#[derive(Debug, Clone)]
pub struct ChatSession {
    knowledge_id: String,
    context: KnowledgeContext,
    entries: Vec<SessionEntry>,
    pending: HashSet<Ulid>,
}

impl ChatSession {
    pub fn new(knowledge_id: impl Into<String>, context: KnowledgeContext) -> Self {
        Self {
            knowledge_id: knowledge_id.into(),
            context,
            entries: Vec::new(),
            pending: HashSet::new(),
        }
    }

    pub fn knowledge_id(&self) -> &str {
        &self.knowledge_id
    }

    /// Record a user question and open a turn for it
    pub fn submit(&mut self, question: impl Into<String>) -> PendingTurn {
        let question = question.into();
        let history = self.history();
        let id = Ulid::new();

        self.entries.push(SessionEntry {
            turn: id,
            message: ChatMessage::user(question.clone()),
        });
        self.pending.insert(id);

        PendingTurn {
            id,
            question,
            history,
        }
    }

    /// Build the tutoring request for a pending turn
    pub fn request(&self, turn: &PendingTurn, credential: Option<String>) -> TutorRequest {
        TutorRequest::new(&self.knowledge_id, &turn.question, self.context.clone())
            .with_history(turn.history.clone())
            .with_credential(credential)
    }

    /// Append the answer for a turn
    pub fn resolve(&mut self, turn: Ulid, answer: impl Into<String>) -> Result<(), SessionError> {
        if !self.pending.remove(&turn) {
            return Err(SessionError::UnknownTurn(turn));
        }
        self.entries.push(SessionEntry {
            turn,
            message: ChatMessage::assistant(answer),
        });
        Ok(())
    }

    /// Give up on a turn; a late answer for it is then rejected
    pub fn abandon(&mut self, turn: Ulid) -> bool {
        self.pending.remove(&turn)
    }

    /// Messages in the order they were appended
    pub fn history(&self) -> Vec<ChatMessage> {
        self.entries.iter().map(|e| e.message.clone()).collect()
    }

    pub fn entries(&self) -> &[SessionEntry] {
        &self.entries
    }

    /// Answer recorded for a turn, if any
    pub fn answer_for(&self, turn: Ulid) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.turn == turn && e.message.role == Role::Assistant)
            .map(|e| e.message.content.as_str())
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ChatSession {
        ChatSession::new("earth-rotation", KnowledgeContext::generic())
    }

    #[test]
    fn test_sequential_turns() {
        let mut session = session();

        let first = session.submit("q1");
        assert!(first.history.is_empty());
        session.resolve(first.id, "a1").unwrap();

        let second = session.submit("q2");
        assert_eq!(second.history, vec![ChatMessage::user("q1"), ChatMessage::assistant("a1")]);
        session.resolve(second.id, "a2").unwrap();

        let contents: Vec<_> = session.history().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, ["q1", "a1", "q2", "a2"]);
        assert!(!session.has_pending());
    }

    #[test]
    fn test_overlapping_turns_stay_paired() {
        let mut session = session();

        let first = session.submit("q1");
        let second = session.submit("q2");
        assert_eq!(second.history, vec![ChatMessage::user("q1")]);

        // Second answer arrives first
        session.resolve(second.id, "a2").unwrap();
        session.resolve(first.id, "a1").unwrap();

        assert_eq!(session.answer_for(first.id), Some("a1"));
        assert_eq!(session.answer_for(second.id), Some("a2"));

        let contents: Vec<_> = session.history().into_iter().map(|m| m.content).collect();
        assert_eq!(contents, ["q1", "q2", "a2", "a1"]);
    }

    #[test]
    fn test_resolve_twice_rejected() {
        let mut session = session();
        let turn = session.submit("q");
        session.resolve(turn.id, "a").unwrap();
        assert_eq!(
            session.resolve(turn.id, "again"),
            Err(SessionError::UnknownTurn(turn.id))
        );
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn test_abandoned_turn_rejects_late_answer() {
        let mut session = session();
        let turn = session.submit("q");
        assert!(session.abandon(turn.id));
        assert!(session.resolve(turn.id, "late").is_err());
        assert_eq!(session.answer_for(turn.id), None);
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_request_carries_snapshot() {
        let mut session = session();
        let first = session.submit("q1");
        session.resolve(first.id, "a1").unwrap();
        let turn = session.submit("q2");

        let request = session.request(&turn, Some("sk".into()));
        assert_eq!(request.knowledge_id, "earth-rotation");
        assert_eq!(request.question, "q2");
        assert_eq!(request.history.len(), 2);
        assert_eq!(request.credential.as_deref(), Some("sk"));
    }
}
