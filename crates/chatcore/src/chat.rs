//! Chat sessions and the send/reply state machine.
//!
//! The store is Ready or AwaitingResponse. [`ChatStore::begin_send`] appends
//! the user message and arms the global pending guard; the frontend waits the
//! simulated latency and calls [`ChatStore::apply_reply`], which appends the
//! synthesized assistant message and disarms the guard. One reply may be
//! pending system-wide, not one per session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One chat message. Immutable once created; owned by exactly one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self::with_timestamp(role, content, Utc::now())
    }

    fn with_timestamp(
        role: MessageRole,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at,
        }
    }
}

/// Selectable model identifiers. Cosmetic: the choice is echoed into the
/// synthesized reply and has no other effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    Gpt4,
    Gemini,
    Claude3Sonnet,
}

impl ChatModel {
    /// Identifier embedded verbatim into the synthesized reply.
    pub fn id(&self) -> &'static str {
        match self {
            ChatModel::Gpt4 => "gpt-4",
            ChatModel::Gemini => "gemini",
            ChatModel::Claude3Sonnet => "claude-3-sonnet",
        }
    }

    /// Human readable name for the selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatModel::Gpt4 => "GPT-4",
            ChatModel::Gemini => "Gemini",
            ChatModel::Claude3Sonnet => "Claude 3 Sonnet",
        }
    }

    pub fn all() -> Vec<ChatModel> {
        vec![ChatModel::Gpt4, ChatModel::Gemini, ChatModel::Claude3Sonnet]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "gpt-4" => Some(ChatModel::Gpt4),
            "gemini" => Some(ChatModel::Gemini),
            "claude-3-sonnet" => Some(ChatModel::Claude3Sonnet),
            _ => None,
        }
    }
}

impl Default for ChatModel {
    fn default() -> Self {
        ChatModel::Gpt4
    }
}

/// One conversation. Messages are append-only; insertion order is
/// chronological order. Sessions are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub last_updated_at: DateTime<Utc>,
}

impl ChatSession {
    fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            messages: Vec::new(),
            last_updated_at: Utc::now(),
        }
    }

    fn push(&mut self, message: Message) {
        self.last_updated_at = message.created_at;
        self.messages.push(message);
    }
}

/// A reply scheduled but not yet delivered. Applying it is the only way the
/// pending guard is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub session_id: String,
    pub content: String,
}

/// Session registry plus the active-session pointer and the pending guard.
///
/// Invariant: `active_id`, when set, references a session in the registry;
/// with no sessions it is `None` and the message pane renders nothing.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
    pending: bool,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store the chat page opens with: one seeded conversation, active.
    pub fn demo() -> Self {
        let now = Utc::now();
        let mut session = ChatSession::new("Document Analysis");
        session.push(Message::with_timestamp(
            MessageRole::User,
            "What are the main points from the uploaded documents?",
            now - Duration::minutes(30),
        ));
        session.push(Message::with_timestamp(
            MessageRole::Assistant,
            "Based on your uploaded documents, here are the main points I can identify...",
            now - Duration::minutes(29),
        ));
        let active_id = Some(session.id.clone());
        Self {
            sessions: vec![session],
            active_id,
            pending: false,
        }
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active_session(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// True while a synthesized reply is scheduled and not yet applied.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Inserts a fresh "New Chat" at the front of the registry and makes it
    /// the active session. Never fails.
    pub fn create_session(&mut self) -> String {
        let session = ChatSession::new("New Chat");
        let id = session.id.clone();
        self.sessions.insert(0, session);
        self.active_id = Some(id.clone());
        id
    }

    /// Activates the session with the given id. Unknown ids are a silent
    /// no-op that keeps the current pointer, so it can never dangle.
    pub fn select_session(&mut self, id: &str) {
        if self.sessions.iter().any(|s| s.id == id) {
            self.active_id = Some(id.to_string());
        }
    }

    /// Appends the user message to the active session and arms the pending
    /// guard. Returns the reply to schedule, or `None` (and mutates nothing)
    /// when the text is blank, a reply is already pending, or no session is
    /// active.
    pub fn begin_send(&mut self, text: &str, model: ChatModel) -> Option<PendingReply> {
        if text.trim().is_empty() || self.pending {
            return None;
        }
        let session_id = self.active_id.clone()?;
        let session = self.sessions.iter_mut().find(|s| s.id == session_id)?;
        session.push(Message::new(MessageRole::User, text));
        self.pending = true;
        Some(PendingReply {
            session_id,
            content: synthesize_reply(text, model),
        })
    }

    /// Delivers a scheduled reply: appends exactly one assistant message to
    /// its session and disarms the pending guard.
    pub fn apply_reply(&mut self, reply: PendingReply) {
        if let Some(session) = self.sessions.iter_mut().find(|s| s.id == reply.session_id) {
            session.push(Message::new(MessageRole::Assistant, reply.content));
        }
        self.pending = false;
    }
}

/// Deterministic canned answer echoing the question and the selected model.
pub fn synthesize_reply(text: &str, model: ChatModel) -> String {
    format!(
        "I understand your question about \"{}\". Based on the documents in your \
         knowledge base and using {}, here's my response...",
        text,
        model.id()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_session_prepends_and_activates() {
        let mut store = ChatStore::demo();
        let seeded_id = store.sessions()[0].id.clone();

        let id = store.create_session();
        assert_eq!(store.sessions().len(), 2);
        assert_eq!(store.sessions()[0].id, id);
        assert_eq!(store.sessions()[0].title, "New Chat");
        assert!(store.sessions()[0].messages.is_empty());
        assert_eq!(store.active_id(), Some(id.as_str()));
        assert_eq!(store.sessions()[1].id, seeded_id);
    }

    #[test]
    fn test_select_session_ignores_unknown_id() {
        let mut store = ChatStore::demo();
        let active = store.active_id().map(str::to_string);
        store.select_session("nonexistent");
        assert_eq!(store.active_id().map(str::to_string), active);
    }

    #[test]
    fn test_select_session_switches_between_known_sessions() {
        let mut store = ChatStore::demo();
        let first = store.sessions()[0].id.clone();
        store.create_session();
        store.select_session(&first);
        assert_eq!(store.active_id(), Some(first.as_str()));
    }

    #[test]
    fn test_send_appends_user_then_assistant() {
        let mut store = ChatStore::new();
        store.create_session();

        let reply = store
            .begin_send("hello", ChatModel::Gemini)
            .expect("send accepted");
        {
            let session = store.active_session().expect("active");
            assert_eq!(session.messages.len(), 1);
            assert_eq!(session.messages[0].role, MessageRole::User);
            assert_eq!(session.messages[0].content, "hello");
        }
        assert!(store.is_pending());

        store.apply_reply(reply);
        let session = store.active_session().expect("active");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[1].role, MessageRole::Assistant);
        assert!(!store.is_pending());
    }

    #[test]
    fn test_blank_send_never_mutates() {
        let mut store = ChatStore::demo();
        assert!(store.begin_send("", ChatModel::Gpt4).is_none());
        assert!(store.begin_send("   ", ChatModel::Gpt4).is_none());
        assert_eq!(store.active_session().unwrap().messages.len(), 2);
        assert!(!store.is_pending());
    }

    #[test]
    fn test_send_without_active_session_is_rejected() {
        let mut store = ChatStore::new();
        assert!(store.begin_send("hello", ChatModel::Gpt4).is_none());
        assert!(!store.is_pending());
    }

    #[test]
    fn test_second_send_while_pending_is_rejected() {
        let mut store = ChatStore::new();
        store.create_session();

        let reply = store
            .begin_send("first", ChatModel::Gpt4)
            .expect("first send accepted");
        assert!(store.begin_send("second", ChatModel::Gpt4).is_none());
        store.apply_reply(reply);

        let session = store.active_session().expect("active");
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].content, "first");
        assert_eq!(session.messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_guard_is_global_not_per_session() {
        let mut store = ChatStore::demo();
        let seeded = store.sessions()[0].id.clone();
        let fresh = store.create_session();

        let reply = store
            .begin_send("from fresh", ChatModel::Gpt4)
            .expect("send accepted");
        store.select_session(&seeded);
        assert!(store.begin_send("from seeded", ChatModel::Gpt4).is_none());

        store.apply_reply(reply);
        let fresh_session = store.sessions().iter().find(|s| s.id == fresh).unwrap();
        assert_eq!(fresh_session.messages.len(), 2);
    }

    #[test]
    fn test_reply_lands_in_originating_session_after_switch() {
        let mut store = ChatStore::demo();
        let seeded = store.sessions()[0].id.clone();
        let fresh = store.create_session();

        let reply = store.begin_send("hi", ChatModel::Gpt4).expect("accepted");
        store.select_session(&seeded);
        store.apply_reply(reply);

        let fresh_session = store.sessions().iter().find(|s| s.id == fresh).unwrap();
        assert_eq!(fresh_session.messages.len(), 2);
        assert_eq!(
            fresh_session.messages[1].role,
            MessageRole::Assistant
        );
        assert_eq!(store.sessions().iter().find(|s| s.id == seeded).unwrap().messages.len(), 2);
    }

    #[test]
    fn test_seeded_scenario_reply_echoes_question_and_model() {
        let mut store = ChatStore::demo();
        store.select_session("nonexistent");
        assert_eq!(store.active_session().unwrap().messages.len(), 2);

        let reply = store
            .begin_send("What is X?", ChatModel::Claude3Sonnet)
            .expect("send accepted");
        assert_eq!(store.active_session().unwrap().messages.len(), 3);

        store.apply_reply(reply);
        let session = store.active_session().unwrap();
        assert_eq!(session.messages.len(), 4);
        let answer = &session.messages[3].content;
        assert!(answer.contains("What is X?"));
        assert!(answer.contains("claude-3-sonnet"));
    }

    #[test]
    fn test_messages_stay_in_chronological_order() {
        let mut store = ChatStore::new();
        store.create_session();
        let reply = store.begin_send("q", ChatModel::Gpt4).unwrap();
        store.apply_reply(reply);

        let session = store.active_session().unwrap();
        assert!(session.messages[0].created_at <= session.messages[1].created_at);
        assert_eq!(session.last_updated_at, session.messages[1].created_at);
    }
}
