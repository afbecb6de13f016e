//! Chat Sessions
//!
//! Transcripts live in memory only and disappear with the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::debug;
use uuid::Uuid;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role name as used by chat-completion APIs
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One transcript entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Transcript of one user's conversation
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    messages: VecDeque<ChatMessage>,
    #[serde(skip)]
    max_history: usize,
    /// Store tick of the most recent access
    #[serde(skip)]
    last_active: u64,
}

impl ChatSession {
    /// Start an empty session keeping at most `max_history` messages
    pub fn new(max_history: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            messages: VecDeque::new(),
            max_history: max_history.max(2),
            last_active: 0,
        }
    }

    /// Append a message, dropping the oldest when full
    pub fn push(&mut self, message: ChatMessage) {
        while self.messages.len() >= self.max_history {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Messages, oldest first
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// In-memory session table
///
/// Holds at most `max_sessions` transcripts; starting one more evicts the
/// least recently used.
#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<Uuid, ChatSession>,
    max_history: usize,
    max_sessions: usize,
    clock: u64,
}

impl SessionStore {
    pub fn new(max_history: usize, max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            max_history,
            max_sessions: max_sessions.max(1),
            clock: 0,
        }
    }

    /// Fetch the session for `id`, creating a fresh one when absent
    pub fn get_or_create(&mut self, id: Option<Uuid>) -> &mut ChatSession {
        self.clock += 1;
        let (max_history, now) = (self.max_history, self.clock);

        let id = match id {
            Some(id) if self.sessions.contains_key(&id) => id,
            _ => {
                while self.sessions.len() >= self.max_sessions {
                    self.evict_idlest();
                }
                let session = ChatSession::new(max_history);
                let id = session.id;
                debug!("Starting chat session {}", id);
                self.sessions.insert(id, session);
                id
            }
        };

        let session = self
            .sessions
            .entry(id)
            .or_insert_with(|| ChatSession::new(max_history));
        session.last_active = now;
        session
    }

    fn evict_idlest(&mut self) {
        let idlest = self
            .sessions
            .values()
            .min_by_key(|s| s.last_active)
            .map(|s| s.id);
        if let Some(id) = idlest {
            debug!("Evicting idle chat session {}", id);
            self.sessions.remove(&id);
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&ChatSession> {
        self.sessions.get(id)
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }
}
