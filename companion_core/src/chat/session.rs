//! Chat session - a transcript plus Root's pending replies.
//!
//! The reply text is chosen as soon as the user sends a line. Its delivery
//! is a tokio task that sleeps for the typing delay, owned by the session's
//! `JoinSet`. Cancelling or dropping the session aborts every pending reply
//! so none of them lands in an abandoned transcript.

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{ChatMessage, Transcript};
use crate::config::CompanionConfig;
use crate::reply::ReplyEngine;
use crate::typing::TypingDelay;

/// Unique identifier for chat sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One open conversation with Root.
pub struct ChatSession {
    id: SessionId,
    engine: ReplyEngine,
    delay: TypingDelay,
    transcript: Transcript,
    pending: JoinSet<ChatMessage>,
}

impl ChatSession {
    /// Start a session with the built-in rules plus any configured ones.
    pub fn new(config: &CompanionConfig) -> Self {
        Self::with_engine(config.reply_engine(), config)
    }

    /// Start a session with a custom rule table.
    pub fn with_engine(engine: ReplyEngine, config: &CompanionConfig) -> Self {
        Self {
            id: SessionId::new(),
            engine,
            delay: config.typing_delay(),
            transcript: Transcript::with_greeting(config.greeting.clone()),
            pending: JoinSet::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Number of replies still "typing".
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Send a user line and schedule Root's reply.
    ///
    /// Blank input is ignored and returns `None`. Must be called from within
    /// a Tokio runtime.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let reply = ChatMessage::bot(self.engine.reply(text));
        let delay = self.delay.sample();
        debug!(session = %self.id, delay_ms = delay.as_millis() as u64, "reply scheduled");

        self.pending.spawn(async move {
            tokio::time::sleep(delay).await;
            reply
        });

        Some(self.transcript.push(ChatMessage::user(text)))
    }

    /// Wait for the next reply to finish typing and append it.
    ///
    /// Replies arrive in the order their delays run out. `None` when no
    /// reply is pending.
    pub async fn next_reply(&mut self) -> Option<&ChatMessage> {
        loop {
            match self.pending.join_next().await? {
                Ok(message) => {
                    debug!(session = %self.id, message = %message.id, "reply delivered");
                    return Some(self.transcript.push(message));
                }
                Err(e) if e.is_cancelled() => continue,
                Err(e) => warn!(session = %self.id, error = %e, "reply task failed"),
            }
        }
    }

    /// Wait for every pending reply and append them all.
    pub async fn flush_replies(&mut self) -> usize {
        let mut delivered = 0;
        while self.next_reply().await.is_some() {
            delivered += 1;
        }
        delivered
    }

    /// Drop all pending replies. Returns how many were cancelled.
    pub fn cancel_pending(&mut self) -> usize {
        let cancelled = self.pending.len();
        if cancelled > 0 {
            debug!(session = %self.id, cancelled, "pending replies cancelled");
        }
        // dropping a JoinSet aborts its tasks
        drop(std::mem::take(&mut self.pending));
        cancelled
    }
}
