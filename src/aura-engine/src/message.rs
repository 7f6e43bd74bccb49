//! Conversation message types.
//!
//! A [`Message`] is mutated in place by the streaming simulator while a
//! reply is being revealed, then becomes immutable once streaming ends.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};

// ============================================================
// IDENTIFIERS
// ============================================================

/// Unique, monotonically-assigned message identifier.
///
/// Ids are allocated by [`crate::MessageStore`] and are never reused
/// within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub(crate) u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

// ============================================================
// ROLE AND PHASE
// ============================================================

/// Identifies the sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Message typed by the user
    User,
    /// Simulated assistant reply
    Assistant,
    /// System-level notice shown in the transcript
    System,
}

impl Role {
    /// Returns the display prefix for this role.
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::User => "> ",
            Role::Assistant => "",
            Role::System => "System: ",
        }
    }
}

/// Which part of a reply is currently being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    /// The simulated reasoning text shown before the answer
    Thinking,
    /// The simulated final answer text
    Response,
}

// ============================================================
// MESSAGE
// ============================================================

/// A single conversation message.
///
/// User and system messages are fully formed at creation. Assistant
/// replies start empty and are appended to, one character per tick, by
/// [`crate::StreamSimulator`] until both phases complete.
#[derive(Debug, Clone)]
pub struct Message {
    /// Identifier assigned by the store at creation time.
    pub id: MessageId,
    /// Who sent the message.
    pub role: Role,
    /// The response text accumulated so far (final once streaming ends).
    pub content: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
    /// Reasoning text accumulated during the thinking phase.
    pub thinking_content: Option<String>,
    /// True while the thinking phase is actively being revealed.
    pub is_thinking: bool,
    /// True while any phase is actively appending characters.
    pub is_streaming: bool,
    /// Which phase is currently active, if any.
    pub streaming_phase: Option<StreamPhase>,
    /// Whether this message will ever show a thinking section.
    /// Fixed at creation.
    pub has_thinking_content: bool,
    /// When the thinking phase started revealing.
    pub thinking_started_at: Option<Instant>,
    /// Whole seconds spent thinking, computed once the phase ends.
    pub thinking_duration_secs: Option<u64>,
}

impl Message {
    /// Creates a fully-formed user message. User messages never stream.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::plain(id, Role::User, content)
    }

    /// Creates a fully-formed system message.
    pub fn system(id: MessageId, content: impl Into<String>) -> Self {
        Self::plain(id, Role::System, content)
    }

    /// Creates an assistant reply that is about to start streaming.
    ///
    /// With `has_thinking` the message enters the thinking phase
    /// (empty thinking buffer, start time recorded); otherwise it goes
    /// straight to the response phase.
    pub fn assistant_reply(id: MessageId, has_thinking: bool) -> Self {
        if has_thinking {
            Self {
                id,
                role: Role::Assistant,
                content: String::new(),
                timestamp: Utc::now(),
                thinking_content: Some(String::new()),
                is_thinking: true,
                is_streaming: true,
                streaming_phase: Some(StreamPhase::Thinking),
                has_thinking_content: true,
                thinking_started_at: Some(Instant::now()),
                thinking_duration_secs: None,
            }
        } else {
            Self {
                id,
                role: Role::Assistant,
                content: String::new(),
                timestamp: Utc::now(),
                thinking_content: None,
                is_thinking: false,
                is_streaming: true,
                streaming_phase: Some(StreamPhase::Response),
                has_thinking_content: false,
                thinking_started_at: None,
                thinking_duration_secs: None,
            }
        }
    }

    fn plain(id: MessageId, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            timestamp: Utc::now(),
            thinking_content: None,
            is_thinking: false,
            is_streaming: false,
            streaming_phase: None,
            has_thinking_content: false,
            thinking_started_at: None,
            thinking_duration_secs: None,
        }
    }

    /// Returns `true` if the given phase is actively streaming on this
    /// message.
    pub fn is_streaming_phase(&self, phase: StreamPhase) -> bool {
        self.is_streaming && self.streaming_phase == Some(phase)
    }

    /// Returns the thinking text revealed so far, treating a missing
    /// buffer as empty. Rendering must never fail on a
    /// partially-populated message.
    pub fn thinking_text(&self) -> &str {
        self.thinking_content.as_deref().unwrap_or("")
    }
}
