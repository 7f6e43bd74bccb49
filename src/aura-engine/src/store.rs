//! Ordered, single-owner message store.

use crate::message::{Message, MessageId};

/// The ordered record of one conversation.
///
/// Messages are kept strictly in insertion order and never re-sorted or
/// deleted. Ids are allocated from an internal counter and never
/// reused. The store has a single owner; the streaming simulator is
/// only ever handed a mutable borrow and mutates exactly one message,
/// identified by id.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fully-formed user message and returns its id.
    pub fn push_user(&mut self, content: impl Into<String>) -> MessageId {
        let id = self.alloc_id();
        self.messages.push(Message::user(id, content));
        id
    }

    /// Appends a system notice and returns its id.
    pub fn push_system(&mut self, content: impl Into<String>) -> MessageId {
        let id = self.alloc_id();
        self.messages.push(Message::system(id, content));
        id
    }

    /// Appends an empty assistant reply ready for streaming.
    pub fn push_assistant_reply(&mut self, has_thinking: bool) -> MessageId {
        let id = self.alloc_id();
        self.messages.push(Message::assistant_reply(id, has_thinking));
        id
    }

    /// Looks up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Looks up a message by id for in-place mutation.
    pub fn get_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// Iterates messages in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Message> {
        self.messages.iter()
    }

    /// Returns the most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn alloc_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}
