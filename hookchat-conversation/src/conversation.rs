//! Append-only conversation state.

use hookchat_core::{Message, Sender};

/// Copy of the synthetic welcome message every conversation opens with.
pub const WELCOME_TEXT: &str =
    "Hello! I'm here to help with anything about artificial intelligence and technology. \
     What would you like to know?";

/// Ordered message sequence driving the rendered view.
///
/// Append-only from the outside; only the dispatch path in this crate removes
/// the transient waiting placeholder it itself inserted. Messages carry their
/// creation timestamps, so the sequence is time-ordered by construction.
/// Lives for the process lifetime and is never persisted.
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Starts the conversation with the synthetic welcome message.
    pub fn new() -> Self {
        let mut conversation = Self { messages: Vec::new() };
        conversation.push(Message::text(Sender::Bot, WELCOME_TEXT));
        conversation
    }

    /// Appends a message and returns a reference to it.
    pub fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        self.messages.last().expect("just pushed")
    }

    /// Removes the message with the given id, returning it. Only used to take
    /// the waiting placeholder back out.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Message> {
        let index = self.messages.iter().position(|m| m.id == id)?;
        Some(self.messages.remove(index))
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
