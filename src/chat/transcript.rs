use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    System,
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Free text.
    Plain,
    /// Slash command input, or the output of an action command.
    Command,
    /// Informational answer.
    Reply,
    /// Unrecognized command or bad arguments.
    Error,
    /// Nudge to rephrase.
    Suggestion,
}

/// A single transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(sender: Sender, kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn user(kind: MessageKind, text: impl Into<String>) -> Self {
        Self::new(Sender::User, kind, text)
    }

    pub fn assistant(kind: MessageKind, text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, kind, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Sender::System, MessageKind::Plain, text)
    }
}

/// Ordered, append-only message log for one session.
///
/// The only non-append mutation is [`Transcript::clear`], which replaces
/// the whole log with a single system message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Creates a transcript opening with a system greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(greeting)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self, notice: impl Into<String>) {
        self.messages = vec![Message::system(notice)];
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Counts messages from one sender.
    pub fn count_from(&self, sender: Sender) -> usize {
        self.messages.iter().filter(|m| m.sender == sender).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
