//! The portfolio assistant: command table, keyword replies, transcript
//! and the interactive session around them.
//!
//! [`Resolver`] is the pure core; [`Conversation`] binds it to a
//! [`Transcript`]; [`ChatSession`] adds the terminal prompt and the
//! cancellable typing delay.

/// Slash command parsing, canned responses and autocomplete.
pub mod command;
mod conversation;
mod resolver;
mod session;
/// Keyword groups and their candidate replies.
pub mod topics;
mod transcript;
mod typing;
mod ui;

pub use command::{COMMANDS, CommandInfo, SlashCommand};
pub use conversation::{Conversation, Turn};
pub use resolver::{Effect, Reply, Resolver};
pub use session::{ChatSession, GREETING, SessionConfig};
pub use topics::Topic;
pub use transcript::{Message, MessageKind, Sender, Transcript};
pub use typing::{Delivery, TypingDelay};
pub use ui::print_commands;
