use rand::Rng;
use rand::rngs::StdRng;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::command::{Input, parse_input};
use super::resolver::{Effect, Resolver};
use super::transcript::{Message, MessageKind, Transcript};
use super::typing::{Delivery, TypingDelay};

/// One accepted submission: the assistant message waiting to be shown
/// and what it does to the session.
#[derive(Debug, Clone)]
pub struct Turn {
    pub reply: Message,
    pub effect: Effect,
}

impl Turn {
    /// Whether the reply should wait out the typing delay before delivery.
    pub fn is_delayed(&self) -> bool {
        self.effect == Effect::None
    }
}

/// A resolver bound to the transcript it writes into.
pub struct Conversation<R = StdRng> {
    resolver: Resolver<R>,
    transcript: Transcript,
}

impl<R: Rng> Conversation<R> {
    pub const fn new(resolver: Resolver<R>, transcript: Transcript) -> Self {
        Self {
            resolver,
            transcript,
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Records the user's input and resolves the reply.
    ///
    /// Blank input is ignored. A clear command resets the transcript right
    /// away; every other reply must be handed back through
    /// [`Conversation::deliver`] to appear in the transcript.
    pub fn submit(&mut self, input: &str) -> Option<Turn> {
        let parsed = parse_input(input);
        let kind = match parsed {
            Input::Empty => return None,
            Input::Command(_) => MessageKind::Command,
            Input::Text(_) => MessageKind::Plain,
        };
        let reply = self.resolver.resolve_parsed(&parsed)?;

        if reply.effect == Effect::ClearTranscript {
            self.transcript.clear(reply.text.clone());
        } else {
            self.transcript.push(Message::user(kind, input.trim()));
        }

        Some(Turn {
            effect: reply.effect,
            reply: reply.into_message(),
        })
    }

    pub fn deliver(&mut self, turn: Turn) {
        if turn.effect != Effect::ClearTranscript {
            self.transcript.push(turn.reply);
        }
    }

    /// Waits out the typing delay for `input`, then delivers `turn`.
    ///
    /// If `token` is cancelled first the reply is dropped and the
    /// transcript is left as it was.
    pub async fn deliver_after(
        &mut self,
        turn: Turn,
        typing: &TypingDelay,
        input: &str,
        token: &CancellationToken,
    ) -> Delivery {
        let outcome = typing.wait(input, token).await;
        match outcome {
            Delivery::Delivered => self.deliver(turn),
            Delivery::Cancelled => debug!("pending reply dropped"),
        }
        outcome
    }

    /// Submits and delivers immediately, skipping any delay.
    pub fn exchange(&mut self, input: &str) -> Option<&Message> {
        let turn = self.submit(input)?;
        self.deliver(turn);
        self.transcript.last()
    }
}
