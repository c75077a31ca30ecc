use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::command::{Input, parse_input};
use super::topics::{ELABORATE, MIN_FALLBACK_CHARS, Topic};
use super::transcript::{Message, MessageKind};

/// Side effect a reply has on the session beyond being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    ClearTranscript,
    EndSession,
}

/// The assistant's answer to one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: MessageKind,
    pub text: String,
    pub effect: Effect,
}

impl Reply {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            effect: Effect::None,
        }
    }

    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    pub fn into_message(self) -> Message {
        Message::assistant(self.kind, self.text)
    }
}

/// Maps user input to exactly one assistant reply.
///
/// Slash input goes through the command table; everything else is
/// classified by keyword group, with the reply picked from the group's
/// candidates using the injected random source.
pub struct Resolver<R = StdRng> {
    rng: R,
}

impl Resolver<StdRng> {
    /// A resolver whose picks are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Resolver<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Resolves one input. Returns `None` for blank input.
    pub fn resolve(&mut self, input: &str) -> Option<Reply> {
        self.resolve_parsed(&parse_input(input))
    }

    /// Resolves input the caller has already run through [`parse_input`].
    pub fn resolve_parsed(&mut self, input: &Input) -> Option<Reply> {
        match input {
            Input::Empty => None,
            Input::Command(cmd) => {
                debug!(?cmd, "resolved slash command");
                Some(cmd.respond())
            }
            Input::Text(text) => Some(self.resolve_text(text)),
        }
    }

    fn resolve_text(&mut self, text: &str) -> Reply {
        let lowered = text.to_lowercase();

        let topic = match Topic::classify(&lowered) {
            Some(topic) => topic,
            None if text.chars().count() < MIN_FALLBACK_CHARS => {
                debug!(len = text.len(), "short unmatched input");
                return Reply::new(MessageKind::Suggestion, ELABORATE);
            }
            None => Topic::Fallback,
        };

        debug!(?topic, "classified free text");
        Reply::new(MessageKind::Reply, self.pick(topic))
    }

    fn pick(&mut self, topic: Topic) -> &'static str {
        topic.replies().choose(&mut self.rng).copied().unwrap_or_default()
    }
}
