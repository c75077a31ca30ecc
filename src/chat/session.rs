use anyhow::{Context, Result};
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::command::{GOODBYE, SlashCommandCompleter};
use super::conversation::{Conversation, Turn};
use super::resolver::{Effect, Resolver};
use super::transcript::Transcript;
use super::typing::{Delivery, TypingDelay};
use super::ui;
use crate::output;
use crate::profile;
use crate::ui::{Spinner, Style, is_prompt_cancelled};

/// Opening line of every session.
pub const GREETING: &str = "Hello! How can I assist you today?";

/// Configuration for a chat session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Delay model for replies.
    pub typing: TypingDelay,
    /// Fixed seed for reply selection.
    pub seed: Option<u64>,
    /// Where to write the transcript as JSON when the session ends.
    pub transcript_path: Option<PathBuf>,
}

/// An interactive chat session with the portfolio assistant.
pub struct ChatSession {
    config: SessionConfig,
    conversation: Conversation,
}

/// Why the prompt loop stopped.
enum Exit {
    Quit,
    Interrupted,
    Failed(anyhow::Error),
}

impl ChatSession {
    pub fn new(config: SessionConfig) -> Self {
        let resolver = config
            .seed
            .map_or_else(Resolver::from_entropy, Resolver::seeded);
        let conversation = Conversation::new(resolver, Transcript::with_greeting(GREETING));
        Self {
            config,
            conversation,
        }
    }

    pub const fn transcript(&self) -> &Transcript {
        self.conversation.transcript()
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();
        if let Some(greeting) = self.transcript().last() {
            ui::print_message(greeting);
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightCyan)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkCyan));

        let exit = loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_placeholder("Ask something...")
                .with_help_message("Ask about projects or skills, /help for commands, Ctrl+C to quit")
                .prompt();

            let line = match input {
                Ok(line) => line,
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break Exit::Interrupted;
                }
                Err(e) => break Exit::Failed(e.into()),
            };

            let Some(turn) = self.conversation.submit(&line) else {
                continue;
            };

            match turn.effect {
                Effect::EndSession => {
                    self.conversation.deliver(turn);
                    break Exit::Quit;
                }
                Effect::ClearTranscript => {
                    ui::print_message(&turn.reply);
                    self.conversation.deliver(turn);
                }
                Effect::None => {
                    if self.reply_after_delay(turn, &line).await == Delivery::Cancelled {
                        println!();
                        break Exit::Interrupted;
                    }
                }
            }
        };

        self.finish(exit)
    }

    /// Saves the transcript however the loop ended, then reports a prompt
    /// failure if there was one.
    fn finish(&self, exit: Exit) -> Result<()> {
        debug!(
            messages = self.transcript().len(),
            interrupted = matches!(exit, Exit::Interrupted),
            "chat session ended"
        );

        if let Exit::Failed(err) = exit {
            if let Err(save_err) = self.save_transcript() {
                warn!("{save_err:#}");
            }
            return Err(err.context("Prompt failed"));
        }

        ui::print_goodbye(GOODBYE);
        self.save_transcript()
    }

    /// Waits out the typing delay, then shows and records the reply.
    /// Ctrl+C during the delay drops it.
    async fn reply_after_delay(&mut self, turn: Turn, input: &str) -> Delivery {
        let token = CancellationToken::new();
        let watcher = tokio::spawn({
            let token = token.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            }
        });

        let spinner = (!output::is_quiet() && !self.config.typing.for_input(input).is_zero())
            .then(|| Spinner::new(&format!("{} is typing", profile::ASSISTANT_NAME)));

        let typing = self.config.typing;
        let outcome = self
            .conversation
            .deliver_after(turn, &typing, input, &token)
            .await;

        if let Some(spinner) = spinner {
            spinner.stop();
        }
        watcher.abort();

        if outcome == Delivery::Delivered {
            if let Some(reply) = self.transcript().last() {
                ui::print_message(reply);
            }
        }
        outcome
    }

    fn save_transcript(&self) -> Result<()> {
        let Some(path) = &self.config.transcript_path else {
            return Ok(());
        };

        let json = self
            .transcript()
            .to_json()
            .context("Failed to serialize transcript")?;
        crate::fs::atomic_write(path, &json)?;

        crate::status!(
            "{} Transcript saved to {}",
            Style::success("✓"),
            Style::secondary(path.display())
        );
        Ok(())
    }
}
