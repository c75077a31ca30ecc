//! Configure command handler for editing chat settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Text};
use std::path::PathBuf;

use crate::chat::TypingDelay;
use crate::config::{ChatConfig, ConfigFile, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings; otherwise prompts for each
/// setting, pre-filled with the current value, and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        let config = manager.load_or_default()?;
        print_current_settings(&config, &manager);
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;

    print_current_settings(&config, &manager);

    let defaults = TypingDelay::default();
    let current = &config.chat;

    let typing_base_ms = prompt_millis(
        "Typing delay base (ms):",
        current
            .typing_base_ms
            .unwrap_or(defaults.base.as_millis() as u64),
    )?;
    let typing_per_char_ms = prompt_millis(
        "Typing delay per character (ms):",
        current
            .typing_per_char_ms
            .unwrap_or(defaults.per_char.as_millis() as u64),
    )?;
    let typing_max_ms = prompt_millis(
        "Typing delay cap (ms):",
        current
            .typing_max_ms
            .unwrap_or(defaults.max.as_millis() as u64),
    )?;

    if typing_max_ms < typing_base_ms {
        bail!(
            "Typing delay cap ({typing_max_ms} ms) must not be below the base ({typing_base_ms} ms)"
        );
    }

    let seed = prompt_optional_seed(current.seed)?;
    let transcript = prompt_optional_path(current.transcript.as_ref())?;

    config.chat = ChatConfig {
        typing_base_ms: Some(typing_base_ms),
        typing_per_char_ms: Some(typing_per_char_ms),
        typing_max_ms: Some(typing_max_ms),
        seed,
        transcript,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings(config: &ConfigFile, manager: &ConfigManager) {
    let chat = &config.chat;
    let show_ms = |v: Option<u64>| {
        v.map_or_else(
            || Style::secondary("(default)"),
            |ms| Style::value(format!("{ms} ms")),
        )
    };

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}      {}",
        Style::label("typing_base_ms"),
        show_ms(chat.typing_base_ms)
    );
    println!(
        "  {}  {}",
        Style::label("typing_per_char_ms"),
        show_ms(chat.typing_per_char_ms)
    );
    println!(
        "  {}       {}",
        Style::label("typing_max_ms"),
        show_ms(chat.typing_max_ms)
    );
    println!(
        "  {}                {}",
        Style::label("seed"),
        chat.seed
            .map_or_else(|| Style::secondary("(random)"), Style::value)
    );
    println!(
        "  {}          {}",
        Style::label("transcript"),
        chat.transcript.as_ref().map_or_else(
            || Style::secondary("(not saved)"),
            |p| Style::value(p.display())
        )
    );
    println!(
        "  {}              {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn prompt_millis(message: &str, default: u64) -> Result<u64> {
    let value = CustomType::<u64>::new(message)
        .with_default(default)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;
    Ok(value)
}

fn prompt_optional_seed(current: Option<u64>) -> Result<Option<u64>> {
    let mut prompt = Text::new("Reply seed:").with_help_message("Leave empty for random replies");
    let current_text = current.map(|s| s.to_string());
    if let Some(text) = current_text.as_deref() {
        prompt = prompt.with_default(text);
    }

    let answer = prompt.prompt()?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }

    match answer.parse::<u64>() {
        Ok(seed) => Ok(Some(seed)),
        Err(_) => bail!("Seed must be a whole number, got '{answer}'"),
    }
}

fn prompt_optional_path(current: Option<&PathBuf>) -> Result<Option<PathBuf>> {
    let mut prompt =
        Text::new("Transcript file:").with_help_message("Leave empty to skip saving transcripts");
    let current_text = current.map(|p| p.display().to_string());
    if let Some(text) = current_text.as_deref() {
        prompt = prompt.with_default(text);
    }

    let answer = prompt.prompt()?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
}
