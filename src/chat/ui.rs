//! Chat mode UI components.

use crate::profile;
use crate::ui::Style;

use super::command::COMMANDS;
use super::transcript::{Message, MessageKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Ask {}",
        Style::header("folio"),
        Style::version(format!("v{VERSION}")),
        profile::ASSISTANT_NAME
    );
    println!();
}

pub fn print_goodbye(text: &str) {
    println!("{}", Style::success(text));
}

/// Renders one assistant or system message, styled by kind.
pub fn print_message(message: &Message) {
    let body = match message.kind {
        MessageKind::Error => Style::error(&message.text),
        MessageKind::Suggestion => Style::hint(&message.text),
        MessageKind::Command => Style::success(&message.text),
        MessageKind::Plain | MessageKind::Reply => message.text.clone(),
    };
    println!("{} {body}", Style::assistant("DY"));
    println!();
}

/// Prints the command table for `folio commands`.
pub fn print_commands() {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    println!("{}", Style::header("Available commands"));
    for info in COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{:<width$}", info.usage)),
            Style::secondary(info.description)
        );
    }
}
