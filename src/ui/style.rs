//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! falls back to plain text when colors are disabled.

use owo_colors::{OwoColorize, Style as Paint};
use std::fmt::Display;

use crate::output;

fn paint<T: Display>(text: T, style: Paint) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        text.style(style).to_string()
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Current settings", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, Paint::new().bold())
    }

    /// Style for labels/keys (e.g., "seed", "typing_max_ms")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    /// Style for primary values
    pub fn value<T: Display>(text: T) -> String {
        paint(text, Paint::new().cyan())
    }

    /// Style for secondary/supplementary info (e.g., paths, descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, Paint::new().red().bold())
    }

    /// Style for commands (e.g., "/projects", "/help")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, Paint::new().green())
    }

    /// Style for the assistant's name tag
    pub fn assistant<T: Display>(text: T) -> String {
        paint(text, Paint::new().bright_cyan().bold())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed().italic())
    }

    pub fn version<T: Display>(text: T) -> String {
        paint(text, Paint::new().dimmed())
    }
}
