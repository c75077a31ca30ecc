//! # folio - Portfolio Assistant CLI
//!
//! `folio` puts the scripted assistant from a personal portfolio site in
//! the terminal. It answers slash commands from a fixed command table and
//! free text by keyword group, with a simulated typing delay.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat
//! folio
//!
//! # One-off question
//! folio ask "what projects have you built?"
//! echo "/skills" | folio ask
//!
//! # Reproducible replies, saved transcript
//! folio chat --seed 7 --transcript chat.json
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/folio/config.toml`:
//!
//! ```toml
//! [chat]
//! typing_base_ms = 300
//! typing_per_char_ms = 20
//! typing_max_ms = 1500
//! seed = 7
//! transcript = "/home/me/folio-chat.json"
//! ```

/// The assistant: resolver, transcript and interactive session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and settings resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Static portfolio content.
pub mod profile;

/// Terminal UI components (spinner, colors).
pub mod ui;
