#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file settings
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use folio_cli::chat::TypingDelay;
use folio_cli::config::{ChatConfig, ConfigFile, ConfigManager, ResolveOptions, resolve_settings};
use tempfile::TempDir;

fn make_config_with_settings() -> ConfigFile {
    ConfigFile {
        chat: ChatConfig {
            typing_base_ms: Some(100),
            typing_per_char_ms: Some(10),
            typing_max_ms: Some(800),
            seed: Some(1),
            transcript: Some(PathBuf::from("/from/config.json")),
        },
    }
}

#[test]
fn test_cli_seed_overrides_config_seed() {
    let options = ResolveOptions {
        seed: Some(99),
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &make_config_with_settings()).unwrap();

    assert_eq!(resolved.seed, Some(99));
}

#[test]
fn test_cli_transcript_overrides_config_transcript() {
    let options = ResolveOptions {
        transcript: Some(PathBuf::from("/from/cli.json")),
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &make_config_with_settings()).unwrap();

    assert_eq!(resolved.transcript, Some(PathBuf::from("/from/cli.json")));
}

#[test]
fn test_config_used_when_cli_silent() {
    let resolved =
        resolve_settings(&ResolveOptions::default(), &make_config_with_settings()).unwrap();

    assert_eq!(resolved.seed, Some(1));
    assert_eq!(resolved.transcript, Some(PathBuf::from("/from/config.json")));
    assert_eq!(
        resolved.typing,
        TypingDelay {
            base: Duration::from_millis(100),
            per_char: Duration::from_millis(10),
            max: Duration::from_millis(800),
        }
    );
}

#[test]
fn test_defaults_when_nothing_configured() {
    let resolved =
        resolve_settings(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.typing, TypingDelay::default());
    assert_eq!(resolved.seed, None);
    assert_eq!(resolved.transcript, None);
}

#[test]
fn test_no_delay_flag_overrides_config_typing() {
    let options = ResolveOptions {
        no_delay: true,
        ..ResolveOptions::default()
    };

    let resolved = resolve_settings(&options, &make_config_with_settings()).unwrap();

    assert_eq!(resolved.typing, TypingDelay::NONE);
    assert_eq!(resolved.seed, Some(1));
}

#[test]
fn test_saved_config_round_trips_through_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let manager = ConfigManager::with_path(temp_dir.path().join("nested").join("config.toml"));

    manager.save(&make_config_with_settings()).unwrap();
    let loaded = manager.load_or_default().unwrap();
    let resolved = resolve_settings(&ResolveOptions::default(), &loaded).unwrap();

    assert_eq!(resolved.typing.max, Duration::from_millis(800));
    assert_eq!(resolved.seed, Some(1));
}
