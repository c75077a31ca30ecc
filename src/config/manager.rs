use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::chat::TypingDelay;
use crate::paths;

/// Settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Fixed part of the typing delay, in milliseconds.
    pub typing_base_ms: Option<u64>,
    /// Extra delay per input character, in milliseconds.
    pub typing_per_char_ms: Option<u64>,
    /// Upper bound for the typing delay, in milliseconds.
    pub typing_max_ms: Option<u64>,
    /// Seed for reply selection (random when unset).
    pub seed: Option<u64>,
    /// Where to save the transcript when a session ends.
    pub transcript: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Settings after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub typing: TypingDelay,
    pub seed: Option<u64>,
    pub transcript: Option<PathBuf>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub seed: Option<u64>,
    pub transcript: Option<PathBuf>,
    /// Skip the typing delay entirely.
    pub no_delay: bool,
}

/// Resolves settings by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults.
///
/// # Errors
///
/// Returns an error if the configured typing bounds are inconsistent.
pub fn resolve_settings(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedSettings> {
    let chat = &config_file.chat;

    let typing = if options.no_delay {
        TypingDelay::NONE
    } else {
        let defaults = TypingDelay::default();
        let typing = TypingDelay {
            base: chat
                .typing_base_ms
                .map_or(defaults.base, Duration::from_millis),
            per_char: chat
                .typing_per_char_ms
                .map_or(defaults.per_char, Duration::from_millis),
            max: chat.typing_max_ms.map_or(defaults.max, Duration::from_millis),
        };

        if typing.max < typing.base {
            bail!(
                "Invalid configuration: 'typing_max_ms' ({}) is smaller than 'typing_base_ms' ({})\n\n\
                 Fix the [chat] section of ~/.config/folio/config.toml",
                typing.max.as_millis(),
                typing.base.as_millis()
            );
        }
        typing
    };

    Ok(ResolvedSettings {
        typing,
        seed: options.seed.or(chat.seed),
        transcript: options
            .transcript
            .clone()
            .or_else(|| chat.transcript.clone()),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/folio/config.toml`
    /// or `~/.config/folio/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            chat: ChatConfig {
                typing_base_ms: Some(100),
                typing_per_char_ms: Some(5),
                typing_max_ms: Some(900),
                seed: Some(7),
                transcript: Some(PathBuf::from("/tmp/chat.json")),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[chat\nseed = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_partial_config_parses() {
        let config: ConfigFile = toml::from_str("[chat]\nseed = 3\n").unwrap();
        assert_eq!(config.chat.seed, Some(3));
        assert!(config.chat.typing_max_ms.is_none());

        let empty: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(empty, ConfigFile::default());
    }

    // resolve_settings tests

    #[test]
    fn test_resolve_defaults() {
        let resolved =
            resolve_settings(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.typing, TypingDelay::default());
        assert!(resolved.seed.is_none());
        assert!(resolved.transcript.is_none());
    }

    #[test]
    fn test_resolve_file_overrides_defaults() {
        let config = ConfigFile {
            chat: ChatConfig {
                typing_base_ms: Some(50),
                typing_max_ms: Some(60),
                ..ChatConfig::default()
            },
        };

        let resolved = resolve_settings(&ResolveOptions::default(), &config).unwrap();

        assert_eq!(resolved.typing.base, Duration::from_millis(50));
        assert_eq!(resolved.typing.per_char, TypingDelay::default().per_char);
        assert_eq!(resolved.typing.max, Duration::from_millis(60));
    }

    #[test]
    fn test_resolve_no_delay_wins() {
        let config = ConfigFile {
            chat: ChatConfig {
                typing_base_ms: Some(5000),
                ..ChatConfig::default()
            },
        };
        let options = ResolveOptions {
            no_delay: true,
            ..ResolveOptions::default()
        };

        let resolved = resolve_settings(&options, &config).unwrap();
        assert_eq!(resolved.typing, TypingDelay::NONE);
    }

    #[test]
    fn test_resolve_rejects_max_below_base() {
        let config = ConfigFile {
            chat: ChatConfig {
                typing_base_ms: Some(2000),
                ..ChatConfig::default()
            },
        };

        let err = resolve_settings(&ResolveOptions::default(), &config).unwrap_err();
        assert!(err.to_string().contains("typing_max_ms"));
    }
}
