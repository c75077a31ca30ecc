//! Configuration file management.

mod manager;

pub use manager::{
    ChatConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedSettings, resolve_settings,
};
