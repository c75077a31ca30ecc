use anyhow::Result;
use std::path::PathBuf;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_settings};

#[derive(Debug, Default)]
pub struct ChatOptions {
    pub seed: Option<u64>,
    pub transcript: Option<PathBuf>,
    pub no_delay: bool,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_session_config(options)?;
    let mut session = ChatSession::new(config);
    session.run().await
}

fn load_session_config(options: ChatOptions) -> Result<SessionConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let settings = resolve_settings(
        &ResolveOptions {
            seed: options.seed,
            transcript: options.transcript,
            no_delay: options.no_delay,
        },
        &file_config,
    )?;

    Ok(SessionConfig {
        typing: settings.typing,
        seed: settings.seed,
        transcript_path: settings.transcript,
    })
}
