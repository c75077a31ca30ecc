use anyhow::{Result, bail};

use crate::chat::{MessageKind, Reply, Resolver};
use crate::config::ConfigManager;
use crate::input::InputReader;
use crate::ui::Style;

pub struct AskOptions {
    pub seed: Option<u64>,
    pub text: Vec<String>,
}

/// Resolves one input and prints the reply.
///
/// Returns the reply so the caller can map error replies to an exit code.
pub fn run_ask(options: &AskOptions) -> Result<Reply> {
    let input = InputReader::read(&options.text)?;

    // Only the seed matters here; typing settings belong to `chat`.
    let file_config = ConfigManager::new()?.load_or_default()?;
    let mut resolver = options
        .seed
        .or(file_config.chat.seed)
        .map_or_else(Resolver::from_entropy, Resolver::seeded);

    let Some(reply) = resolver.resolve(&input) else {
        bail!(
            "Nothing to ask\n\n\
             Usage: folio ask <question>  or  echo <question> | folio ask"
        );
    };

    if reply.kind == MessageKind::Error {
        eprintln!("{} {}", Style::error("Error:"), reply.text);
    } else {
        println!("{}", reply.text);
    }

    Ok(reply)
}
