use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Chat with a portfolio assistant from the terminal")]
#[command(version)]
pub struct Args {
    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by the commands that resolve replies.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ReplyArgs {
    /// Seed for reply selection (makes answers reproducible)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat with the assistant (default)
    Chat {
        #[command(flatten)]
        reply: ReplyArgs,

        /// Save the transcript as JSON when the session ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// Show replies immediately instead of simulating typing
        #[arg(long)]
        no_delay: bool,
    },
    /// Ask a single question and print the reply
    Ask {
        #[command(flatten)]
        reply: ReplyArgs,

        /// Question or /command (reads stdin if omitted)
        text: Vec<String>,
    },
    /// List the assistant's slash commands
    Commands,
    /// Configure chat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
