use anyhow::Result;
use clap::Parser;

use folio_cli::chat::{MessageKind, print_commands};
use folio_cli::cli::commands::{ask, chat, configure};
use folio_cli::cli::{Args, Command};
use folio_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(!output::is_no_color())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match args.command {
        Some(Command::Ask { reply, text }) => {
            let options = ask::AskOptions {
                seed: reply.seed,
                text,
            };
            let answer = ask::run_ask(&options)?;
            if answer.kind == MessageKind::Error {
                std::process::exit(exitcode::DATAERR);
            }
        }
        Some(Command::Commands) => {
            print_commands();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Chat {
            reply,
            transcript,
            no_delay,
        }) => {
            let options = chat::ChatOptions {
                seed: reply.seed,
                transcript,
                no_delay,
            };
            chat::run_chat(options).await?;
        }
        None => {
            chat::run_chat(chat::ChatOptions::default()).await?;
        }
    }

    Ok(())
}
