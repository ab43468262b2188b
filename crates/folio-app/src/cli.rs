use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// folio: chat with the portfolio assistant from your terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error) or a full filter directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Send earlier turns with each request.
    #[arg(long)]
    pub replay_history: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask a single question and print the reply.
    Ask {
        /// The question.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
