use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tweetquiz_common::observability::{LogConfig, init_logging};
mod session;

/// Guess which of two Twitter accounts wrote a tweet.
#[derive(Parser, Debug, Default)]
#[command(name = "tweetquiz", version)]
pub struct Flags {
    /// First account (with or without `@`)
    #[arg(long)]
    first: Option<String>,

    /// Second account (with or without `@`)
    #[arg(long)]
    second: Option<String>,

    /// Number of rounds; skips the prompt
    #[arg(long)]
    rounds: Option<u32>,

    /// Config file (YAML, TOML or JSON); defaults to ./tweetquiz.yaml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print how many tweets were fetched and kept per account
    #[arg(long)]
    stats: bool,

    /// Skip the pauses between rounds
    #[arg(long)]
    no_delay: bool,

    /// Mirror log events to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let flags = Flags::parse();

    let cfg = session::load_config(flags.config.as_deref())?;

    let log_path = init_logging(LogConfig {
        emit_stderr: flags.verbose,
        format: cfg.log_format,
        ..LogConfig::default()
    })?;
    tracing::info!(log = %log_path.display(), "tweetquiz.start");

    session::run(&flags, cfg).await
}
