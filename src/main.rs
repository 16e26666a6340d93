#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use anyhow::Result;
use clap::Parser;
use mrquack::{Cli, Config};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_init()?;

    // Logs go to stderr so they never interleave with the prompts on stdout.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("setting default subscriber failed: {e}"))?;

    mrquack::app::dispatch(cli, config).await
}
