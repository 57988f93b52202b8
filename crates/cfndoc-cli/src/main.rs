//! cfndoc CLI - offline lookup for AWS CloudFormation resource docs.
//!
//! This is the entry point for the `cfndoc` command-line interface.
//! Command implementations live in separate modules under `commands`.

use anyhow::Result;
use cfndoc_core::Config;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    let mut config = Config::from_env();
    if let Some(path) = cli.cache {
        config = config.with_cache_path(path);
    }

    match cli.command {
        Commands::Find { key, output } => {
            commands::find(config, &key, output).await?;
        },

        Commands::Reload => {
            commands::reload(config).await?;
        },

        Commands::List { output } => {
            commands::list(config, output).await?;
        },
    }

    Ok(())
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
