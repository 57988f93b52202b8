//! Find command implementation.

use anyhow::Result;
use cfndoc_core::{Config, DocIndex};
use colored::Colorize;

use crate::output::{self, OutputFormat};

/// Looks up a resource type, enriching it on first access, and prints
/// the result. An unknown key prints a notice and exits with status 1.
pub async fn execute(config: Config, key: &str, format: OutputFormat) -> Result<()> {
    let mut index = DocIndex::build(config).await?;

    match index.find(key).await? {
        Some(entry) => output::print_entry(&entry, format)?,
        None => {
            eprintln!("No documentation found for '{}'", key.yellow());
            std::process::exit(1);
        },
    }

    Ok(())
}
