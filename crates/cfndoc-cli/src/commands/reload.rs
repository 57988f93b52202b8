//! Reload command implementation.

use anyhow::Result;
use cfndoc_core::{Config, DocIndex};

/// Invalidates the cache and rebuilds the index from the Template
/// Reference page.
pub async fn execute(config: Config) -> Result<()> {
    let mut index = DocIndex::build(config).await?;
    let entries = index.reload().await?;

    println!("{} resources were updated", entries.len());
    Ok(())
}
