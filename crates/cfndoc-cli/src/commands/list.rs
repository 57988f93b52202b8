//! List command implementation.

use anyhow::Result;
use cfndoc_core::{Config, DocIndex};

use crate::output::{self, OutputFormat};

/// Prints every indexed resource type, in table-of-contents order.
pub async fn execute(config: Config, format: OutputFormat) -> Result<()> {
    let index = DocIndex::build(config).await?;
    output::print_listing(index.entries(), format)?;
    Ok(())
}
