//! Output formatting for CLI results.
//!
//! Two formats: colored human-readable text (the default) and pretty
//! JSON for scripting. The same entry data backs both.

use cfndoc_core::LinkEntry;
use clap::ValueEnum;
use colored::Colorize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// Machine-readable JSON
    Json,
}

/// Prints a single looked-up entry.
pub fn print_entry(entry: &LinkEntry, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", entry.name.green().bold());
            println!("{}", entry.link.blue().underline());
            if let Some(excerpt) = entry.excerpt.as_deref() {
                if !excerpt.is_empty() {
                    println!("\n{excerpt}");
                }
            }
            if let Some(syntax) = entry.syntax.as_deref() {
                if !syntax.is_empty() {
                    println!("\n{}\n{syntax}", "Syntax".bold());
                }
            }
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entry)?);
        },
    }
    Ok(())
}

/// Prints the full entry listing.
pub fn print_listing(entries: &[LinkEntry], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                if entry.is_enriched() {
                    println!("{} {}", entry.name, "(cached)".dimmed());
                } else {
                    println!("{}", entry.name);
                }
            }
            println!("\n{} resources indexed", entries.len());
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(entries)?);
        },
    }
    Ok(())
}
