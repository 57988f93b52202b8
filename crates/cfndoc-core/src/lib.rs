//! # cfndoc-core
//!
//! Core functionality for cfndoc - offline lookup of AWS CloudFormation
//! resource documentation.
//!
//! The crate builds a local index of every resource type listed on the
//! CloudFormation User Guide's Template Reference page, persists it as a
//! single JSON cache file, and serves per-resource lookups from it.
//! Detail content (a short excerpt and the syntax block) is scraped
//! lazily, the first time a resource is looked up, and written back to
//! the cache so subsequent lookups are offline.
//!
//! ## Architecture
//!
//! - **Extraction** ([`extract`]): pure functions from HTML to structured
//!   data, behind which the HTML library is an implementation detail.
//! - **Transport** ([`fetcher`]): a thin HTTP GET wrapper; one attempt,
//!   configurable timeout, no parsing.
//! - **Cache** ([`cache`]): the whole-index JSON file with atomic
//!   overwrite and explicit invalidation.
//! - **Orchestration** ([`index`]): cache-or-download builds, lookup with
//!   lazy enrichment, and reload.
//!
//! ## Quick start
//!
//! ```no_run
//! use cfndoc_core::{Config, DocIndex, Result};
//!
//! # async fn run() -> Result<()> {
//! let mut index = DocIndex::build(Config::from_env()).await?;
//! if let Some(entry) = index.find("AWS::EC2::SecurityGroup").await? {
//!     println!("{}", entry.excerpt.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! All operations return [`Result<T, Error>`]. Failures are never
//! recovered internally: there are no retries and no fallback to partial
//! data, because silently serving an incomplete index would be worse than
//! failing loudly. A missing cache file and an unknown lookup key are not
//! errors; both are `None`.

/// On-disk JSON cache for the link index
pub mod cache;
/// Configuration and the canonical User Guide URLs
pub mod config;
/// Error types and result alias
pub mod error;
/// Pure HTML extraction for index and detail pages
pub mod extract;
/// HTTP transport
pub mod fetcher;
/// Index orchestration: build, find, reload
pub mod index;
/// Core data types
pub mod types;

pub use cache::Cache;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_DOCS_URL};
pub use error::{Error, Result};
pub use fetcher::Fetcher;
pub use index::DocIndex;
pub use types::{LinkEntry, PageContent};
