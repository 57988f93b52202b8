//! The document index: build, lookup with lazy enrichment, reload.
//!
//! `DocIndex` owns the in-memory entry collection and keeps it consistent
//! with the on-disk cache. Builds are cache-or-download with no freshness
//! check; the cache is authoritative until [`DocIndex::reload`] discards
//! it. Lookups enrich bare entries on first access, persisting the whole
//! updated collection before the in-memory state is touched, so every
//! failure leaves both views at their pre-operation state.

use crate::cache::Cache;
use crate::config::Config;
use crate::extract;
use crate::fetcher::Fetcher;
use crate::types::LinkEntry;
use crate::Result;
use tracing::{debug, info};

/// In-memory index of documentation entries backed by the JSON cache.
///
/// Mutating operations take `&mut self`; a single owner at a time is how
/// the single-writer discipline over the shared cache file is enforced
/// in-process. Cross-process writers remain uncoordinated, which is
/// accepted for a single-operator tool.
pub struct DocIndex {
    entries: Vec<LinkEntry>,
    cache: Cache,
    fetcher: Fetcher,
    docs_url: String,
    base_url: String,
}

impl DocIndex {
    /// Builds an index from the cache, or from the network on a cache
    /// miss (persisting the result).
    ///
    /// Any network, parse, or filesystem failure is fatal to the build;
    /// there is no partial or degraded state.
    pub async fn build(config: Config) -> Result<Self> {
        let cache = Cache::new(config.cache_path);
        let fetcher = Fetcher::with_timeout(config.timeout)?;

        let entries = match cache.load()? {
            Some(entries) => {
                debug!("index built from cache ({} entries)", entries.len());
                entries
            },
            None => download(&fetcher, &config.docs_url, &config.base_url, &cache).await?,
        };

        Ok(Self {
            entries,
            cache,
            fetcher,
            docs_url: config.docs_url,
            base_url: config.base_url,
        })
    }

    /// Looks up an entry by exact name, enriching it on first access.
    ///
    /// Returns `None` for an unknown key without touching the network.
    /// A bare match triggers one fetch of its detail page; the enriched
    /// collection is written to the cache before the in-memory entry is
    /// replaced, keeping enrichment all-or-nothing. An already enriched
    /// match is returned directly with no I/O.
    pub async fn find(&mut self, key: &str) -> Result<Option<LinkEntry>> {
        let Some(position) = self.entries.iter().position(|e| e.name == key) else {
            return Ok(None);
        };

        if self.entries[position].is_enriched() {
            return Ok(Some(self.entries[position].clone()));
        }

        let bare = self.entries[position].clone();
        info!("enriching '{}' from {}", bare.name, bare.link);
        let html = self.fetcher.fetch(&bare.link).await?;
        let enriched = bare.with_content(extract::content_from(&html));

        // Snapshot, persist, then commit; a failed save must not leave
        // memory ahead of disk.
        let mut updated = self.entries.clone();
        updated[position] = enriched.clone();
        self.cache.save(&updated)?;
        self.entries = updated;

        Ok(Some(enriched))
    }

    /// Invalidates the cache and rebuilds the index from the network,
    /// replacing the entry collection wholesale. Prior enrichment is
    /// discarded. This is the only cache-refresh path.
    pub async fn reload(&mut self) -> Result<&[LinkEntry]> {
        self.cache.invalidate()?;
        let entries = download(&self.fetcher, &self.docs_url, &self.base_url, &self.cache).await?;
        self.entries = entries;
        Ok(&self.entries)
    }

    /// The entry collection, in table-of-contents order.
    #[must_use]
    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no entries (legal only when the source
    /// page itself listed none).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fetches the table-of-contents page, extracts the link index, and
/// persists it before handing it back.
async fn download(
    fetcher: &Fetcher,
    docs_url: &str,
    base_url: &str,
    cache: &Cache,
) -> Result<Vec<LinkEntry>> {
    let html = fetcher.fetch(docs_url).await?;
    let entries = extract::links_from(&html, base_url)?;
    cache.save(&entries)?;
    info!("indexed {} entries from {}", entries.len(), docs_url);
    Ok(entries)
}
