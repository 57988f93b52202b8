//! Error types and handling for cfndoc-core operations.
//!
//! Errors fall into four categories, matching the failure surfaces of the
//! system: network transport, document extraction, cache contents, and the
//! filesystem. None of them are recovered internally; every failure during
//! `build`, enrichment, or `reload` surfaces to the caller, which is
//! expected to report it and halt. Two conditions are deliberately *not*
//! errors: a missing cache file and a missing lookup key both come back as
//! `None` from the relevant APIs.

use thiserror::Error;

/// The main error type for cfndoc-core operations.
///
/// All public functions in cfndoc-core return [`Result<T>`] for consistent
/// error handling. The underlying `std::io::Error` and `reqwest::Error`
/// sources are preserved so callers can inspect the full chain.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers filesystem operations on the cache file: reading, the
    /// temp-file write, the rename commit, and deletion on invalidate.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers the HTTP GET of the table-of-contents page and of per-entry
    /// detail pages, including non-success status codes. The tool makes a
    /// single attempt per fetch; there is no retry layer.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Document extraction failed.
    ///
    /// HTML parsing itself is permissive and tolerates malformed markup,
    /// so this only fires for genuinely unusable inputs: a base URL that
    /// does not parse, or an anchor href that cannot be resolved against
    /// it.
    #[error("parse error: {0}")]
    Parse(String),

    /// The cache file exists but does not deserialize.
    ///
    /// A missing cache file is not an error (it means "build from the
    /// network"); a present-but-unreadable one is, because silently
    /// rebuilding would mask corruption the operator should know about.
    #[error("corrupt cache: {0}")]
    CacheCorrupt(String),
}

impl Error {
    /// Returns a short category label, useful for log fields.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::CacheCorrupt(_) => "cache",
        }
    }
}

/// Convenient result type for cfndoc-core operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
