//! Configuration for the documentation index.
//!
//! Defaults point at the AWS CloudFormation User Guide; environment
//! variables (`CFNDOC_DOCS_URL`, `CFNDOC_BASE_URL`, `CFNDOC_CACHE`)
//! override them, which is also how the integration tests point the tool
//! at a mock server and a temporary cache.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the CloudFormation User Guide; relative hrefs on the
/// table-of-contents page are resolved against it.
pub const DEFAULT_BASE_URL: &str =
    "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide";

/// The Template Reference page listing every documented resource type.
pub const DEFAULT_DOCS_URL: &str =
    "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/template-reference.html";

/// Default cache file name, used under the platform data directory or, if
/// no home directory can be determined, in the working directory.
pub const CACHE_FILE_NAME: &str = "cache.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for building a [`crate::DocIndex`].
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the table-of-contents page.
    pub docs_url: String,
    /// Base URL for resolving relative entry links.
    pub base_url: String,
    /// Path of the on-disk JSON cache.
    pub cache_path: PathBuf,
    /// HTTP request timeout for all fetches.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_url: DEFAULT_DOCS_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_path: default_cache_path(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Builds a configuration from defaults plus `CFNDOC_*` environment
    /// overrides.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = env_non_empty("CFNDOC_DOCS_URL") {
            config.docs_url = url;
        }
        if let Some(url) = env_non_empty("CFNDOC_BASE_URL") {
            config.base_url = url;
        }
        if let Some(path) = env_non_empty("CFNDOC_CACHE") {
            config.cache_path = PathBuf::from(path);
        }
        config
    }

    /// Replaces the cache path, e.g. from a `--cache` CLI flag.
    #[must_use]
    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = path;
        self
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Default cache location: the platform data directory when available,
/// otherwise `cache.json` next to the process.
fn default_cache_path() -> PathBuf {
    ProjectDirs::from("", "", "cfndoc").map_or_else(
        || PathBuf::from(CACHE_FILE_NAME),
        |dirs| dirs.data_dir().join(CACHE_FILE_NAME),
    )
}
