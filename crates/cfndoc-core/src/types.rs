//! Core data types for the documentation index.

use serde::{Deserialize, Serialize};

/// One documentation item from the Template Reference index.
///
/// Entries start out *bare* (just `name` and `link`, as scraped from the
/// table-of-contents page) and become *enriched* once their detail page has
/// been fetched and parsed. The two content fields are always populated
/// together; a half-enriched entry is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Lookup key, e.g. `AWS::EC2::SecurityGroup`. Uniqueness is not
    /// enforced by the source page; the first match wins on lookup.
    pub name: String,
    /// Absolute URL of the entry's detail page.
    pub link: String,
    /// Short description scraped from the detail page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Usage/syntax block scraped from the detail page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
}

impl LinkEntry {
    /// Creates a bare entry with no scraped content.
    #[must_use]
    pub const fn new(name: String, link: String) -> Self {
        Self {
            name,
            link,
            excerpt: None,
            syntax: None,
        }
    }

    /// Whether both content fields have been populated.
    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.excerpt.is_some() && self.syntax.is_some()
    }

    /// Merges scraped content into this entry, producing the enriched
    /// form. Scraped fields win; `name` and `link` are preserved.
    #[must_use]
    pub fn with_content(self, content: PageContent) -> Self {
        Self {
            name: self.name,
            link: self.link,
            excerpt: Some(content.excerpt),
            syntax: Some(content.syntax),
        }
    }
}

/// Content extracted from a single detail page.
///
/// Either field may be empty when the page lacks the corresponding
/// structure; that is a property of the source, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// First paragraph after the title block.
    pub excerpt: String,
    /// Text of the preformatted block under the "Syntax" heading.
    pub syntax: String,
}
