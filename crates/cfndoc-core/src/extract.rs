//! Pure HTML extraction for the Template Reference pages.
//!
//! Two entry points, both free of I/O: [`links_from`] maps the
//! table-of-contents page to the link index, and [`content_from`] pulls
//! the excerpt and syntax block out of a single detail page. Parsing is
//! permissive (html5ever recovers from malformed markup), so the only
//! failure mode is an href that cannot be resolved into a URL.

use crate::types::{LinkEntry, PageContent};
use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

#[allow(clippy::expect_used)]
mod selectors {
    use super::{LazyLock, Selector};

    macro_rules! selector {
        ($name:ident, $css:literal) => {
            pub(super) static $name: LazyLock<Selector> =
                LazyLock::new(|| Selector::parse($css).expect("static selector must parse"));
        };
    }

    // Every resource type on the table-of-contents page is an anchor of
    // this class.
    selector!(TOC_ANCHOR, "a.awstoc");
    selector!(TITLEPAGE, "div.titlepage");
    selector!(EXCERPT_PARAGRAPH, "div.titlepage + p");
}

/// Extracts the link index from the table-of-contents page.
///
/// Anchors are returned in document order, without deduplication. A
/// relative href is joined against `base`; an absolute href passes
/// through unchanged. Anchors without an href are skipped.
pub fn links_from(html: &str, base: &str) -> Result<Vec<LinkEntry>> {
    let base_url = parse_base(base)?;
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    for anchor in document.select(&selectors::TOC_ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let name = element_text(&anchor);
        let link = resolve_href(&base_url, href)?;
        entries.push(LinkEntry::new(name, link));
    }

    Ok(entries)
}

/// Extracts the excerpt and syntax block from a detail page.
///
/// The excerpt is the first paragraph immediately following a title
/// block; the syntax is the preformatted block immediately following the
/// title block whose text contains "Syntax". A page lacking either
/// structure yields an empty string for that field.
#[must_use]
pub fn content_from(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    let excerpt = document
        .select(&selectors::EXCERPT_PARAGRAPH)
        .next()
        .map(|p| element_text(&p))
        .unwrap_or_default();

    let syntax = document
        .select(&selectors::TITLEPAGE)
        .filter(|title| title.text().any(|t| t.contains("Syntax")))
        .find_map(|title| following_pre(&title))
        .map(|pre| pre.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    PageContent { excerpt, syntax }
}

/// The immediately-following element sibling, if it is a `<pre>`.
fn following_pre<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == "pre")
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses the base URL, normalizing it to end with a slash so joining
/// appends to the path instead of replacing its last segment.
fn parse_base(base: &str) -> Result<Url> {
    let normalized = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Parse(format!("invalid base URL '{base}': {e}")))
}

fn resolve_href(base: &Url, href: &str) -> Result<String> {
    // An href that parses on its own is already absolute.
    if Url::parse(href).is_ok() {
        return Ok(href.to_string());
    }
    base.join(href)
        .map(String::from)
        .map_err(|e| Error::Parse(format!("unresolvable href '{href}': {e}")))
}
