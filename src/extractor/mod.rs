//! Pure HTML-to-model extraction.
//!
//! Extraction is deterministic: identical input always yields identical
//! output. It never touches the network or the clock; the document timestamp
//! is recorded by the orchestrator, not here. Capability flags gate the
//! content sections (`extract_text` covers headings, paragraphs, lists,
//! tables, and main text; `extract_links` and `extract_images` cover their
//! sections); metadata is extracted unconditionally.

mod content;
mod metadata;

pub use content::extract_content;
pub use metadata::extract_metadata;

use crate::config::ScraperOptions;
use crate::model::{PageContent, PageMetadata};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("BUG: hardcoded CSS selector 'title' is invalid")
});

/// Title, metadata, and content of one parsed document.
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    pub title: String,
    pub metadata: PageMetadata,
    pub content: PageContent,
}

/// Parse `html` and extract everything enabled by `options`, resolving
/// relative URLs against `base_url`.
#[must_use]
pub fn extract(html: &str, base_url: &str, options: &ScraperOptions) -> ExtractedPage {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(element_text)
        .unwrap_or_default();

    ExtractedPage {
        title,
        metadata: extract_metadata(&document, base.as_ref()),
        content: extract_content(&document, base.as_ref(), base_url, options),
    }
}

/// Trimmed text content of an element, including descendants.
pub(crate) fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolve a possibly-relative URL against the document base.
///
/// Values already starting with `http` pass through untouched, so absolute
/// URLs are never re-normalized. Returns `None` when the base is missing or
/// joining fails; callers decide whether to drop the entry or keep the raw
/// value.
pub(crate) fn resolve_url(raw: &str, base: Option<&Url>) -> Option<String> {
    if raw.starts_with("http") {
        return Some(raw.to_string());
    }
    base.and_then(|base| base.join(raw).ok())
        .map(|resolved| resolved.to_string())
}
