//! Metadata extraction: description, keywords, author, Open Graph, Twitter
//! Card, and favicon.

use super::resolve_url;
use crate::model::PageMetadata;
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use url::Url;

static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#)
        .expect("BUG: hardcoded CSS selector for meta description is invalid")
});

static OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#)
        .expect("BUG: hardcoded CSS selector for og:description is invalid")
});

static META_KEYWORDS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="keywords"]"#)
        .expect("BUG: hardcoded CSS selector for meta keywords is invalid")
});

static META_AUTHOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="author"]"#)
        .expect("BUG: hardcoded CSS selector for meta author is invalid")
});

static ARTICLE_AUTHOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="article:author"]"#)
        .expect("BUG: hardcoded CSS selector for article:author is invalid")
});

static OG_META: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property^="og:"]"#)
        .expect("BUG: hardcoded CSS selector for og:* meta is invalid")
});

static TWITTER_META: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name^="twitter:"]"#)
        .expect("BUG: hardcoded CSS selector for twitter:* meta is invalid")
});

static ICON_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="icon"]"#)
        .expect("BUG: hardcoded CSS selector for icon link is invalid")
});

static SHORTCUT_ICON_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="shortcut icon"]"#)
        .expect("BUG: hardcoded CSS selector for shortcut icon link is invalid")
});

/// Extract document metadata. Unconditional: capability flags do not apply.
#[must_use]
pub fn extract_metadata(document: &Html, base: Option<&Url>) -> PageMetadata {
    let description = meta_content(document, &META_DESCRIPTION)
        .or_else(|| meta_content(document, &OG_DESCRIPTION))
        .unwrap_or_default();

    let keywords = meta_content(document, &META_KEYWORDS)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let author = meta_content(document, &META_AUTHOR)
        .or_else(|| meta_content(document, &ARTICLE_AUTHOR))
        .unwrap_or_default();

    PageMetadata {
        description,
        keywords,
        author,
        open_graph: prefixed_meta(document, &OG_META, "property", "og:"),
        twitter_card: prefixed_meta(document, &TWITTER_META, "name", "twitter:"),
        favicon: extract_favicon(document, base),
    }
}

/// `content` attribute of the first element matching `selector`.
fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(str::to_string)
}

/// Collect prefixed meta tags into a map keyed by the name with the prefix
/// stripped. Later duplicates overwrite earlier ones.
fn prefixed_meta(
    document: &Html,
    selector: &Selector,
    key_attr: &str,
    prefix: &str,
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for element in document.select(selector) {
        let (Some(key), Some(content)) = (
            element.value().attr(key_attr),
            element.value().attr("content"),
        ) else {
            continue;
        };
        if let Some(stripped) = key.strip_prefix(prefix) {
            map.insert(stripped.to_string(), content.to_string());
        }
    }
    map
}

/// `link[rel=icon]` first, then `link[rel="shortcut icon"]`. A relative href
/// is resolved against the base; when resolution fails the raw value is kept
/// rather than failing extraction.
fn extract_favicon(document: &Html, base: Option<&Url>) -> String {
    let href = document
        .select(&ICON_LINK)
        .next()
        .or_else(|| document.select(&SHORTCUT_ICON_LINK).next())
        .and_then(|element| element.value().attr("href"))
        .unwrap_or_default();

    if href.is_empty() {
        return String::new();
    }
    resolve_url(href, base).unwrap_or_else(|| href.to_string())
}
