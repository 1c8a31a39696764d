//! Content extraction: headings, paragraphs, links, images, lists, tables,
//! and the unstructured main-text fallback.

use super::{element_text, resolve_url};
use crate::config::ScraperOptions;
use crate::model::{Heading, Image, Link, ListBlock, ListKind, PageContent, TableBlock};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h1, h2, h3, h4, h5, h6")
        .expect("BUG: hardcoded CSS selector for headings is invalid")
});

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p").expect("BUG: hardcoded CSS selector 'p' is invalid")
});

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[href]").expect("BUG: hardcoded CSS selector 'a[href]' is invalid")
});

static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("img[src]").expect("BUG: hardcoded CSS selector 'img[src]' is invalid")
});

static LIST_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("ul, ol").expect("BUG: hardcoded CSS selector 'ul, ol' is invalid")
});

static LIST_ITEM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("li").expect("BUG: hardcoded CSS selector 'li' is invalid")
});

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded CSS selector 'table' is invalid")
});

static TABLE_HEADER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("th").expect("BUG: hardcoded CSS selector 'th' is invalid")
});

static TABLE_ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr").expect("BUG: hardcoded CSS selector 'tr' is invalid")
});

static TABLE_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td").expect("BUG: hardcoded CSS selector 'td' is invalid")
});

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("body").expect("BUG: hardcoded CSS selector 'body' is invalid")
});

/// Extract the content sections enabled by `options`.
///
/// `base_url` is the raw base string used for the internal-link prefix check;
/// `base` is its parsed form used for resolving relative URLs.
#[must_use]
pub fn extract_content(
    document: &Html,
    base: Option<&Url>,
    base_url: &str,
    options: &ScraperOptions,
) -> PageContent {
    let mut content = PageContent::default();

    if options.extract_text {
        content.headings = Some(extract_headings(document));
        content.paragraphs = Some(extract_paragraphs(document));
        content.lists = Some(extract_lists(document));
        content.tables = Some(extract_tables(document));
        content.main_text = Some(extract_main_text(document));
    }
    if options.extract_links {
        content.links = Some(extract_links(document, base, base_url));
    }
    if options.extract_images {
        content.images = Some(extract_images(document, base));
    }

    content
}

/// `h1`..`h6` in document order; entries with empty trimmed text are omitted.
fn extract_headings(document: &Html) -> Vec<Heading> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = element.value().name().strip_prefix('h')?.parse().ok()?;
            let text = element_text(element);
            (!text.is_empty()).then_some(Heading { level, text })
        })
        .collect()
}

fn extract_paragraphs(document: &Html) -> Vec<String> {
    document
        .select(&PARAGRAPH_SELECTOR)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Anchors with an href, skipping empty, `javascript:`, and bare-`#` targets.
/// Relative hrefs are resolved against the base; entries that cannot be
/// resolved are dropped silently.
fn extract_links(document: &Html, base: Option<&Url>, base_url: &str) -> Vec<Link> {
    let mut links = Vec::new();
    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() || href.starts_with("javascript:") || href == "#" {
            continue;
        }
        let Some(url) = resolve_url(href, base) else {
            log::debug!("dropping link with unresolvable href '{href}'");
            continue;
        };

        // Prefix check against the raw base string, not an origin comparison.
        let is_internal = url.starts_with(base_url);
        links.push(Link {
            text: element_text(element),
            url,
            is_internal,
        });
    }
    links
}

/// Images with a src, skipping data-URIs. `width`/`height` are taken from the
/// attributes when they parse cleanly as integers.
fn extract_images(document: &Html, base: Option<&Url>) -> Vec<Image> {
    let mut images = Vec::new();
    for element in document.select(&IMAGE_SELECTOR) {
        let Some(src) = element.value().attr("src") else {
            continue;
        };
        if src.is_empty() || src.starts_with("data:") {
            continue;
        }
        let Some(src) = resolve_url(src, base) else {
            log::debug!("dropping image with unresolvable src '{src}'");
            continue;
        };

        images.push(Image {
            alt: element
                .value()
                .attr("alt")
                .unwrap_or_default()
                .to_string(),
            src,
            width: dimension_attr(element, "width"),
            height: dimension_attr(element, "height"),
        });
    }
    images
}

fn dimension_attr(element: ElementRef, attr: &str) -> Option<u32> {
    element
        .value()
        .attr(attr)
        .and_then(|value| value.trim().parse().ok())
}

/// `ul`/`ol` blocks; items are the trimmed texts of descendant `li` elements.
/// A list contributing zero non-empty items is omitted entirely.
fn extract_lists(document: &Html) -> Vec<ListBlock> {
    let mut lists = Vec::new();
    for element in document.select(&LIST_SELECTOR) {
        let kind = if element.value().name() == "ul" {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        };
        let items: Vec<String> = element
            .select(&LIST_ITEM_SELECTOR)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();
        if !items.is_empty() {
            lists.push(ListBlock { kind, items });
        }
    }
    lists
}

/// Tables keep all `th` texts as headers and the `td` texts of each row as
/// data. Rows without any `td` cell (pure header rows) contribute no data
/// row. A table is retained only with at least one header cell or at least
/// two data rows, which filters decorative single-row layout tables.
fn extract_tables(document: &Html) -> Vec<TableBlock> {
    let mut tables = Vec::new();
    for table in document.select(&TABLE_SELECTOR) {
        let headers: Vec<String> = table
            .select(&TABLE_HEADER_SELECTOR)
            .map(element_text)
            .collect();

        let mut rows = Vec::new();
        for row in table.select(&TABLE_ROW_SELECTOR) {
            let cells: Vec<String> = row
                .select(&TABLE_CELL_SELECTOR)
                .map(element_text)
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        if !headers.is_empty() || rows.len() >= 2 {
            tables.push(TableBlock { headers, rows });
        }
    }
    tables
}

/// Trimmed text content of the whole body, as an unstructured fallback view.
fn extract_main_text(document: &Html) -> String {
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(element_text)
        .unwrap_or_default()
}
