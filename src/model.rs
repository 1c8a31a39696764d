//! Data model for scraped pages.
//!
//! `ScrapedData` is the structured document produced by extraction; it is
//! immutable once built. `ScrapeResult` is the envelope handed back for every
//! retrieval attempt, whether it succeeded or not. Map-valued metadata uses
//! `BTreeMap` so serialized output is byte-stable across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Structured data extracted from a single page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedData {
    pub url: String,
    pub title: String,
    /// ISO-8601, recorded once by the orchestrator when the scrape completes.
    pub timestamp: String,
    pub metadata: PageMetadata,
    pub content: PageContent,
}

/// Document-level metadata pulled from `<meta>` and `<link>` tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    /// `og:*` properties with the prefix stripped; later duplicates win.
    pub open_graph: BTreeMap<String, String>,
    /// `twitter:*` meta names with the prefix stripped; later duplicates win.
    pub twitter_card: BTreeMap<String, String>,
    /// Favicon href, resolved to absolute when possible. Kept verbatim when
    /// resolution against the base URL fails.
    pub favicon: String,
}

/// Page content sections. A section is `None` when the corresponding
/// capability flag was disabled for the scrape, and `Some` (possibly empty)
/// when it was extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<Heading>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ListBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<TableBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 through 6, from the tag name.
    pub level: u8,
    pub text: String,
}

/// An anchor found in the document, with its href resolved to absolute.
///
/// `is_internal` is a plain string-prefix check of the resolved URL against
/// the base URL, not an origin comparison: `https://a.com.evil.com` counts as
/// internal to `https://a.com`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub text: String,
    pub url: String,
    pub is_internal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub alt: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Ordered => write!(f, "ordered"),
            ListKind::Unordered => write!(f, "unordered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBlock {
    #[serde(rename = "type")]
    pub kind: ListKind,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Error,
    Pending,
}

/// Outcome envelope produced exactly once per retrieval attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub data: Option<ScrapedData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: ScrapeStatus,
    /// Wall-clock duration of the attempt in milliseconds.
    pub duration: u64,
}

/// Summary row returned by `HistoryStore::list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    pub url: String,
    pub timestamp: String,
    pub status: ScrapeStatus,
}
