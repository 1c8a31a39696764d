//! Scrape orchestration.
//!
//! `ScraperService` owns the options, the retriever, and the history store,
//! and wires retrieval into extraction. Each call to [`ScraperService::scrape_url`]
//! produces exactly one [`ScrapeResult`], success or failure; no internal
//! error propagates past it.

use crate::config::ScraperOptions;
use crate::extractor;
use crate::history::HistoryStore;
use crate::model::{ScrapeResult, ScrapeStatus, ScrapedData};
use crate::retriever::Retriever;
use crate::serializer::{self, ExportFormat};
use chrono::{SecondsFormat, Utc};
use std::time::Instant;
use url::Url;

/// Exportable rendering of a scrape, ready to hand to a download or file
/// write.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
}

pub struct ScraperService {
    options: ScraperOptions,
    retriever: Retriever,
    history: HistoryStore,
}

impl Default for ScraperService {
    fn default() -> Self {
        Self::new()
    }
}

impl ScraperService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ScraperOptions::default())
    }

    #[must_use]
    pub fn with_options(options: ScraperOptions) -> Self {
        Self {
            options,
            retriever: Retriever::new(),
            history: HistoryStore::new(),
        }
    }

    /// Swap in a retriever, e.g. one whose endpoints point at a mock server.
    #[must_use]
    pub fn with_retriever(mut self, retriever: Retriever) -> Self {
        self.retriever = retriever;
        self
    }

    pub fn update_options(&mut self, options: ScraperOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn options(&self) -> &ScraperOptions {
        &self.options
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Retrieve and extract `url`, record the outcome in history, and return
    /// it. Always yields a value: retrieval failures come back as a result
    /// with `status == Error` and a message, never as a panic or an `Err`.
    pub async fn scrape_url(&self, url: &str, api_key: Option<&str>) -> ScrapeResult {
        let started = Instant::now();
        log::info!("scraping {url}");

        let result = match self.retriever.retrieve(url, &self.options, api_key).await {
            Ok(html) => {
                let page = extractor::extract(&html, url, &self.options);
                let data = ScrapedData {
                    url: url.to_string(),
                    title: page.title,
                    timestamp: now_iso(),
                    metadata: page.metadata,
                    content: page.content,
                };
                ScrapeResult {
                    data: Some(data),
                    error: None,
                    status: ScrapeStatus::Success,
                    duration: duration_ms(started),
                }
            }
            Err(e) => {
                log::warn!("scrape of {url} failed: {e}");
                ScrapeResult {
                    data: None,
                    error: Some(e.to_string()),
                    status: ScrapeStatus::Error,
                    duration: duration_ms(started),
                }
            }
        };

        self.history.insert(result.clone());
        result
    }

    /// Render `data` for download: serialized content, a
    /// `<host>-<timestamp>.<ext>` filename, and the format's MIME type.
    #[must_use]
    pub fn export(&self, data: &ScrapedData, format: ExportFormat) -> ExportPayload {
        let content = serializer::serialize(data, format);
        let stamp = now_iso().replace([':', '.'], "-");
        let host = Url::parse(&data.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "export".to_string());

        ExportPayload {
            content,
            filename: format!("{host}-{stamp}.{}", format.extension()),
            mime_type: format.mime_type(),
        }
    }
}

/// ISO-8601 UTC with millisecond precision and a `Z` suffix.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn duration_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
