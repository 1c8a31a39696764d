//! Scraper configuration.
//!
//! `ScraperOptions` is the capability/config bag accepted from callers. Only
//! `extract_images`, `extract_links`, `extract_text`, `user_agent`, and
//! `timeout_ms` are enforced by the retriever/extractor; `wait_time`, `depth`,
//! and `concurrency` are accepted for interface compatibility but currently
//! have no effect.

use crate::serializer::ExportFormat;
use serde::{Deserialize, Serialize};

/// Desktop-browser User-Agent sent to relay endpoints.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScraperOptions {
    /// Post-render delay in seconds. Accepted but inert: the core does no
    /// JavaScript rendering.
    pub wait_time: u32,
    /// Recursive crawl depth. Accepted but inert: the core scrapes one page.
    pub depth: u32,
    pub extract_images: bool,
    pub extract_links: bool,
    pub extract_text: bool,
    pub data_format: ExportFormat,
    /// Accepted but inert: retrieval is a single unit of work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Per-candidate request timeout in milliseconds.
    #[serde(default, rename = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for ScraperOptions {
    fn default() -> Self {
        Self {
            wait_time: 3,
            depth: 2,
            extract_images: true,
            extract_links: true,
            extract_text: true,
            data_format: ExportFormat::Json,
            concurrency: Some(1),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl ScraperOptions {
    #[must_use]
    pub fn with_extract_images(mut self, enabled: bool) -> Self {
        self.extract_images = enabled;
        self
    }

    #[must_use]
    pub fn with_extract_links(mut self, enabled: bool) -> Self {
        self.extract_links = enabled;
        self
    }

    #[must_use]
    pub fn with_extract_text(mut self, enabled: bool) -> Self {
        self.extract_text = enabled;
        self
    }

    #[must_use]
    pub fn with_data_format(mut self, format: ExportFormat) -> Self {
        self.data_format = format;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Effective User-Agent for outbound requests.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Effective per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }
}
