//! HTML retrieval with a relay fallback chain.
//!
//! With an API key, retrieval is a single GET against a privileged scraping
//! API (JS rendering and premium proxies enabled server-side) and any failure
//! is terminal. Without a key, the retriever walks an ordered list of public
//! relay endpoints one at a time; the first 2xx response with a non-empty
//! body wins. Candidates are never raced and the list is walked exactly once
//! per attempt, with no retry or backoff.

mod relays;

pub use relays::{RelayEndpoint, default_relays};

use crate::config::ScraperOptions;
use crate::error::{ScrapeError, SiftResult};
use reqwest::header::USER_AGENT;

/// Privileged scraping-API endpoint used when an API key is supplied.
const SCRAPING_API_URL: &str = "https://api.zenrows.com/v1";

pub struct Retriever {
    client: reqwest::Client,
    api_base: String,
    relays: Vec<RelayEndpoint>,
}

impl Default for Retriever {
    fn default() -> Self {
        Self::new()
    }
}

impl Retriever {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: SCRAPING_API_URL.to_string(),
            relays: default_relays(),
        }
    }

    /// Override the privileged API base URL (tests point this at a mock).
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Replace the relay fallback list, preserving the given order.
    #[must_use]
    pub fn with_relays(mut self, relays: Vec<RelayEndpoint>) -> Self {
        self.relays = relays;
        self
    }

    /// Fetch raw HTML for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Network`] when the privileged API call fails or
    /// every relay candidate has been exhausted.
    pub async fn retrieve(
        &self,
        url: &str,
        options: &ScraperOptions,
        api_key: Option<&str>,
    ) -> SiftResult<String> {
        match api_key {
            Some(key) => self.retrieve_via_api(url, options, key).await,
            None => self.retrieve_via_relays(url, options).await,
        }
    }

    /// Single GET against the scraping API. No fallback in this branch: a
    /// non-2xx status or transport failure is terminal.
    async fn retrieve_via_api(
        &self,
        url: &str,
        options: &ScraperOptions,
        api_key: &str,
    ) -> SiftResult<String> {
        log::debug!("retrieving {url} via scraping API");
        let response = self
            .client
            .get(&self.api_base)
            .query(&[
                ("apikey", api_key),
                ("url", url),
                ("js_render", "true"),
                ("premium_proxy", "true"),
            ])
            .timeout(options.timeout())
            .send()
            .await
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Network(format!(
                "scraping API returned status {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Network(e.to_string()))
    }

    /// Walk the relay list in order, one pass, strictly sequentially.
    async fn retrieve_via_relays(&self, url: &str, options: &ScraperOptions) -> SiftResult<String> {
        let mut last_error: Option<String> = None;

        for relay in &self.relays {
            let proxy_url = relay.proxy_url(url);
            log::debug!("trying relay '{}' for {url}", relay.name);

            let response = match self
                .client
                .get(&proxy_url)
                .header(USER_AGENT, options.user_agent())
                .timeout(options.timeout())
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    log::warn!("relay '{}' failed for {url}: {e}", relay.name);
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                log::warn!("relay '{}' returned status {status} for {url}", relay.name);
                last_error = Some(format!("relay '{}' returned status {status}", relay.name));
                continue;
            }

            match response.text().await {
                Ok(body) if !body.is_empty() => {
                    log::debug!("relay '{}' succeeded for {url}", relay.name);
                    return Ok(body);
                }
                Ok(_) => {
                    last_error = Some(format!("relay '{}' returned an empty body", relay.name));
                }
                Err(e) => {
                    last_error = Some(e.to_string());
                }
            }
        }

        Err(ScrapeError::Network(last_error.unwrap_or_else(|| {
            "all relay endpoints failed".to_string()
        })))
    }
}
