//! In-memory record of past scrape results.
//!
//! The store is owned by the orchestration layer and passed by reference to
//! callers that need it; there is no ambient global. Access is serialized
//! with a mutex so the store stays sound when the surrounding system runs
//! multi-threaded. Growth is unbounded by design; callers prune via
//! `delete`/`clear`.

use crate::model::{HistoryItem, ScrapeResult};
use chrono::{SecondsFormat, Utc};
use parking_lot::Mutex;

struct HistoryEntry {
    id: String,
    inserted_at: String,
    result: ScrapeResult,
}

#[derive(Default)]
struct HistoryInner {
    next_id: u64,
    entries: Vec<HistoryEntry>,
}

/// Keyed map from id to [`ScrapeResult`], preserving insertion order.
///
/// Ids come from a monotonic counter, so two insertions in the same
/// millisecond still get distinct ids. An id is assigned at insertion time
/// and stable thereafter; deletion removes the entry permanently.
#[derive(Default)]
pub struct HistoryStore {
    inner: Mutex<HistoryInner>,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result and return its newly assigned id.
    pub fn insert(&self, result: ScrapeResult) -> String {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = inner.next_id.to_string();
        inner.entries.push(HistoryEntry {
            id: id.clone(),
            inserted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            result,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<ScrapeResult> {
        self.inner
            .lock()
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.result.clone())
    }

    /// Remove an entry. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.lock();
        let before = inner.entries.len();
        inner.entries.retain(|entry| entry.id != id);
        inner.entries.len() != before
    }

    /// Summaries of all entries in insertion order. Failed scrapes carry no
    /// data, so their summary falls back to an empty URL and the insertion
    /// timestamp.
    #[must_use]
    pub fn list(&self) -> Vec<HistoryItem> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|entry| HistoryItem {
                id: entry.id.clone(),
                url: entry
                    .result
                    .data
                    .as_ref()
                    .map(|data| data.url.clone())
                    .unwrap_or_default(),
                timestamp: entry
                    .result
                    .data
                    .as_ref()
                    .map(|data| data.timestamp.clone())
                    .unwrap_or_else(|| entry.inserted_at.clone()),
                status: entry.result.status,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}
