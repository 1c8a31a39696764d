//! HistoryStore semantics: id assignment, lookup, deletion, ordering.

mod common;

use common::sample_data;
use sitesift::{HistoryStore, ScrapeResult, ScrapeStatus};

fn success_result(url: &str) -> ScrapeResult {
    let mut data = sample_data();
    data.url = url.to_string();
    ScrapeResult {
        data: Some(data),
        error: None,
        status: ScrapeStatus::Success,
        duration: 12,
    }
}

fn error_result(message: &str) -> ScrapeResult {
    ScrapeResult {
        data: None,
        error: Some(message.to_string()),
        status: ScrapeStatus::Error,
        duration: 7,
    }
}

#[test]
fn insert_assigns_unique_stable_ids() {
    let store = HistoryStore::new();
    let a = store.insert(success_result("https://a.com/1"));
    let b = store.insert(success_result("https://a.com/2"));
    let c = store.insert(error_result("boom"));

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(&a).unwrap().data.unwrap().url, "https://a.com/1");
    assert_eq!(store.get(&b).unwrap().data.unwrap().url, "https://a.com/2");
    assert!(store.get("no-such-id").is_none());
}

#[test]
fn rapid_insertions_never_collide() {
    // Ids come from a counter, not the wall clock, so a burst of insertions
    // within one millisecond still yields distinct ids.
    let store = HistoryStore::new();
    let ids: std::collections::HashSet<String> = (0..1000)
        .map(|i| store.insert(success_result(&format!("https://a.com/{i}"))))
        .collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn list_preserves_insertion_order() {
    let store = HistoryStore::new();
    store.insert(success_result("https://a.com/first"));
    store.insert(error_result("unreachable"));
    store.insert(success_result("https://a.com/third"));

    let items = store.list();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].url, "https://a.com/first");
    assert_eq!(items[0].status, ScrapeStatus::Success);
    assert!(!items[0].timestamp.is_empty());

    // Failed scrapes have no data: empty URL, insertion-time timestamp.
    assert_eq!(items[1].url, "");
    assert_eq!(items[1].status, ScrapeStatus::Error);
    assert!(!items[1].timestamp.is_empty());

    assert_eq!(items[2].url, "https://a.com/third");
}

#[test]
fn delete_removes_permanently() {
    let store = HistoryStore::new();
    let id = store.insert(success_result("https://a.com/x"));

    assert!(store.delete(&id));
    assert!(store.get(&id).is_none());
    assert!(!store.delete(&id), "second delete finds nothing");
    assert!(store.is_empty());
}

#[test]
fn clear_empties_the_store() {
    let store = HistoryStore::new();
    for i in 0..5 {
        store.insert(success_result(&format!("https://a.com/{i}")));
    }
    assert_eq!(store.len(), 5);
    store.clear();
    assert!(store.is_empty());
    assert!(store.list().is_empty());
}
