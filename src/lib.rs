//! sitesift: structured-data extraction from web pages.
//!
//! Given a URL, [`ScraperService`] retrieves its HTML (through a privileged
//! scraping API or an ordered chain of public relay endpoints), parses it
//! into a structured document model, records the outcome in an in-memory
//! history, and renders the model as JSON, CSV, or XML on demand.

pub mod config;
pub mod error;
pub mod extractor;
pub mod history;
pub mod model;
pub mod retriever;
pub mod serializer;
pub mod service;

pub use config::ScraperOptions;
pub use error::{ScrapeError, SiftResult};
pub use history::HistoryStore;
pub use model::{
    Heading, HistoryItem, Image, Link, ListBlock, ListKind, PageContent, PageMetadata,
    ScrapeResult, ScrapeStatus, ScrapedData, TableBlock,
};
pub use retriever::{RelayEndpoint, Retriever, default_relays};
pub use serializer::{ExportFormat, serialize};
pub use service::{ExportPayload, ScraperService};
