//! Paginated web search against the Google Custom Search JSON API.

mod client;
mod types;

pub use client::{CseClient, SearchError, API_BASE};
pub use types::SearchResult;
