//! Daily job-search digest.
//!
//! This crate provides:
//! - Paginated querying of the Google Custom Search JSON API
//! - HTML digest formatting with escaping and an injected clock
//! - Email delivery over authenticated STARTTLS SMTP
//! - A one-shot pipeline tying the three together

pub mod config;
pub mod digest;
pub mod pipeline;
pub mod search;

// Re-export main types
pub use config::{ConfigOutcome, JobConfig};
pub use digest::{DigestGenerator, EmailSender};
pub use pipeline::{Pipeline, RunSummary};
pub use search::{CseClient, SearchError, SearchResult};
