//! Job digest pipeline - orchestrates the search-format-send flow.

use anyhow::Result;
use chrono::Utc;

use crate::config::JobConfig;
use crate::digest::{ist, DigestGenerator, EmailSender};
use crate::search::CseClient;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct RunSummary {
    /// Number of search results gathered and rendered.
    pub result_count: usize,
}

/// One-shot pipeline: search, format, deliver.
pub struct Pipeline {
    config: JobConfig,
}

impl Pipeline {
    /// Create a pipeline from resolved configuration.
    #[must_use]
    pub const fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline once. Search or delivery failures propagate; there
    /// is no retry and no partial-send state to clean up.
    pub async fn run(&self) -> Result<RunSummary> {
        println!("Gathering job results...");
        let client = CseClient::new(self.config.api_key.clone(), self.config.engine_id.clone())?;
        let results = client
            .gather(&self.config.query, self.config.max_results)
            .await?;
        println!("Found {} results", results.len());

        let now = Utc::now().with_timezone(&ist());
        let html = DigestGenerator::generate_html(&results, &self.config.query, now);
        let subject = format!(
            "Daily job digest — {} — {}",
            self.config.query,
            now.format("%Y-%m-%d")
        );

        println!("Sending email...");
        let sender = EmailSender::new(self.config.clone());
        sender.send(&subject, &html).await?;
        println!("Email sent.");

        Ok(RunSummary {
            result_count: results.len(),
        })
    }
}
