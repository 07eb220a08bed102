//! job-digest - scheduled job-search digest emailer.
//!
//! One linear run per invocation: check configuration, search, format,
//! deliver. Intended to be triggered by an external scheduler (cron, CI).

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use job_digest::config::{ConfigOutcome, JobConfig};
use job_digest::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("job_digest=info,warn"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = match JobConfig::from_env() {
        ConfigOutcome::Ready(config) => config,
        ConfigOutcome::Missing(names) => {
            // Deliberate soft-abort: a skipped run is not a failure.
            println!(
                "Missing one of required environment variables: {}",
                names.join(", ")
            );
            return Ok(());
        }
    };

    tracing::info!(
        query = %config.query,
        max_results = config.max_results,
        smtp_host = %config.smtp_host,
        "Starting digest run"
    );

    let pipeline = Pipeline::new(config);
    let summary = pipeline.run().await?;

    tracing::info!(result_count = summary.result_count, "Digest run complete");

    Ok(())
}
