//! Configuration for the daily job digest, resolved from the environment.

/// Default SMTP host (Gmail).
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS submission).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Default search query when `JOB_QUERY` is unset.
pub const DEFAULT_QUERY: &str = "entry level cyber security jobs startups";

/// Default result cap when `MAX_RESULTS` is unset.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Environment variables that must be present for a run to proceed.
const REQUIRED_VARS: [&str; 5] = [
    "CSE_API_KEY",
    "CSE_CX",
    "EMAIL_USER",
    "EMAIL_PASS",
    "RECIPIENT_EMAIL",
];

/// Immutable per-run configuration.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Google Custom Search API key.
    pub api_key: String,
    /// Custom Search Engine identifier (`cx`).
    pub engine_id: String,
    /// Sender address, also the SMTP login.
    pub email_user: String,
    /// SMTP password (app password for Gmail).
    pub email_pass: String,
    /// Recipient address.
    pub recipient: String,
    /// Search query text.
    pub query: String,
    /// Maximum number of results to gather.
    pub max_results: usize,
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
}

/// Outcome of resolving configuration from the environment.
///
/// A missing required variable is a precondition failure, not an error: the
/// run is skipped cleanly after reporting which variables are absent.
#[derive(Debug)]
pub enum ConfigOutcome {
    /// All required values present; the run may proceed.
    Ready(JobConfig),
    /// One or more required variables are unset. Names in declaration order.
    Missing(Vec<&'static str>),
}

impl JobConfig {
    /// Resolve configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `CSE_API_KEY`: Google Custom Search API key
    /// - `CSE_CX`: Custom Search Engine identifier
    /// - `EMAIL_USER`: sender address and SMTP login
    /// - `EMAIL_PASS`: SMTP password (Gmail app password)
    /// - `RECIPIENT_EMAIL`: recipient address
    ///
    /// # Optional Environment Variables
    /// - `JOB_QUERY`: search query (default: entry-level cyber security jobs)
    /// - `MAX_RESULTS`: result cap (default: 10)
    /// - `SMTP_HOST`: SMTP server (default: smtp.gmail.com)
    /// - `SMTP_PORT`: SMTP port (default: 587)
    #[must_use]
    pub fn from_env() -> ConfigOutcome {
        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| std::env::var(name).ok().filter(|v| !v.is_empty()).is_none())
            .collect();

        if !missing.is_empty() {
            return ConfigOutcome::Missing(missing);
        }

        let get = |name: &str| std::env::var(name).unwrap_or_default();

        let query = std::env::var("JOB_QUERY").unwrap_or_else(|_| DEFAULT_QUERY.to_string());

        let max_results = std::env::var("MAX_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_RESULTS);

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());

        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        ConfigOutcome::Ready(Self {
            api_key: get("CSE_API_KEY"),
            engine_id: get("CSE_CX"),
            email_user: get("EMAIL_USER"),
            email_pass: get("EMAIL_PASS"),
            recipient: get("RECIPIENT_EMAIL"),
            query,
            max_results,
            smtp_host,
            smtp_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_all() {
        for name in REQUIRED_VARS {
            std::env::remove_var(name);
        }
        for name in ["JOB_QUERY", "MAX_RESULTS", "SMTP_HOST", "SMTP_PORT"] {
            std::env::remove_var(name);
        }
    }

    fn set_required() {
        std::env::set_var("CSE_API_KEY", "test-key");
        std::env::set_var("CSE_CX", "test-cx");
        std::env::set_var("EMAIL_USER", "sender@example.com");
        std::env::set_var("EMAIL_PASS", "hunter2");
        std::env::set_var("RECIPIENT_EMAIL", "dest@example.com");
    }

    #[test]
    #[serial]
    fn test_missing_lists_all_absent_vars() {
        clear_all();
        std::env::set_var("CSE_API_KEY", "test-key");

        match JobConfig::from_env() {
            ConfigOutcome::Missing(names) => {
                assert_eq!(
                    names,
                    vec!["CSE_CX", "EMAIL_USER", "EMAIL_PASS", "RECIPIENT_EMAIL"]
                );
            }
            ConfigOutcome::Ready(_) => panic!("expected Missing"),
        }
    }

    #[test]
    #[serial]
    fn test_empty_value_counts_as_missing() {
        clear_all();
        set_required();
        std::env::set_var("EMAIL_PASS", "");

        match JobConfig::from_env() {
            ConfigOutcome::Missing(names) => assert_eq!(names, vec!["EMAIL_PASS"]),
            ConfigOutcome::Ready(_) => panic!("expected Missing"),
        }
    }

    #[test]
    #[serial]
    fn test_defaults_applied() {
        clear_all();
        set_required();

        match JobConfig::from_env() {
            ConfigOutcome::Ready(config) => {
                assert_eq!(config.query, DEFAULT_QUERY);
                assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
                assert_eq!(config.smtp_host, DEFAULT_SMTP_HOST);
                assert_eq!(config.smtp_port, DEFAULT_SMTP_PORT);
            }
            ConfigOutcome::Missing(names) => panic!("unexpected missing: {names:?}"),
        }
    }

    #[test]
    #[serial]
    fn test_overrides_and_unparseable_fallback() {
        clear_all();
        set_required();
        std::env::set_var("JOB_QUERY", "rust jobs");
        std::env::set_var("MAX_RESULTS", "25");
        std::env::set_var("SMTP_HOST", "smtp.example.com");
        std::env::set_var("SMTP_PORT", "not-a-port");

        match JobConfig::from_env() {
            ConfigOutcome::Ready(config) => {
                assert_eq!(config.query, "rust jobs");
                assert_eq!(config.max_results, 25);
                assert_eq!(config.smtp_host, "smtp.example.com");
                assert_eq!(config.smtp_port, DEFAULT_SMTP_PORT);
            }
            ConfigOutcome::Missing(names) => panic!("unexpected missing: {names:?}"),
        }
    }
}
