//! HTML digest formatter.
//!
//! Pure function of (results, query, clock); the clock is injected so output
//! is byte-for-byte reproducible in tests.

use chrono::{DateTime, FixedOffset};

use crate::search::SearchResult;

/// IST offset from UTC, in seconds (+05:30).
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// The fixed civil offset the digest header is rendered in.
pub fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is within +/-24h")
}

/// Builds the digest email body from search results.
pub struct DigestGenerator;

impl DigestGenerator {
    /// Render the HTML digest for `results` of `query`, stamped `generated_at`.
    ///
    /// Every interpolated field is escaped before embedding, so hostile
    /// result content cannot break out of the markup.
    #[must_use]
    pub fn generate_html(
        results: &[SearchResult],
        query: &str,
        generated_at: DateTime<FixedOffset>,
    ) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!(
            "<h2>Job search results: {}</h2>",
            html_escape(query)
        ));
        lines.push(format!(
            "<p>Search run at {} UTC+05:30 (IST)</p>",
            generated_at.format("%Y-%m-%d %H:%M")
        ));

        if results.is_empty() {
            lines.push("<p>No results found.</p>".to_string());
        } else {
            lines.push("<ol>".to_string());
            for result in results {
                let title = match result.title.as_deref() {
                    Some(t) if !t.is_empty() => html_escape(t),
                    _ => "No title".to_string(),
                };
                let link = html_escape(result.link.as_deref().unwrap_or(""));
                let snippet = html_escape(result.snippet.as_deref().unwrap_or("").trim());

                lines.push(format!(
                    r#"<li><a href="{link}">{title}</a><br/><small>{snippet}</small></li>"#
                ));
            }
            lines.push("</ol>".to_string());
        }

        lines.push(
            "<hr/><p>Automation generated - tweak the queries or sources as needed.</p>"
                .to_string(),
        );

        lines.join("\n")
    }
}

/// Simple HTML escaping for user content.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
