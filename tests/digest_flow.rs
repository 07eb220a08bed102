//! Search-to-digest flow tests: gathered results feed the formatter directly.

use chrono::TimeZone;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use job_digest::digest::{ist, DigestGenerator};
use job_digest::search::CseClient;

#[tokio::test]
async fn three_results_render_three_list_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "title": "Junior SOC Analyst", "link": "https://example.com/1", "snippet": "Remote" },
                { "title": "Security Engineer I", "link": "https://example.com/2", "snippet": "Hybrid" },
                { "title": "GRC Associate", "link": "https://example.com/3", "snippet": "On-site" }
            ]
        })))
        .mount(&server)
        .await;

    let client = CseClient::new("k".to_string(), "cx".to_string())
        .expect("client builds")
        .with_base_url(server.uri());
    let results = client
        .gather("entry level cyber security jobs", 3)
        .await
        .expect("gather succeeds");

    let clock = ist().with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let html = DigestGenerator::generate_html(&results, "entry level cyber security jobs", clock);

    assert_eq!(html.matches("<li>").count(), 3);
    assert!(html.contains("Junior SOC Analyst"));
    assert!(html.contains("<h2>Job search results: entry level cyber security jobs</h2>"));
}

#[tokio::test]
async fn empty_search_still_produces_sendable_digest() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = CseClient::new("k".to_string(), "cx".to_string())
        .expect("client builds")
        .with_base_url(server.uri());
    let results = client.gather("q", 10).await.expect("gather succeeds");

    let clock = ist().with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let html = DigestGenerator::generate_html(&results, "q", clock);

    // The run does not abort on zero results: the digest body is still a
    // complete document with the notice and footer.
    assert!(html.contains("<p>No results found.</p>"));
    assert!(html.contains("<hr/><p>Automation generated"));
    assert!(!html.contains("<ol>"));
}
