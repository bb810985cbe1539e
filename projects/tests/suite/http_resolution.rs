use std::time::Duration;

use folio_projects::ErrorCategory;
use folio_projects::ProjectRecord;
use folio_projects::ProjectResolver;
use folio_projects::sort_for_display;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::header;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;

use super::config_for;
use super::repo_json;

async fn mount_listing(server: &MockServer, names: &[&str]) {
    let repos: Vec<_> = names.iter().map(|n| repo_json(server, n)).collect();
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .mount(server)
        .await;
}

async fn mount_metadata(server: &MockServer, repo: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/alice/{repo}/main/project.json")))
        .respond_with(response)
        .mount(server)
        .await;
}

fn titles(records: &[ProjectRecord]) -> Vec<&str> {
    let mut titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    titles.sort_unstable();
    titles
}

#[tokio::test]
async fn only_repository_with_metadata_is_resolved() {
    let server = MockServer::start().await;
    mount_listing(&server, &["alpha", "beta", "gamma"]).await;
    mount_metadata(
        &server,
        "beta",
        ResponseTemplate::new(200).set_body_json(json!({
            "title": "X",
            "date": "2024-01-01"
        })),
    )
    .await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.title, "X");
    assert_eq!(record.tags, Vec::<String>::new());
    assert_eq!(record.date.as_deref(), Some("2024-01-01"));
    assert_eq!(record.repo, format!("{}/alice/beta", server.uri()));
    assert_eq!(record.url, record.repo);
    assert_eq!(
        record.thumbnail,
        format!("{}/alice/beta/main/thumbnail.png", server.uri())
    );
}

#[tokio::test]
async fn no_metadata_anywhere_yields_empty() {
    let server = MockServer::start().await;
    mount_listing(&server, &["alpha", "beta"]).await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");

    assert!(records.is_empty());
}

#[tokio::test]
async fn absent_account_makes_no_requests() {
    let server = MockServer::start().await;
    mount_listing(&server, &["alpha"]).await;

    let mut config = config_for(&server);
    config.account = None;
    let resolver = ProjectResolver::from_config(&config).expect("resolver");

    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");
    assert!(records.is_empty());

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 0);
}

#[tokio::test]
async fn malformed_and_failing_metadata_are_soft_exclusions() {
    let server = MockServer::start().await;
    mount_listing(&server, &["good", "garbled", "erroring", "missing"]).await;
    mount_metadata(
        &server,
        "good",
        ResponseTemplate::new(200).set_body_json(json!({ "tags": ["rust", "wasm"] })),
    )
    .await;
    mount_metadata(
        &server,
        "garbled",
        ResponseTemplate::new(200).set_body_string("{ this is not json"),
    )
    .await;
    mount_metadata(&server, "erroring", ResponseTemplate::new(500)).await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");

    assert_eq!(titles(&records), vec!["good"]);
    assert_eq!(records[0].tags, vec!["rust".to_string(), "wasm".to_string()]);
}

#[tokio::test]
async fn slow_metadata_times_out_alone() {
    let server = MockServer::start().await;
    mount_listing(&server, &["quick", "sluggish"]).await;
    mount_metadata(
        &server,
        "quick",
        ResponseTemplate::new(200).set_body_json(json!({})),
    )
    .await;
    mount_metadata(
        &server,
        "sluggish",
        ResponseTemplate::new(200)
            .set_body_json(json!({}))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let mut config = config_for(&server);
    config.request_timeout_ms = 300;
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");

    assert_eq!(titles(&records), vec!["quick"]);
}

#[tokio::test]
async fn metadata_fetches_run_concurrently() {
    let server = MockServer::start().await;
    let names: Vec<String> = (0..8).map(|i| format!("repo{i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    mount_listing(&server, &name_refs).await;
    for name in &names {
        mount_metadata(
            &server,
            name,
            ResponseTemplate::new(200)
                .set_body_json(json!({ "title": name }))
                .set_delay(Duration::from_millis(300)),
        )
        .await;
    }

    let mut config = config_for(&server);
    config.request_timeout_ms = 5_000;
    let resolver = ProjectResolver::from_config(&config).expect("resolver");

    let started = std::time::Instant::now();
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");
    let elapsed = started.elapsed();

    assert_eq!(records.len(), 8);
    // Sequential fetches would take 2.4s.
    assert!(
        elapsed < Duration::from_millis(1_200),
        "8 delayed fetches took {elapsed:?}"
    );
}

#[tokio::test]
async fn listing_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded"
        })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let err = resolver
        .resolve_projects(config.account())
        .await
        .expect_err("listing should fail");

    assert_eq!(err.category(), ErrorCategory::UpstreamListing);
    assert!(err.to_string().contains("HTTP 403"), "{err}");
}

#[tokio::test]
async fn listing_object_instead_of_array_is_a_listing_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Not Found" })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let err = resolver
        .resolve_projects(config.account())
        .await
        .expect_err("payload should be rejected");

    assert_eq!(err.category(), ErrorCategory::UpstreamListing);
}

#[tokio::test]
async fn requests_carry_user_agent_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .and(header("user-agent", "folio-tests"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");

    assert!(records.is_empty());
}

#[tokio::test]
async fn homepage_and_descriptions_flow_into_records() {
    let server = MockServer::start().await;
    let mut repo = repo_json(&server, "site");
    repo["homepage"] = json!("https://alice.example/site");
    repo["description"] = json!("from the repository");
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([repo])))
        .mount(&server)
        .await;
    mount_metadata(
        &server,
        "site",
        ResponseTemplate::new(200).set_body_json(json!({ "date": "2023-06-01" })),
    )
    .await;

    let config = config_for(&server);
    let resolver = ProjectResolver::from_config(&config).expect("resolver");
    let mut records = resolver
        .resolve_projects(config.account())
        .await
        .expect("resolve");
    sort_for_display(&mut records);

    assert_eq!(records[0].title, "site");
    assert_eq!(records[0].url, "https://alice.example/site");
    assert_eq!(records[0].description, "from the repository");
}
