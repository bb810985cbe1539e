use std::sync::Arc;
use std::time::Duration;

use folio_projects::GalleryLoader;
use folio_projects::GalleryState;
use folio_projects::ProjectResolver;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;
use wiremock::matchers::method;
use wiremock::matchers::path;

use super::config_for;
use super::repo_json;

#[tokio::test]
async fn gallery_settles_populated_in_display_order() {
    let server = MockServer::start().await;
    let repos = json!([
        repo_json(&server, "older"),
        repo_json(&server, "undated"),
        repo_json(&server, "newer"),
    ]);
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .mount(&server)
        .await;
    for (repo, meta) in [
        ("older", json!({ "date": "2023-06-01" })),
        ("undated", json!({})),
        ("newer", json!({ "date": "2024-01-01" })),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/alice/{repo}/main/project.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(meta))
            .mount(&server)
            .await;
    }

    let config = config_for(&server);
    let resolver = Arc::new(ProjectResolver::from_config(&config).expect("resolver"));
    let mut loader = GalleryLoader::spawn(resolver, config.account.clone());

    let state = loader.settled().await;
    let titles: Vec<&str> = state.projects().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older", "undated"]);
}

#[tokio::test]
async fn gallery_shows_empty_when_listing_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let resolver = Arc::new(ProjectResolver::from_config(&config).expect("resolver"));
    let mut loader = GalleryLoader::spawn(resolver, config.account.clone());

    assert_eq!(loader.settled().await, GalleryState::Empty);
}

#[tokio::test]
async fn gallery_without_account_is_empty() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    let resolver = Arc::new(ProjectResolver::from_config(&config).expect("resolver"));
    let mut loader = GalleryLoader::spawn(resolver, None);

    assert_eq!(loader.settled().await, GalleryState::Empty);
}

#[tokio::test]
async fn gallery_passes_through_pending_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([repo_json(&server, "solo")]))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alice/solo/main/project.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "Solo" })))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let resolver = Arc::new(ProjectResolver::from_config(&config).expect("resolver"));
    let loader = GalleryLoader::spawn(resolver, config.account.clone());
    let mut rx = loader.subscribe();

    assert_eq!(*rx.borrow_and_update(), GalleryState::Pending);
    rx.changed().await.expect("state change");
    let state = rx.borrow_and_update().clone();
    assert!(matches!(state, GalleryState::Populated(ref p) if p.len() == 1));

    // Exactly one transition: nothing else is ever published.
    drop(loader);
    assert!(rx.changed().await.is_err());
}

#[tokio::test]
async fn teardown_abandons_inflight_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/alice/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.request_timeout_ms = 30_000;
    let resolver = Arc::new(ProjectResolver::from_config(&config).expect("resolver"));
    let loader = GalleryLoader::spawn(resolver, config.account.clone());
    tokio::time::sleep(Duration::from_millis(50)).await;

    loader.teardown();
    tokio::time::timeout(Duration::from_secs(2), async {
        while !loader.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("task should stop promptly after teardown");

    assert_eq!(loader.state(), GalleryState::Pending);
}
