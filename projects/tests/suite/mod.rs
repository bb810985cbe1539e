mod gallery_lifecycle;
mod http_resolution;

use folio_projects::FolioConfig;
use wiremock::MockServer;

/// Config pointing both the listing API and the raw host at `server`.
pub fn config_for(server: &MockServer) -> FolioConfig {
    let mut config = FolioConfig {
        account: Some("alice".to_string()),
        api_base_url: server.uri(),
        raw_base_url: server.uri(),
        request_timeout_ms: 1_000,
        user_agent: "folio-tests".to_string(),
        ..Default::default()
    };
    config.validate().expect("valid test config");
    config
}

pub fn repo_json(server: &MockServer, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("alice/{name}"),
        "html_url": format!("{}/alice/{name}", server.uri()),
        "homepage": null,
        "description": null,
        "fork": false
    })
}
