use super::common;

use agentdeck::config::CatalogLimits;
use common::test_server::TestServer;
use serde_json::{json, Value};

#[tokio::test]
async fn test_agent_lifecycle_over_http() {
    let server = TestServer::new().await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/api/agents"))
        .json(&json!({
            "name": "Foo",
            "description": "Knows the docs",
            "urls": ["https://example.com/docs"],
            "files": [{ "name": "guide.pdf", "size": 1024, "content_type": "application/pdf" }],
            "is_recursive": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let list: Value = client
        .get(server.url("/api/agents"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
    assert_eq!(list["data"][0]["file_count"], 1);

    let response = client
        .delete(server.url(&format!("/api/agents/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = client
        .get(server.url(&format!("/api/agents/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_catalog_limit_is_reported() {
    let server = TestServer::with_limits(CatalogLimits {
        max_agents: 1,
        ..CatalogLimits::default()
    })
    .await;
    let client = reqwest::Client::new();
    let body = json!({ "name": "Foo", "urls": ["https://example.com"] });

    let first = client.post(server.url("/api/agents")).json(&body).send().await.unwrap();
    assert_eq!(first.status(), 201);

    let second = client.post(server.url("/api/agents")).json(&body).send().await.unwrap();
    assert_eq!(second.status(), 422);
    let err: Value = second.json().await.unwrap();
    assert_eq!(err["success"], false);
}
