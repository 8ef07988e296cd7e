//! Server end-to-end tests
//!
//! Runs the real router on a random port and talks to it over HTTP.

mod common;

use common::TestHarness;
use marquee::server::create_router;
use serde_json::json;
use std::net::SocketAddr;
use tokio::task::JoinSet;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

async fn serve(harness: &TestHarness) -> SocketAddr {
    let app = create_router(harness.ctx.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_over_http() {
    let harness = TestHarness::new(false, false).await;
    let addr = serve(&harness).await;

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn concurrent_resolves_share_one_context() {
    let harness = TestHarness::new(true, false).await;
    Mock::given(method("GET"))
        .and(path("/3/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 603,
            "title": "The Matrix",
            "release_date": "1999-03-30"
        })))
        .expect(4)
        .mount(harness.tmdb())
        .await;
    let addr = serve(&harness).await;

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/v1/metadata/resolve?type=movie&tmdbId=603");
    let mut requests = JoinSet::new();
    for _ in 0..4 {
        requests.spawn(client.get(&url).send());
    }

    while let Some(resp) = requests.join_next().await {
        let resp = resp.unwrap().unwrap();
        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["title"], "The Matrix");
    }
}
