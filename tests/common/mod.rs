//! Shared test harness for integration tests.
//!
//! Upstream TMDB and Trakt are replaced by [`wiremock`] servers; the
//! [`TestHarness`] wires a real [`AppContext`] to them through the config.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use marquee::config::{Config, ServiceConfig, ServiceType};
use marquee::server::{create_router, AppContext};
use marquee::services::ServiceRecord;
use tower::ServiceExt;
use wiremock::MockServer;

pub const TMDB_KEY: &str = "tmdb-test-key";
pub const TRAKT_KEY: &str = "trakt-test-client-id";

/// Config entry for a metadata provider served by `server`.
pub fn provider_service(service_type: ServiceType, server: &MockServer) -> ServiceConfig {
    let api_key = match service_type {
        ServiceType::Tmdb => TMDB_KEY,
        _ => TRAKT_KEY,
    };
    ServiceConfig {
        name: format!("{service_type} (mock)"),
        service_type,
        url: format!("{}/", server.uri()),
        api_key: api_key.to_string(),
        enabled: true,
    }
}

/// Service record pointing at `server`, as the registry would hand it out.
pub fn service_record(server: &MockServer, api_key: &str) -> ServiceRecord {
    ServiceRecord {
        id: 1,
        name: "mock".to_string(),
        base_url: server.uri(),
        api_key: api_key.to_string(),
    }
}

/// Test harness wrapping an [`AppContext`] whose providers point at mock
/// servers.
pub struct TestHarness {
    pub ctx: AppContext,
    pub tmdb: Option<MockServer>,
    pub trakt: Option<MockServer>,
}

impl TestHarness {
    /// Harness with the given providers configured.
    pub async fn new(with_tmdb: bool, with_trakt: bool) -> Self {
        let tmdb = if with_tmdb {
            Some(MockServer::start().await)
        } else {
            None
        };
        let trakt = if with_trakt {
            Some(MockServer::start().await)
        } else {
            None
        };

        let mut config = Config::default();
        if let Some(server) = &tmdb {
            config
                .services
                .push(provider_service(ServiceType::Tmdb, server));
        }
        if let Some(server) = &trakt {
            config
                .services
                .push(provider_service(ServiceType::Trakt, server));
        }

        Self {
            ctx: AppContext::from_config(config),
            tmdb,
            trakt,
        }
    }

    pub fn tmdb(&self) -> &MockServer {
        self.tmdb.as_ref().expect("TMDB mock not configured")
    }

    pub fn trakt(&self) -> &MockServer {
        self.trakt.as_ref().expect("Trakt mock not configured")
    }

    /// Send a GET through the router and return status plus JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let app = create_router(self.ctx.clone());
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }

    /// Total requests received by both mocks.
    pub async fn upstream_calls(&self) -> usize {
        let mut total = 0;
        for server in [&self.tmdb, &self.trakt].into_iter().flatten() {
            total += server.received_requests().await.unwrap_or_default().len();
        }
        total
    }
}
