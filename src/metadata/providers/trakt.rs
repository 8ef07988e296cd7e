//! Trakt tracking-service client.
//!
//! Implements [`TrackingClient`] against the Trakt v2 API. All item requests
//! ask for `extended=full,images` so detail, ratings and artwork arrive in one
//! payload.

use std::time::Duration;

use async_trait::async_trait;
use marquee_common::{ExternalIdType, MediaKind};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::trakt_types::{TraktItem, TraktSearchResult, TraktSeason};
use crate::metadata::error::{ProviderError, ProviderResult};
use crate::metadata::provider::TrackingClient;
use crate::services::ServiceRecord;

const PROVIDER: &str = "trakt";
const TRAKT_BASE_URL: &str = "https://api.trakt.tv";
const TRAKT_API_VERSION: &str = "2";
const EXTENDED: &str = "full,images";

/// Trakt client. The API key (client id) comes from the [`ServiceRecord`]
/// passed to each call.
#[derive(Debug, Clone)]
pub struct TraktClient {
    client: Client,
}

impl TraktClient {
    /// Create a client giving up on a request after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self { client }
    }

    fn url(service: &ServiceRecord, path: &str) -> String {
        let base = if service.base_url.is_empty() {
            TRAKT_BASE_URL
        } else {
            service.base_url.as_str()
        };
        format!("{base}{path}")
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &ServiceRecord,
        path: &str,
        params: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let url = Self::url(service, path);
        debug!(url = %url, service_id = service.id, "Trakt request");

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header("trakt-api-version", TRAKT_API_VERSION)
            .header("trakt-api-key", &service.api_key)
            .query(params)
            .send()
            .await
            .map_err(|source| ProviderError::Transport {
                provider: PROVIDER,
                path: path.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                provider: PROVIDER,
                path: path.to_string(),
                status,
            });
        }

        resp.json().await.map_err(|source| ProviderError::Decode {
            provider: PROVIDER,
            path: path.to_string(),
            source,
        })
    }

    /// Free-text search for movies or shows.
    pub async fn search_text(
        &self,
        service: &ServiceRecord,
        query: &str,
        kind: MediaKind,
    ) -> ProviderResult<Vec<TraktSearchResult>> {
        self.get_json(
            service,
            &format!("/search/{}", kind.as_str()),
            &[("query", query), ("extended", EXTENDED)],
        )
        .await
    }
}

#[async_trait]
impl TrackingClient for TraktClient {
    async fn get_movie(&self, service: &ServiceRecord, trakt_id: u64) -> ProviderResult<TraktItem> {
        self.get_json(service, &format!("/movies/{trakt_id}"), &[("extended", EXTENDED)])
            .await
    }

    async fn get_show(&self, service: &ServiceRecord, trakt_id: u64) -> ProviderResult<TraktItem> {
        self.get_json(service, &format!("/shows/{trakt_id}"), &[("extended", EXTENDED)])
            .await
    }

    async fn get_show_seasons(
        &self,
        service: &ServiceRecord,
        trakt_id: u64,
    ) -> ProviderResult<Vec<TraktSeason>> {
        self.get_json(
            service,
            &format!("/shows/{trakt_id}/seasons"),
            &[("extended", EXTENDED)],
        )
        .await
    }

    async fn search_by_external_id(
        &self,
        service: &ServiceRecord,
        id_type: ExternalIdType,
        id_value: &str,
        kind: Option<MediaKind>,
    ) -> ProviderResult<Vec<TraktSearchResult>> {
        let segment = id_segment(id_value).ok_or_else(|| ProviderError::InvalidId {
            provider: PROVIDER,
            value: id_value.to_string(),
        })?;
        let path = format!("/search/{}/{}", id_type.as_str(), segment);
        match kind {
            Some(kind) => {
                self.get_json(service, &path, &[("type", kind.as_str())])
                    .await
            }
            None => self.get_json(service, &path, &[]).await,
        }
    }
}

/// Percent-encode a caller-supplied id for use as one path segment.
///
/// Dot-only values are refused; URL parsing would collapse them as `.`/`..`
/// segments even when encoded.
fn id_segment(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.chars().all(|c| c == '.') {
        return None;
    }
    Some(urlencoding::encode(value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_segment_is_encoded() {
        assert_eq!(id_segment("tt0133093").as_deref(), Some("tt0133093"));
        assert_eq!(
            id_segment("tt1/../movies/1?x=").as_deref(),
            Some("tt1%2F..%2Fmovies%2F1%3Fx%3D")
        );
        assert_eq!(id_segment(".."), None);
        assert_eq!(id_segment("  "), None);
    }

    #[test]
    fn url_defaults_to_public_api() {
        let service = ServiceRecord {
            id: 2,
            name: "trakt".to_string(),
            base_url: String::new(),
            api_key: "client-id".to_string(),
        };
        assert_eq!(
            TraktClient::url(&service, "/shows/1390"),
            "https://api.trakt.tv/shows/1390"
        );
    }
}
