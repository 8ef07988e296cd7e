//! TMDB (The Movie Database) catalog client.
//!
//! Implements [`CatalogClient`] against the TMDB v3 REST API, plus the extra
//! read endpoints the dashboard uses for detail pages (seasons, collections,
//! credits, recommendations).
//!
//! Requests authenticate with the `api_key` query parameter and carry the
//! configured `language`. Every failure (connection, non-2xx, undecodable
//! body) is reported as a [`ProviderError`].

use std::time::Duration;

use async_trait::async_trait;
use marquee_common::MediaKind;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::tmdb_types::{
    TmdbCollection, TmdbCredits, TmdbDetail, TmdbListItem, TmdbPage, TmdbSeasonDetail,
};
use crate::metadata::error::{ProviderError, ProviderResult};
use crate::metadata::provider::CatalogClient;
use crate::services::ServiceRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PROVIDER: &str = "tmdb";
const TMDB_BASE_URL: &str = "https://api.themoviedb.org";
const DETAIL_APPENDS: &str = "credits,images,external_ids,keywords";

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// TMDB catalog client.
///
/// Holds one shared HTTP client; the target instance and API key come from
/// the [`ServiceRecord`] passed to each call.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use marquee::metadata::providers::TmdbClient;
///
/// let client = TmdbClient::new("en-US", Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    language: String,
}

impl TmdbClient {
    /// Create a client sending `language` with every request and giving up
    /// on a request after `timeout`.
    pub fn new(language: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                Client::new()
            });

        Self {
            client,
            language: language.into(),
        }
    }

    fn url(service: &ServiceRecord, path: &str) -> String {
        let base = if service.base_url.is_empty() {
            TMDB_BASE_URL
        } else {
            service.base_url.as_str()
        };
        format!("{base}/3{path}")
    }

    /// GET `path` (relative to `/3`) and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &ServiceRecord,
        path: &str,
        extra_params: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let url = Self::url(service, path);
        debug!(url = %url, service_id = service.id, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("api_key", service.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(extra_params)
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

    /// Fetch one season of a show, including its episodes.
    pub async fn get_season(
        &self,
        service: &ServiceRecord,
        tmdb_id: u64,
        season_number: u32,
    ) -> ProviderResult<TmdbSeasonDetail> {
        self.get_json(service, &format!("/tv/{tmdb_id}/season/{season_number}"), &[])
            .await
    }

    /// Fetch a movie collection and its parts.
    pub async fn get_collection(
        &self,
        service: &ServiceRecord,
        collection_id: u64,
    ) -> ProviderResult<TmdbCollection> {
        self.get_json(service, &format!("/collection/{collection_id}"), &[])
            .await
    }

    /// Fetch cast and crew.
    pub async fn get_credits(
        &self,
        service: &ServiceRecord,
        kind: MediaKind,
        tmdb_id: u64,
    ) -> ProviderResult<TmdbCredits> {
        self.get_json(service, &format!("/{}/{tmdb_id}/credits", segment(kind)), &[])
            .await
    }

    /// Fetch the first page of related items.
    pub async fn get_recommendations(
        &self,
        service: &ServiceRecord,
        kind: MediaKind,
        tmdb_id: u64,
    ) -> ProviderResult<TmdbPage<TmdbListItem>> {
        self.get_json(
            service,
            &format!("/{}/{tmdb_id}/recommendations", segment(kind)),
            &[],
        )
        .await
    }
}

/// TMDB calls shows "tv" in its paths.
fn segment(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "movie",
        MediaKind::Show => "tv",
    }
}

#[async_trait]
impl CatalogClient for TmdbClient {
    async fn get_movie(&self, service: &ServiceRecord, tmdb_id: u64) -> ProviderResult<TmdbDetail> {
        self.get_json(
            service,
            &format!("/movie/{tmdb_id}"),
            &[("append_to_response", DETAIL_APPENDS)],
        )
        .await
    }

    async fn get_show(&self, service: &ServiceRecord, tmdb_id: u64) -> ProviderResult<TmdbDetail> {
        self.get_json(
            service,
            &format!("/tv/{tmdb_id}"),
            &[("append_to_response", DETAIL_APPENDS)],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(base_url: &str) -> ServiceRecord {
        ServiceRecord {
            id: 1,
            name: "tmdb".to_string(),
            base_url: base_url.to_string(),
            api_key: "key".to_string(),
        }
    }

    #[test]
    fn url_uses_public_endpoint_when_unset() {
        assert_eq!(
            TmdbClient::url(&service(""), "/movie/603"),
            "https://api.themoviedb.org/3/movie/603"
        );
    }

    #[test]
    fn url_uses_configured_base() {
        assert_eq!(
            TmdbClient::url(&service("http://localhost:9000"), "/tv/1399"),
            "http://localhost:9000/3/tv/1399"
        );
    }

    #[test]
    fn path_segment_per_kind() {
        assert_eq!(segment(MediaKind::Movie), "movie");
        assert_eq!(segment(MediaKind::Show), "tv");
    }
}
