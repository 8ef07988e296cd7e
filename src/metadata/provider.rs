//! Client traits for the two upstream metadata providers.
//!
//! The resolver talks to TMDB (the catalog) and Trakt (the tracker) only
//! through these traits, so each cascade step can be exercised against stub
//! clients. Every method takes the [`ServiceRecord`] to use, which carries the
//! base URL and credentials from the registry.

use async_trait::async_trait;
use marquee_common::{ExternalIdType, MediaKind};

use super::error::ProviderResult;
use super::providers::tmdb_types::TmdbDetail;
use super::providers::trakt_types::{TraktItem, TraktSearchResult, TraktSeason};
use crate::services::ServiceRecord;

/// Read access to the metadata catalog (TMDB).
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch full movie detail.
    async fn get_movie(&self, service: &ServiceRecord, tmdb_id: u64) -> ProviderResult<TmdbDetail>;

    /// Fetch full show detail.
    async fn get_show(&self, service: &ServiceRecord, tmdb_id: u64) -> ProviderResult<TmdbDetail>;

    /// Fetch movie or show detail depending on `kind`.
    async fn get_detail(
        &self,
        service: &ServiceRecord,
        kind: MediaKind,
        tmdb_id: u64,
    ) -> ProviderResult<TmdbDetail> {
        match kind {
            MediaKind::Movie => self.get_movie(service, tmdb_id).await,
            MediaKind::Show => self.get_show(service, tmdb_id).await,
        }
    }
}

/// Read access to the tracking service (Trakt).
#[async_trait]
pub trait TrackingClient: Send + Sync {
    /// Fetch full movie detail.
    async fn get_movie(&self, service: &ServiceRecord, trakt_id: u64) -> ProviderResult<TraktItem>;

    /// Fetch full show detail.
    async fn get_show(&self, service: &ServiceRecord, trakt_id: u64) -> ProviderResult<TraktItem>;

    /// Fetch the season list of a show.
    async fn get_show_seasons(
        &self,
        service: &ServiceRecord,
        trakt_id: u64,
    ) -> ProviderResult<Vec<TraktSeason>>;

    /// Look up items by an id from another provider.
    ///
    /// Results keep the provider's order; the first one is authoritative.
    async fn search_by_external_id(
        &self,
        service: &ServiceRecord,
        id_type: ExternalIdType,
        id_value: &str,
        kind: Option<MediaKind>,
    ) -> ProviderResult<Vec<TraktSearchResult>>;
}
