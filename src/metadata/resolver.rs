//! The metadata resolution cascade.
//!
//! Given whatever external ids a caller has and the media kind, the
//! [`Resolver`] tries an ordered list of [`ResolveStep`]s and returns the
//! first record one of them produces:
//!
//! 1. [`ResolveStep::Catalog`]: TMDB detail by TMDB id.
//! 2. [`ResolveStep::Tracking`]: Trakt detail by Trakt id, upgraded to TMDB
//!    detail when Trakt reveals a TMDB id.
//! 3. [`ResolveStep::ExternalSearch`]: Trakt lookup by TVDB or IMDb id, then
//!    the same upgrade, else Trakt detail for the hit.
//!
//! Provider failures never escape: a failing step simply yields nothing and
//! the next one runs. Only running out of steps is an error.

use std::sync::Arc;
use std::time::Duration;

use marquee_common::{ExternalIds, MediaKind};
use tracing::{debug, info, warn};

use super::error::{ProviderResult, ResolveError};
use super::normalize::{normalize_catalog, normalize_tracking, search_hit_ids};
use super::provider::{CatalogClient, TrackingClient};
use super::providers::{TmdbClient, TraktClient};
use super::record::MediaRecord;
use crate::config::{Config, ServiceType};
use crate::services::{ConfigServiceRegistry, ServiceRecord, ServiceRegistry};

/// One attempt in the resolution cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStep {
    /// Direct TMDB fetch by TMDB id.
    Catalog,
    /// Trakt fetch by Trakt id, with TMDB upgrade.
    Tracking,
    /// Trakt lookup by TVDB / IMDb id, with TMDB upgrade.
    ExternalSearch,
}

impl ResolveStep {
    /// Steps in the order they are attempted.
    pub const CASCADE: [ResolveStep; 3] = [Self::Catalog, Self::Tracking, Self::ExternalSearch];
}

/// Per-call state shared by the steps of one resolution.
struct Cascade<'a> {
    ids: &'a ExternalIds,
    kind: MediaKind,
    tmdb: Option<ServiceRecord>,
    trakt: Option<ServiceRecord>,
    /// TMDB id whose direct fetch already failed in this call.
    failed_tmdb: Option<u64>,
}

/// Resolves sparse external ids into one [`MediaRecord`].
///
/// Stateless apart from its collaborators, so one instance can serve any
/// number of concurrent calls.
pub struct Resolver {
    registry: Arc<dyn ServiceRegistry>,
    catalog: Arc<dyn CatalogClient>,
    tracking: Arc<dyn TrackingClient>,
}

impl Resolver {
    /// Create a resolver from its collaborators.
    pub fn new(
        registry: Arc<dyn ServiceRegistry>,
        catalog: Arc<dyn CatalogClient>,
        tracking: Arc<dyn TrackingClient>,
    ) -> Self {
        Self {
            registry,
            catalog,
            tracking,
        }
    }

    /// Create a resolver using the configured services and the real TMDB and
    /// Trakt clients.
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.metadata.request_timeout_secs);
        Self::new(
            Arc::new(ConfigServiceRegistry::from_config(config)),
            Arc::new(TmdbClient::new(config.metadata.language.clone(), timeout)),
            Arc::new(TraktClient::new(timeout)),
        )
    }

    /// Resolve `ids` into a canonical record for `kind`.
    ///
    /// The returned record's `ids` carry every identifier discovered along
    /// the way, merged with the caller's. `ids` itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unresolved`] when no step produced a record.
    pub async fn resolve(
        &self,
        ids: &ExternalIds,
        kind: MediaKind,
    ) -> Result<MediaRecord, ResolveError> {
        let mut cascade = Cascade {
            ids,
            kind,
            tmdb: self.registry.find_configured(ServiceType::Tmdb),
            trakt: self.registry.find_configured(ServiceType::Trakt),
            failed_tmdb: None,
        };

        debug!(
            ids = ?ids,
            kind = %kind,
            tmdb_configured = cascade.tmdb.is_some(),
            trakt_configured = cascade.trakt.is_some(),
            "Resolving metadata"
        );

        for step in ResolveStep::CASCADE {
            if let Some(record) = self.attempt(step, &mut cascade).await {
                info!(
                    step = ?step,
                    source = ?record.source,
                    title = %record.title,
                    "Resolved metadata"
                );
                return Ok(record);
            }
        }

        warn!(ids = ?ids, kind = %kind, "Could not resolve metadata");
        Err(ResolveError::Unresolved)
    }

    async fn attempt(&self, step: ResolveStep, cascade: &mut Cascade<'_>) -> Option<MediaRecord> {
        match step {
            ResolveStep::Catalog => self.from_catalog(cascade).await,
            ResolveStep::Tracking => self.from_tracking(cascade).await,
            ResolveStep::ExternalSearch => self.from_external_search(cascade).await,
        }
    }

    async fn from_catalog(&self, cascade: &mut Cascade<'_>) -> Option<MediaRecord> {
        let (Some(service), Some(tmdb_id)) = (cascade.tmdb.as_ref(), cascade.ids.tmdb) else {
            debug!("Skipping catalog step: no TMDB service or id");
            return None;
        };

        match self.fetch_catalog(service, tmdb_id, cascade.kind).await {
            Ok(record) => Some(with_known_ids(record, cascade.ids)),
            Err(e) => {
                warn!(tmdb_id, error = %e, "Failed to fetch from TMDB");
                cascade.failed_tmdb = Some(tmdb_id);
                None
            }
        }
    }

    async fn from_tracking(&self, cascade: &mut Cascade<'_>) -> Option<MediaRecord> {
        let (Some(service), Some(trakt_id)) = (cascade.trakt.as_ref(), cascade.ids.trakt) else {
            debug!("Skipping tracking step: no Trakt service or id");
            return None;
        };

        let provisional = match self.fetch_tracking(service, trakt_id, cascade.kind).await {
            Ok(record) => record,
            Err(e) => {
                warn!(trakt_id, error = %e, "Failed to fetch from Trakt");
                return None;
            }
        };

        let known = provisional.ids.merged_with(cascade.ids);
        if let Some(upgraded) = self.upgrade(cascade, &known).await {
            return Some(upgraded);
        }

        Some(with_known_ids(provisional, cascade.ids))
    }

    async fn from_external_search(&self, cascade: &mut Cascade<'_>) -> Option<MediaRecord> {
        let Some(service) = cascade.trakt.clone() else {
            debug!("Skipping external search step: no Trakt service");
            return None;
        };
        let Some((id_type, id_value)) = cascade.ids.lookup_key() else {
            debug!("Skipping external search step: no TVDB or IMDb id");
            return None;
        };

        let hits = match self
            .tracking
            .search_by_external_id(&service, id_type, &id_value, Some(cascade.kind))
            .await
        {
            Ok(hits) => hits,
            Err(e) => {
                warn!(id_type = %id_type, id_value = %id_value, error = %e, "Failed to resolve via Trakt search");
                return None;
            }
        };

        // Provider order is authoritative; no ranking of candidates.
        let Some(hit_ids) = hits.first().and_then(|hit| search_hit_ids(hit, cascade.kind)) else {
            debug!(id_type = %id_type, id_value = %id_value, "Trakt search returned no match");
            return None;
        };

        let known = hit_ids.merged_with(cascade.ids);
        if let Some(upgraded) = self.upgrade(cascade, &known).await {
            return Some(upgraded);
        }

        let trakt_id = hit_ids.trakt?;
        match self.fetch_tracking(&service, trakt_id, cascade.kind).await {
            Ok(record) => Some(with_known_ids(record, &known)),
            Err(e) => {
                warn!(trakt_id, error = %e, "Failed to fetch Trakt detail for search match");
                None
            }
        }
    }

    /// Swap a tracking-sourced result for TMDB detail when a TMDB id is known.
    async fn upgrade(&self, cascade: &Cascade<'_>, known: &ExternalIds) -> Option<MediaRecord> {
        let service = cascade.tmdb.as_ref()?;
        let tmdb_id = known.tmdb?;
        if cascade.failed_tmdb == Some(tmdb_id) {
            debug!(tmdb_id, "Not retrying TMDB id that already failed");
            return None;
        }

        match self.fetch_catalog(service, tmdb_id, cascade.kind).await {
            Ok(record) => {
                debug!(tmdb_id, "Upgraded to TMDB metadata");
                Some(with_known_ids(record, known))
            }
            Err(e) => {
                debug!(tmdb_id, error = %e, "TMDB upgrade failed; keeping Trakt metadata");
                None
            }
        }
    }

    async fn fetch_catalog(
        &self,
        service: &ServiceRecord,
        tmdb_id: u64,
        kind: MediaKind,
    ) -> ProviderResult<MediaRecord> {
        let detail = self.catalog.get_detail(service, kind, tmdb_id).await?;
        Ok(normalize_catalog(&detail))
    }

    /// Trakt detail, plus the season list for shows fetched concurrently.
    ///
    /// Only the detail call is required; a failed season fetch leaves the
    /// record without seasons.
    async fn fetch_tracking(
        &self,
        service: &ServiceRecord,
        trakt_id: u64,
        kind: MediaKind,
    ) -> ProviderResult<MediaRecord> {
        match kind {
            MediaKind::Movie => {
                let item = self.tracking.get_movie(service, trakt_id).await?;
                Ok(normalize_tracking(&item, &[]))
            }
            MediaKind::Show => {
                let (item, seasons) = tokio::join!(
                    self.tracking.get_show(service, trakt_id),
                    self.tracking.get_show_seasons(service, trakt_id),
                );
                let item = item?;
                let seasons = seasons.unwrap_or_else(|e| {
                    warn!(trakt_id, error = %e, "Failed to fetch Trakt seasons");
                    Vec::new()
                });
                Ok(normalize_tracking(&item, &seasons))
            }
        }
    }
}

fn with_known_ids(mut record: MediaRecord, known: &ExternalIds) -> MediaRecord {
    record.ids = record.ids.merged_with(known);
    record
}
