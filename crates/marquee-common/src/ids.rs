//! The sparse set of external identifiers a media item can be known by.
//!
//! Callers rarely know every id up front. Resolution starts from whatever is
//! present and builds enriched copies as more ids are discovered, so the
//! value a caller passes in is never modified.

use serde::{Deserialize, Serialize};

use crate::types::ExternalIdType;

/// Up to four external identifiers for one movie or show.
///
/// Field names match the keys Trakt uses in its `ids` objects, so the type
/// deserializes directly from those payloads (extra keys such as `slug` are
/// ignored).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExternalIds {
    /// TMDB id (metadata catalog).
    #[serde(default)]
    pub tmdb: Option<u64>,
    /// Trakt id (tracking service).
    #[serde(default)]
    pub trakt: Option<u64>,
    /// TVDB id (alternate catalog).
    #[serde(default)]
    pub tvdb: Option<u64>,
    /// IMDb id, e.g. `tt0133093`.
    #[serde(default)]
    pub imdb: Option<String>,
}

impl ExternalIds {
    /// Set the TMDB id.
    #[must_use]
    pub fn with_tmdb(mut self, id: u64) -> Self {
        self.tmdb = Some(id);
        self
    }

    /// Set the Trakt id.
    #[must_use]
    pub fn with_trakt(mut self, id: u64) -> Self {
        self.trakt = Some(id);
        self
    }

    /// Set the TVDB id.
    #[must_use]
    pub fn with_tvdb(mut self, id: u64) -> Self {
        self.tvdb = Some(id);
        self
    }

    /// Set the IMDb id.
    #[must_use]
    pub fn with_imdb(mut self, id: impl Into<String>) -> Self {
        self.imdb = Some(id.into());
        self
    }

    /// Returns `true` when no identifier is present.
    pub fn is_empty(&self) -> bool {
        self.tmdb.is_none() && self.trakt.is_none() && self.tvdb.is_none() && self.imdb.is_none()
    }

    /// Combine two id sets. Ids already present on `self` win; gaps are
    /// filled from `other`.
    #[must_use]
    pub fn merged_with(&self, other: &ExternalIds) -> ExternalIds {
        ExternalIds {
            tmdb: self.tmdb.or(other.tmdb),
            trakt: self.trakt.or(other.trakt),
            tvdb: self.tvdb.or(other.tvdb),
            imdb: self.imdb.clone().or_else(|| other.imdb.clone()),
        }
    }

    /// The id to use for a cross-provider lookup, if any.
    ///
    /// TVDB is preferred over IMDb when both are known.
    pub fn lookup_key(&self) -> Option<(ExternalIdType, String)> {
        if let Some(tvdb) = self.tvdb {
            return Some((ExternalIdType::Tvdb, tvdb.to_string()));
        }
        self.imdb
            .as_ref()
            .filter(|imdb| !imdb.is_empty())
            .map(|imdb| (ExternalIdType::Imdb, imdb.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        assert!(ExternalIds::default().is_empty());
        assert!(!ExternalIds::default().with_imdb("tt0133093").is_empty());
    }

    #[test]
    fn merge_keeps_existing_and_fills_gaps() {
        let caller = ExternalIds::default().with_trakt(12).with_tvdb(121361);
        let discovered = ExternalIds::default()
            .with_trakt(99)
            .with_tmdb(1399)
            .with_imdb("tt0944947");

        let merged = caller.merged_with(&discovered);
        assert_eq!(merged.trakt, Some(12));
        assert_eq!(merged.tmdb, Some(1399));
        assert_eq!(merged.tvdb, Some(121361));
        assert_eq!(merged.imdb.as_deref(), Some("tt0944947"));

        // Inputs are untouched.
        assert_eq!(caller.tmdb, None);
    }

    #[test]
    fn lookup_key_prefers_tvdb() {
        let ids = ExternalIds::default().with_tvdb(121361).with_imdb("tt0944947");
        assert_eq!(
            ids.lookup_key(),
            Some((ExternalIdType::Tvdb, "121361".to_string()))
        );

        let ids = ExternalIds::default().with_imdb("tt0944947");
        assert_eq!(
            ids.lookup_key(),
            Some((ExternalIdType::Imdb, "tt0944947".to_string()))
        );

        assert_eq!(ExternalIds::default().with_tmdb(1).lookup_key(), None);
        assert_eq!(ExternalIds::default().with_imdb("").lookup_key(), None);
    }

    #[test]
    fn deserializes_trakt_ids_object() {
        let ids: ExternalIds = serde_json::from_str(
            r#"{"trakt": 1390, "slug": "game-of-thrones", "tvdb": 121361, "imdb": "tt0944947", "tmdb": 1399, "tvrage": null}"#,
        )
        .unwrap();
        assert_eq!(ids.trakt, Some(1390));
        assert_eq!(ids.tmdb, Some(1399));
        assert_eq!(ids.tvdb, Some(121361));
        assert_eq!(ids.imdb.as_deref(), Some("tt0944947"));

        let partial: ExternalIds = serde_json::from_str(r#"{"trakt": 456, "tmdb": null}"#).unwrap();
        assert_eq!(partial.trakt, Some(456));
        assert_eq!(partial.tmdb, None);
    }
}
