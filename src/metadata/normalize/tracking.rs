//! Trakt detail (+ season list) → [`MediaRecord`].

use marquee_common::{ExternalIds, MediaKind};

use super::clamp_rating;
use crate::metadata::artwork::pick_image;
use crate::metadata::providers::trakt_types::{TraktItem, TraktSearchResult, TraktSeason};
use crate::metadata::record::{ordered_seasons, MediaRecord, RecordSource, SeasonSummary};

const POSTER_SIZES: [&str; 2] = ["medium", "full"];
const BACKDROP_SIZES: [&str; 2] = ["full", "medium"];

/// Build a canonical record from a Trakt item and, for shows, its seasons.
pub fn normalize_tracking(raw: &TraktItem, seasons: &[TraktSeason]) -> MediaRecord {
    let images = raw.images.as_ref();

    let seasons = ordered_seasons(seasons.iter().map(|s| {
        let number = s.number.unwrap_or(0);
        let summary = SeasonSummary {
            season_number: 0,
            id: s.ids.trakt,
            name: s
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Season {number}")),
            episode_count: s.episode_count,
            air_date: s.first_aired.clone(),
            poster_path: pick_image(s.images.as_ref(), "poster", &POSTER_SIZES),
        };
        (number, summary)
    }));

    MediaRecord {
        title: raw.title.clone().unwrap_or_default(),
        year: raw.year,
        overview: raw.overview.clone().unwrap_or_default(),
        runtime: raw.runtime.unwrap_or(0),
        rating: clamp_rating(raw.rating),
        genres: raw.genres.clone().unwrap_or_default(),
        poster_path: pick_image(images, "poster", &POSTER_SIZES),
        backdrop_path: pick_image(images, "fanart", &BACKDROP_SIZES),
        certification: raw.certification.clone(),
        collection: None,
        ids: raw.ids.clone(),
        original_language: raw.language.clone(),
        seasons,
        images: raw.images.clone(),
        keywords: Vec::new(),
        status: raw.status.clone(),
        source: RecordSource::Tracking,
    }
}

/// Ids embedded in a search hit for `kind`, if the hit carries such an item.
pub fn search_hit_ids(hit: &TraktSearchResult, kind: MediaKind) -> Option<ExternalIds> {
    hit.item(kind).map(|item| item.ids.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POSTER: &str = "media.trakt.tv/images/shows/000/001/390/posters/medium/93df9cd612.jpg";
    const FANART: &str = "media.trakt.tv/images/shows/000/001/390/fanarts/full/76d5df8aed.jpg";

    fn item(value: serde_json::Value) -> TraktItem {
        serde_json::from_value(value).unwrap()
    }

    fn seasons(value: serde_json::Value) -> Vec<TraktSeason> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn movie_item() {
        let raw = item(json!({
            "title": "The Matrix",
            "year": 1999,
            "overview": "Neo learns the truth.",
            "runtime": 136,
            "rating": 8.1,
            "genres": ["action", "science-fiction"],
            "certification": "R",
            "language": "en",
            "status": "released",
            "ids": {"trakt": 481, "slug": "the-matrix-1999", "imdb": "tt0133093", "tmdb": 603},
            "images": {"poster": [POSTER], "fanart": [FANART]}
        }));

        let record = normalize_tracking(&raw, &[]);
        assert_eq!(record.title, "The Matrix");
        assert_eq!(record.year, Some(1999));
        assert_eq!(record.runtime, 136);
        assert_eq!(record.genres, vec!["action", "science-fiction"]);
        assert_eq!(record.certification.as_deref(), Some("R"));
        assert_eq!(record.original_language.as_deref(), Some("en"));
        assert_eq!(record.ids.trakt, Some(481));
        assert_eq!(record.ids.tmdb, Some(603));
        assert_eq!(record.poster_path.as_deref(), Some(POSTER));
        assert_eq!(record.backdrop_path.as_deref(), Some(FANART));
        assert!(record.images.is_some());
        assert!(record.collection.is_none());
        assert!(record.seasons.is_empty());
        assert_eq!(record.source, RecordSource::Tracking);
    }

    #[test]
    fn poster_shapes_are_equivalent() {
        let shapes = [
            json!(POSTER),
            json!([POSTER]),
            json!({"thumb": "thumb.jpg", "medium": POSTER, "full": "full.jpg"}),
        ];

        let posters: Vec<Option<String>> = shapes
            .into_iter()
            .map(|poster| {
                let raw = item(json!({"title": "x", "ids": {"trakt": 1}, "images": {"poster": poster}}));
                normalize_tracking(&raw, &[]).poster_path
            })
            .collect();

        assert_eq!(posters[0].as_deref(), Some(POSTER));
        assert_eq!(posters[1], posters[0]);
        assert_eq!(posters[2], posters[0]);
    }

    #[test]
    fn backdrop_prefers_full_size() {
        let raw = item(json!({
            "title": "x",
            "images": {"fanart": {"medium": "medium.jpg", "full": FANART}}
        }));
        assert_eq!(normalize_tracking(&raw, &[]).backdrop_path.as_deref(), Some(FANART));
    }

    #[test]
    fn show_seasons_are_mapped_and_ordered() {
        let raw = item(json!({
            "title": "Game of Thrones",
            "year": 2011,
            "ids": {"trakt": 1390, "tvdb": 121361, "imdb": "tt0944947", "tmdb": 1399}
        }));
        let season_list = seasons(json!([
            {"number": 0, "ids": {"trakt": 3962}, "title": "Specials", "episode_count": 14},
            {"number": 2, "ids": {"trakt": 3964}, "title": null, "episode_count": 10, "first_aired": "2012-04-02T01:00:00.000Z"},
            {"number": 1, "ids": {"trakt": 3963}, "title": "Season 1", "episode_count": 10,
             "first_aired": "2011-04-18T01:00:00.000Z", "images": {"poster": ["s1.jpg"]}}
        ]));

        let record = normalize_tracking(&raw, &season_list);
        assert_eq!(record.seasons.len(), 2);
        let first = &record.seasons[0];
        assert_eq!(first.season_number, 1);
        assert_eq!(first.id, Some(3963));
        assert_eq!(first.name, "Season 1");
        assert_eq!(first.episode_count, Some(10));
        assert_eq!(first.air_date.as_deref(), Some("2011-04-18T01:00:00.000Z"));
        assert_eq!(first.poster_path.as_deref(), Some("s1.jpg"));
        assert_eq!(record.seasons[1].season_number, 2);
        assert_eq!(record.seasons[1].name, "Season 2");
        assert_eq!(record.seasons[1].poster_path, None);
    }

    #[test]
    fn sparse_item_degrades_to_defaults() {
        let record = normalize_tracking(&item(json!({})), &[]);
        assert_eq!(record.title, "");
        assert_eq!(record.year, None);
        assert_eq!(record.runtime, 0);
        assert_eq!(record.rating, 0.0);
        assert!(record.genres.is_empty());
        assert!(record.poster_path.is_none());
        assert!(record.backdrop_path.is_none());
        assert!(record.images.is_none());
        assert!(record.ids.is_empty());
    }

    #[test]
    fn search_hit_ids_follow_kind() {
        let hit: TraktSearchResult = serde_json::from_value(json!({
            "type": "show",
            "score": null,
            "show": {"title": "Game of Thrones", "ids": {"trakt": 1390, "tmdb": 1399}}
        }))
        .unwrap();

        let ids = search_hit_ids(&hit, MediaKind::Show).unwrap();
        assert_eq!(ids.trakt, Some(1390));
        assert_eq!(ids.tmdb, Some(1399));
        assert!(search_hit_ids(&hit, MediaKind::Movie).is_none());
    }
}
