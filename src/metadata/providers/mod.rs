//! Concrete metadata provider clients.
//!
//! Each submodule wraps a single external API; the `*_types` modules hold the
//! raw response shapes those clients decode into.

pub mod tmdb;
pub mod tmdb_types;
pub mod trakt;
pub mod trakt_types;

pub use tmdb::TmdbClient;
pub use trakt::TraktClient;
