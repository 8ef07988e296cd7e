//! Metadata resolution against TMDB and Trakt.
//!
//! # Module layout
//!
//! - [`provider`] -- Client traits the resolver depends on.
//! - [`providers`] -- HTTP clients for TMDB and Trakt plus their raw payload types.
//! - [`normalize`] -- Pure payload to [`MediaRecord`] conversion.
//! - [`artwork`] -- Image field shapes and size selection.
//! - [`resolver`] -- The resolution cascade.

pub mod artwork;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod providers;
pub mod record;
pub mod resolver;

pub use artwork::{ImageBag, ImageField};
pub use error::{ProviderError, ProviderResult, ResolveError};
pub use provider::{CatalogClient, TrackingClient};
pub use providers::{TmdbClient, TraktClient};
pub use record::{CollectionRef, MediaRecord, RecordSource, SeasonSummary};
pub use resolver::{ResolveStep, Resolver};
