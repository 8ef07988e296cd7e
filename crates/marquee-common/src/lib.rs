//! Marquee-Common: Shared types and errors.
//!
//! This crate provides common functionality used across marquee:
//!
//! - **Media kinds**: The movie / show split that drives provider endpoints
//! - **External identifiers**: The sparse TMDB / Trakt / TVDB / IMDb id set
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use marquee_common::{ExternalIds, MediaKind};
//!
//! let kind: MediaKind = "show".parse().unwrap();
//! let ids = ExternalIds::default().with_tvdb(121361);
//!
//! assert_eq!(kind, MediaKind::Show);
//! assert!(!ids.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, Result};
pub use ids::*;
pub use types::*;
