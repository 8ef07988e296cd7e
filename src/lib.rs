//! Marquee - metadata resolution across TMDB and Trakt
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod server;
pub mod services;
