//! # smxlookup - Artist lookup client for SongMix
//!
//! This crate provides a Rust client for the public artist lookup API that
//! feeds SongMix: given a list of artist ids, the `/lookup` endpoint returns
//! the artists together with a handful of their tracks, clustered by artist.
//!
//! # Features
//!
//! - **Lookup Client**: async `reqwest` client with builder-configurable
//!   base URL, timeout and User-Agent
//! - **Entities**: serde models of the raw response (mixed artist/track
//!   records discriminated by `wrapperType`)
//! - **Domain Mapping**: filtering of the raw records down to playable
//!   [`MusicItem`]s ready for the shuffler
//! - **Configuration Extension**: typed access to the `lookup:` section of
//!   the SongMix configuration (feature `smxconfig`)
//!
//! # Example
//!
//! ```no_run
//! use smxlookup::LookupClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LookupClient::new().await?;
//!
//!     let ids = ["909253".to_string()];
//!     let items = client.fetch_music_items(&ids).await?;
//!     println!("Found {} tracks", items.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;

#[cfg(feature = "smxconfig")]
pub mod config_ext;

// Re-exports
pub use client::{
    ClientBuilder, LookupClient, DEFAULT_ARTIST_IDS, DEFAULT_BASE_URL, DEFAULT_LOOKUP_LIMIT,
};
pub use error::{Error, Result};
pub use models::{track_items, LookupResponse, LookupResult, MusicItem, TrackExplicitness, WrapperType};

#[cfg(feature = "smxconfig")]
pub use config_ext::LookupConfigExt;
