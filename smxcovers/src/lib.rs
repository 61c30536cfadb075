//! # smxcovers - Artwork cache for SongMix
//!
//! This crate caches track artwork bytes so the display layer can show
//! covers without re-downloading them on every run.
//!
//! ## Architecture
//!
//! Two tiers, looked up in order:
//!
//! 1. An unbounded in-memory map
//! 2. Flat files on disk, one per entry, named by the lowercase hex SHA-256
//!    of the artwork URL
//!
//! A miss on both tiers triggers an HTTP download that writes through to
//! both. Neither tier evicts: no TTL, no size limit. Artwork sets are small
//! and the cache directory can always be cleared.
//!
//! ## Usage
//!
//! ```no_run
//! use smxcovers::ArtworkCache;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = ArtworkCache::new("./covers")?;
//!     let bytes = cache.fetch("https://images.example.com/cover.jpg").await?;
//!     println!("artwork: {} bytes", bytes.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;

#[cfg(feature = "smxconfig")]
pub mod config_ext;

pub use cache::ArtworkCache;
pub use error::{Error, Result};

#[cfg(feature = "smxconfig")]
pub use config_ext::ArtworkCacheConfigExt;

// ============================================================================
// Global singleton registry
// ============================================================================

use once_cell::sync::OnceCell;
use std::sync::Arc;

static ARTWORK_CACHE: OnceCell<Arc<ArtworkCache>> = OnceCell::new();

/// Registers the global artwork cache
///
/// Call once at application startup to make the cache reachable from any
/// display code path. If called more than once, only the first call takes
/// effect. Thread-safe.
pub fn register_artwork_cache(cache: Arc<ArtworkCache>) {
    let _ = ARTWORK_CACHE.set(cache);
}

/// Returns the registered artwork cache, or `None` before registration
pub fn get_artwork_cache() -> Option<Arc<ArtworkCache>> {
    ARTWORK_CACHE.get().cloned()
}
