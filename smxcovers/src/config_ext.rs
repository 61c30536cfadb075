//! Extension for wiring the artwork cache into smxconfig
//!
//! Provides the [`ArtworkCacheConfigExt`] trait, which adds typed accessors
//! for the `covers:` section of the SongMix configuration and a factory for
//! a configured cache instance.

use crate::cache::ArtworkCache;
use anyhow::Result;
use serde_yaml::Value;
use smxconfig::Config;
use std::sync::Arc;

const DEFAULT_ARTWORK_DIR: &str = "covers";

/// Extension trait exposing the artwork cache configuration
pub trait ArtworkCacheConfigExt {
    /// Artwork cache directory, resolved and created on access
    ///
    /// Relative values resolve against the configuration directory
    /// (default: `covers`).
    fn get_artwork_dir(&self) -> Result<String>;

    /// Override the artwork cache directory
    fn set_artwork_dir(&self, directory: &str) -> Result<()>;

    /// Creates an artwork cache over the configured directory
    fn create_artwork_cache(&self) -> Result<Arc<ArtworkCache>>;
}

impl ArtworkCacheConfigExt for Config {
    fn get_artwork_dir(&self) -> Result<String> {
        let configured = match self.get_value(&["covers", "dir"]) {
            Ok(Value::String(dir)) if !dir.is_empty() => dir,
            _ => DEFAULT_ARTWORK_DIR.to_string(),
        };
        self.resolve_and_create_dir(&configured)
    }

    fn set_artwork_dir(&self, directory: &str) -> Result<()> {
        self.set_value(&["covers", "dir"], Value::String(directory.to_string()))
    }

    fn create_artwork_cache(&self) -> Result<Arc<ArtworkCache>> {
        let dir = self.get_artwork_dir()?;
        Ok(Arc::new(ArtworkCache::new(&dir)?))
    }
}
