//! Extension for wiring the lookup client into smxconfig
//!
//! Provides the [`LookupConfigExt`] trait, which adds typed getters and
//! setters for the lookup section of the SongMix configuration:
//!
//! ```yaml
//! lookup:
//!   base_url: https://itunes.apple.com
//!   limit: 5
//!   artist_ids:
//!     - "909253"
//! ```
//!
//! Absent or malformed keys fall back to the crate defaults.

use crate::client::{DEFAULT_ARTIST_IDS, DEFAULT_BASE_URL, DEFAULT_LOOKUP_LIMIT};
use anyhow::Result;
use serde_yaml::Value;
use smxconfig::Config;

/// Extension trait exposing the lookup configuration section
pub trait LookupConfigExt {
    /// Base URL of the lookup API (default: [`DEFAULT_BASE_URL`])
    fn get_lookup_base_url(&self) -> Result<String>;

    /// Override the lookup API base URL
    fn set_lookup_base_url(&self, url: &str) -> Result<()>;

    /// Per-artist result limit (default: [`DEFAULT_LOOKUP_LIMIT`])
    fn get_lookup_limit(&self) -> Result<usize>;

    /// Override the per-artist result limit
    fn set_lookup_limit(&self, limit: usize) -> Result<()>;

    /// Artist ids to look up (default: [`DEFAULT_ARTIST_IDS`])
    fn get_lookup_artist_ids(&self) -> Result<Vec<String>>;

    /// Override the artist id list
    fn set_lookup_artist_ids(&self, ids: &[String]) -> Result<()>;
}

impl LookupConfigExt for Config {
    fn get_lookup_base_url(&self) -> Result<String> {
        match self.get_value(&["lookup", "base_url"]) {
            Ok(Value::String(url)) if !url.is_empty() => Ok(url),
            _ => Ok(DEFAULT_BASE_URL.to_string()),
        }
    }

    fn set_lookup_base_url(&self, url: &str) -> Result<()> {
        self.set_value(&["lookup", "base_url"], Value::String(url.to_string()))
    }

    fn get_lookup_limit(&self) -> Result<usize> {
        match self.get_value(&["lookup", "limit"]) {
            Ok(Value::Number(n)) => match n.as_u64() {
                Some(limit) if limit > 0 => Ok(limit as usize),
                _ => Ok(DEFAULT_LOOKUP_LIMIT),
            },
            _ => Ok(DEFAULT_LOOKUP_LIMIT),
        }
    }

    fn set_lookup_limit(&self, limit: usize) -> Result<()> {
        self.set_value(
            &["lookup", "limit"],
            Value::Number(serde_yaml::Number::from(limit)),
        )
    }

    fn get_lookup_artist_ids(&self) -> Result<Vec<String>> {
        match self.get_value(&["lookup", "artist_ids"]) {
            Ok(Value::Sequence(entries)) if !entries.is_empty() => Ok(entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Value::String(id) => Some(id),
                    // Tolerate unquoted numeric ids in hand-edited files.
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()),
            _ => Ok(DEFAULT_ARTIST_IDS.iter().map(|id| id.to_string()).collect()),
        }
    }

    fn set_lookup_artist_ids(&self, ids: &[String]) -> Result<()> {
        let entries = ids
            .iter()
            .map(|id| Value::String(id.clone()))
            .collect::<Vec<_>>();
        self.set_value(&["lookup", "artist_ids"], Value::Sequence(entries))
    }
}
