//! Two-tier artwork byte cache
//!
//! Artwork bytes are cached in an unbounded in-memory map backed by flat
//! files on disk, one file per entry, named by the lowercase hex SHA-256 of
//! the source URL. There is deliberately no eviction, no TTL and no size
//! limit on either tier; entries live until [`ArtworkCache::clear`].

use crate::error::{Error, Result};
use bytes::Bytes;
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Artwork byte cache (memory + flat files, SHA-256 keys)
///
/// Designed to be shared behind an `Arc`; the memory tier is guarded by an
/// async `RwLock` and the disk tier relies on one-file-per-key writes.
pub struct ArtworkCache {
    /// Flat-file storage directory
    dir: PathBuf,
    /// Unbounded memory tier (pk -> bytes)
    memory: RwLock<HashMap<String, Bytes>>,
    /// HTTP client for downloads
    client: Client,
}

impl ArtworkCache {
    /// Creates a cache over `dir`, creating the directory if needed
    pub fn new(dir: &str) -> Result<Self> {
        Self::with_client(dir, Client::new())
    }

    /// Creates a cache with a custom `reqwest::Client`
    ///
    /// Useful for sharing HTTP connection pools between services.
    pub fn with_client(dir: &str, client: Client) -> Result<Self> {
        let directory = PathBuf::from(dir);
        std::fs::create_dir_all(&directory)?;
        Ok(Self {
            dir: directory,
            memory: RwLock::new(HashMap::new()),
            client,
        })
    }

    /// Cache key of a URL: lowercase hex SHA-256 of the URL string
    pub fn pk_for_url(url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Storage directory of the disk tier
    pub fn cache_dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the disk file backing `url`
    pub fn file_path(&self, url: &str) -> PathBuf {
        self.path_for_pk(&Self::pk_for_url(url))
    }

    fn path_for_pk(&self, pk: &str) -> PathBuf {
        self.dir.join(pk)
    }

    /// True when `url` is present in either tier
    pub async fn contains(&self, url: &str) -> bool {
        let pk = Self::pk_for_url(url);
        if self.memory.read().await.contains_key(&pk) {
            return true;
        }
        self.path_for_pk(&pk).is_file()
    }

    /// Adds artwork bytes without touching the network.
    ///
    /// Writes through to both tiers; used by prefetchers that already hold
    /// the bytes and by tests.
    pub async fn insert(&self, url: &str, bytes: Bytes) -> Result<()> {
        let pk = Self::pk_for_url(url);
        tokio::fs::write(self.path_for_pk(&pk), &bytes).await?;
        self.memory.write().await.insert(pk, bytes);
        Ok(())
    }

    /// Returns the artwork bytes for `url`.
    ///
    /// Lookup order: memory tier, then disk (promoting the entry to memory),
    /// then an HTTP download (promoting to both tiers). Only the download
    /// can fail; a disk write failure after a successful download is logged
    /// and otherwise ignored, since the bytes are already in memory.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        let pk = Self::pk_for_url(url);

        if let Some(bytes) = self.memory.read().await.get(&pk).cloned() {
            debug!(%url, "artwork served from memory");
            return Ok(bytes);
        }

        let path = self.path_for_pk(&pk);
        if let Ok(data) = tokio::fs::read(&path).await {
            debug!(%url, "artwork served from disk");
            let bytes = Bytes::from(data);
            self.memory.write().await.insert(pk, bytes.clone());
            return Ok(bytes);
        }

        let bytes = self.download(url).await?;
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            warn!(%url, error = %e, "failed to persist artwork to disk");
        }
        self.memory.write().await.insert(pk, bytes.clone());
        Ok(bytes)
    }

    async fn download(&self, url: &str) -> Result<Bytes> {
        debug!(%url, "downloading artwork");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::DownloadFailed {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(Error::EmptyBody(url.to_string()));
        }
        Ok(bytes)
    }

    /// Empties both tiers
    pub async fn clear(&self) -> Result<()> {
        self.memory.write().await.clear();

        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                tokio::fs::remove_file(entry.path()).await?;
            }
        }
        Ok(())
    }
}
