//! HTTP client for the artist lookup API
//!
//! The `/lookup` endpoint takes a comma separated list of artist ids and
//! returns the artists together with a handful of their tracks, grouped by
//! artist. The client is stateless and does not cache responses internally;
//! caching and shuffling are handled by higher layers.
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
//!     let ids = ["909253".to_string(), "1419227".to_string()];
//!     let items = client.fetch_music_items(&ids).await?;
//!     for item in &items {
//!         println!("{} - {}", item.display_title(), item.display_subtitle());
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{track_items, LookupResponse, LookupResult, MusicItem};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default lookup API base URL
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "SongMix/0.1.0 (smxlookup)";

/// Default number of results requested per artist id
pub const DEFAULT_LOOKUP_LIMIT: usize = 5;

/// Artist ids looked up when the configuration provides none
pub const DEFAULT_ARTIST_IDS: &[&str] =
    &["909253", "1171421960", "358714030", "1419227", "264111789"];

/// Lookup API HTTP client
///
/// Wraps a shared `reqwest::Client` with the base URL and timeout of the
/// lookup endpoint. Construct it with [`LookupClient::new`] for defaults or
/// through [`LookupClient::builder`] to customize.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl LookupClient {
    /// Create a new client with default settings
    pub async fn new() -> Result<Self> {
        Self::builder().build().await
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client with a custom `reqwest::Client`
    ///
    /// Useful for sharing HTTP connection pools between services.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the internal HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Look up artists by id, returning the raw mixed artist/track results.
    ///
    /// Requests [`DEFAULT_LOOKUP_LIMIT`] tracks per artist. An empty id list
    /// short-circuits to an empty result without touching the network.
    pub async fn lookup_artists(&self, ids: &[String]) -> Result<Vec<LookupResult>> {
        self.lookup_artists_with_limit(ids, DEFAULT_LOOKUP_LIMIT)
            .await
    }

    /// Look up artists by id with an explicit per-artist result limit.
    pub async fn lookup_artists_with_limit(
        &self,
        ids: &[String],
        limit: usize,
    ) -> Result<Vec<LookupResult>> {
        if ids.is_empty() {
            tracing::debug!("no artist ids to look up");
            return Ok(Vec::new());
        }

        let url = self.lookup_url(ids, limit)?;
        tracing::debug!(%url, "fetching artist lookup");

        let response = self.client.get(url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            return Err(Error::ApiError(format!(
                "API returned status: {}",
                response.status()
            )));
        }

        let lookup: LookupResponse = response.json().await?;
        tracing::debug!(
            result_count = lookup.result_count,
            "received lookup results"
        );

        Ok(lookup.results)
    }

    /// Look up artists and map the results to playable [`MusicItem`]s.
    ///
    /// Artist echo records and tracks without a name are filtered out; the
    /// remaining tracks keep the API order (clustered by artist).
    pub async fn fetch_music_items(&self, ids: &[String]) -> Result<Vec<MusicItem>> {
        let results = self.lookup_artists(ids).await?;
        let items = track_items(results);
        tracing::debug!(tracks = items.len(), "mapped lookup results to tracks");
        Ok(items)
    }

    fn lookup_url(&self, ids: &[String], limit: usize) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/lookup", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("id", &ids.join(","))
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }
}

/// Builder for configuring a LookupClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub async fn build(self) -> Result<LookupClient> {
        let client = if let Some(client) = self.client {
            client
        } else {
            Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?
        };

        Ok(LookupClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Unit Tests (no network)
    // ========================================================================

    #[tokio::test]
    async fn builder_applies_defaults() {
        let client = LookupClient::new().await.unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[tokio::test]
    async fn lookup_url_joins_ids_and_limit() {
        let client = LookupClient::builder()
            .base_url("https://lookup.example.com")
            .build()
            .await
            .unwrap();

        let ids = vec!["909253".to_string(), "1419227".to_string()];
        let url = client.lookup_url(&ids, 5).unwrap();

        assert_eq!(
            url.as_str(),
            "https://lookup.example.com/lookup?id=909253%2C1419227&limit=5"
        );
    }

    #[tokio::test]
    async fn empty_id_list_skips_the_request() {
        let client = LookupClient::builder()
            // Unroutable base URL: the call must not try to reach it.
            .base_url("https://lookup.invalid")
            .build()
            .await
            .unwrap();

        let results = client.lookup_artists(&[]).await.unwrap();
        assert!(results.is_empty());
    }
}
