//! Data models for lookup API responses
//!
//! This module contains the structures needed to deserialize responses from
//! the iTunes-style `/lookup` endpoint, plus the domain item handed to the
//! shuffler once the raw results have been filtered down to actual tracks.

use serde::{Deserialize, Serialize};
use smxshuffle::ArtistKeyed;

// ============================================================================
// Raw API Entities
// ============================================================================

/// Response envelope of the `/lookup` endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    /// Number of entries in `results`
    pub result_count: usize,
    /// Mixed artist/track entries, grouped by artist
    pub results: Vec<LookupResult>,
}

/// One entry of a lookup response
///
/// The endpoint interleaves artist records and track records in the same
/// array; `wrapper_type` tells them apart. Track-only fields are absent on
/// artist records and vice versa.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    /// Unique identifier of the record itself
    pub id: u64,
    /// Record kind discriminator
    pub wrapper_type: WrapperType,
    /// Artist kind (e.g. "Artist"), artist records only
    pub artist_type: Option<String>,
    /// Main genre of the artist or track
    pub primary_genre_name: String,
    /// Artist display name
    pub artist_name: String,
    /// ISO country code, artist records only
    pub country: Option<String>,
    /// Artwork image URL, track records only
    pub artwork_url: Option<String>,
    /// Release date (RFC3339), track records only
    pub release_date: Option<String>,
    /// Owning artist id, track records only
    pub artist_id: Option<u64>,
    /// Track duration in milliseconds
    pub track_time_millis: Option<u64>,
    /// Album/collection name
    pub collection_name: Option<String>,
    /// Explicitness flag of a track
    pub track_explicitness: Option<TrackExplicitness>,
    /// Censored display name of a track
    pub track_censored_name: Option<String>,
    /// Album/collection id
    pub collection_id: Option<u64>,
    /// Track display name
    pub track_name: Option<String>,
}

/// Discriminator between artist and track records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapperType {
    /// Artist record (lookup echo of the requested id)
    Artist,
    /// Track record
    Track,
}

/// Explicitness flag carried by track records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackExplicitness {
    Explicit,
    NotExplicit,
}

impl LookupResult {
    /// True for track records carrying a usable (non-empty) track name
    pub fn is_playable_track(&self) -> bool {
        self.wrapper_type == WrapperType::Track
            && self.track_name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Converts a playable track record into the domain item.
    ///
    /// Artist records and nameless tracks map to `None` and are dropped by
    /// [`track_items`].
    pub fn into_music_item(self) -> Option<MusicItem> {
        if !self.is_playable_track() {
            return None;
        }
        let track_name = self.track_name?;
        Some(MusicItem {
            artwork_url: self.artwork_url,
            track_name,
            artist_name: self.artist_name,
            primary_genre_name: self.primary_genre_name,
        })
    }
}

/// Filters raw lookup results down to the playable tracks, in API order.
pub fn track_items(results: Vec<LookupResult>) -> Vec<MusicItem> {
    results
        .into_iter()
        .filter_map(LookupResult::into_music_item)
        .collect()
}

// ============================================================================
// Domain Item
// ============================================================================

/// One playable track as consumed by the shuffler and the display layer.
///
/// `artist_name` doubles as the adjacency grouping key; the remaining fields
/// are passenger data the shuffler never inspects. Full-field equality is
/// derived for test assertions only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MusicItem {
    /// Artwork image URL, if the API provided one
    pub artwork_url: Option<String>,
    /// Track display name
    pub track_name: String,
    /// Artist display name (the grouping key)
    pub artist_name: String,
    /// Main genre of the track
    pub primary_genre_name: String,
}

impl MusicItem {
    /// Row title: the track name
    pub fn display_title(&self) -> &str {
        &self.track_name
    }

    /// Row subtitle: artist name plus parenthesized genre
    pub fn display_subtitle(&self) -> String {
        format!("{} ({})", self.artist_name, self.primary_genre_name)
    }
}

impl ArtistKeyed for MusicItem {
    fn artist_key(&self) -> &str {
        &self.artist_name
    }
}
