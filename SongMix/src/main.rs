use futures::future::join_all;
use smxconfig::get_config;
use smxcovers::{register_artwork_cache, ArtworkCacheConfigExt};
use smxlookup::{LookupClient, LookupConfigExt, MusicItem};
use smxshuffle::{adjacent_violations, constrained_shuffle};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Default backtracking budget multiplier when the config holds none
const DEFAULT_BUDGET_FACTOR: usize = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ========== PHASE 1 : Configuration ==========

    let config = get_config();

    let mut prefetch_artwork = true;
    let mut artist_ids: Vec<String> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-artwork" => prefetch_artwork = false,
            id => artist_ids.push(id.to_string()),
        }
    }
    if artist_ids.is_empty() {
        artist_ids = config.get_lookup_artist_ids()?;
    }
    info!("🎵 Looking up {} artist(s)...", artist_ids.len());

    // ========== PHASE 2 : Fetch & shuffle ==========

    let client = LookupClient::builder()
        .base_url(config.get_lookup_base_url()?)
        .build()
        .await?;

    let results = client
        .lookup_artists_with_limit(&artist_ids, config.get_lookup_limit()?)
        .await?;
    let items = smxlookup::track_items(results);
    info!("✅ {} playable track(s) fetched", items.len());

    let budget = items.len() * budget_factor(&config);
    let playlist = constrained_shuffle(items, budget, &mut rand::rng());

    let violations = adjacent_violations(&playlist);
    if violations > 0 {
        warn!(violations, "playlist still has adjacent same-artist tracks");
    } else {
        debug!("playlist is free of adjacent same-artist tracks");
    }

    // ========== PHASE 3 : Display & artwork prefetch ==========

    println!();
    for (position, item) in playlist.iter().enumerate() {
        println!(
            "{:>3}. {} - {}",
            position + 1,
            item.display_title(),
            item.display_subtitle()
        );
    }
    println!();

    if prefetch_artwork {
        prefetch(&playlist, &config).await?;
    }

    info!("✅ SongMix is done");
    Ok(())
}

/// Reads `shuffle.budget_factor`, falling back to the built-in default
fn budget_factor(config: &smxconfig::Config) -> usize {
    match config.get_value(&["shuffle", "budget_factor"]) {
        Ok(serde_yaml::Value::Number(n)) => match n.as_u64() {
            Some(factor) if factor > 0 => factor as usize,
            _ => DEFAULT_BUDGET_FACTOR,
        },
        _ => DEFAULT_BUDGET_FACTOR,
    }
}

/// Warms the artwork cache for every distinct artwork URL in the playlist
async fn prefetch(
    playlist: &[MusicItem],
    config: &smxconfig::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = config.create_artwork_cache()?;
    register_artwork_cache(cache.clone());

    let mut urls: Vec<&str> = playlist
        .iter()
        .filter_map(|item| item.artwork_url.as_deref())
        .collect();
    urls.sort_unstable();
    urls.dedup();

    info!("📡 Prefetching {} artwork image(s)...", urls.len());
    let fetches = urls.iter().map(|url| {
        let cache = cache.clone();
        async move {
            match cache.fetch(url).await {
                Ok(bytes) => debug!(%url, size = bytes.len(), "artwork cached"),
                Err(e) => warn!(%url, "⚠️ Failed to fetch artwork: {}", e),
            }
        }
    });
    join_all(fetches).await;

    Ok(())
}
