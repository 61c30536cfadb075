use bytes::Bytes;
use smxcovers::ArtworkCache;
use tempfile::TempDir;

const ARTWORK_URL: &str = "https://images.example.com/909253/cover.jpg";

fn create_test_cache() -> (TempDir, ArtworkCache) {
    let temp_dir = tempfile::tempdir().unwrap();
    let cache = ArtworkCache::new(temp_dir.path().to_str().unwrap()).unwrap();
    (temp_dir, cache)
}

#[tokio::test]
async fn insert_then_fetch_roundtrips() {
    let (_temp_dir, cache) = create_test_cache();
    let artwork = Bytes::from_static(b"not really a jpeg");

    assert!(!cache.contains(ARTWORK_URL).await);
    cache.insert(ARTWORK_URL, artwork.clone()).await.unwrap();
    assert!(cache.contains(ARTWORK_URL).await);

    let fetched = cache.fetch(ARTWORK_URL).await.unwrap();
    assert_eq!(fetched, artwork);
}

#[tokio::test]
async fn insert_writes_the_flat_file() {
    let (temp_dir, cache) = create_test_cache();
    let artwork = Bytes::from_static(b"bytes on disk");

    cache.insert(ARTWORK_URL, artwork.clone()).await.unwrap();

    let path = cache.file_path(ARTWORK_URL);
    assert_eq!(path.parent().unwrap(), temp_dir.path());
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        ArtworkCache::pk_for_url(ARTWORK_URL)
    );
    assert_eq!(std::fs::read(&path).unwrap(), artwork.as_ref());
}

#[tokio::test]
async fn disk_tier_survives_a_restart() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    let artwork = Bytes::from_static(b"persisted artwork");

    {
        let cache = ArtworkCache::new(dir).unwrap();
        cache.insert(ARTWORK_URL, artwork.clone()).await.unwrap();
    }

    // A fresh instance has a cold memory tier; the URL points nowhere, so a
    // successful fetch can only come from the disk file.
    let cache = ArtworkCache::new(dir).unwrap();
    let fetched = cache.fetch(ARTWORK_URL).await.unwrap();
    assert_eq!(fetched, artwork);
}

#[tokio::test]
async fn miss_on_unreachable_url_is_an_error() {
    let (_temp_dir, cache) = create_test_cache();

    // Reserved TLD: resolution fails before any request leaves the machine.
    let result = cache.fetch("https://artwork.invalid/cover.jpg").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn clear_empties_both_tiers() {
    let (temp_dir, cache) = create_test_cache();

    cache
        .insert(ARTWORK_URL, Bytes::from_static(b"a"))
        .await
        .unwrap();
    cache
        .insert("https://images.example.com/other.png", Bytes::from_static(b"b"))
        .await
        .unwrap();

    cache.clear().await.unwrap();

    assert!(!cache.contains(ARTWORK_URL).await);
    let remaining = std::fs::read_dir(temp_dir.path()).unwrap().count();
    assert_eq!(remaining, 0);
}
