//! The grouping-key seam between the shufflers and the items they reorder

/// Exposes the artist grouping key of a shuffled item.
///
/// The key is the only thing the shufflers ever look at: two items are "the
/// same artist" exactly when their keys compare equal. Everything else an
/// item carries (title, artwork reference, genre) is opaque passenger data.
pub trait ArtistKeyed {
    /// Key used for adjacency comparisons between neighboring items.
    fn artist_key(&self) -> &str;
}

impl<T: ArtistKeyed + ?Sized> ArtistKeyed for &T {
    fn artist_key(&self) -> &str {
        (**self).artist_key()
    }
}
