//! # smxshuffle - Constrained playlist shuffling for SongMix
//!
//! This crate implements the shuffling core of SongMix: producing a random
//! permutation of a track list in which two consecutive tracks by the same
//! artist are avoided whenever possible.
//!
//! # Algorithms
//!
//! Two strategies are provided. They implement the same contract (the output
//! is always a permutation of the input) but differ in cost and guarantee,
//! and they are never combined:
//!
//! - [`constrained_shuffle`] - the **primary** strategy. A backtracking
//!   search seeded by a [`fisher_yates`] pre-shuffle. When a violation-free
//!   arrangement is reachable within the caller's attempt budget, the result
//!   has no two adjacent tracks sharing an artist key. When the budget runs
//!   out, the plain pre-shuffle is returned as-is.
//! - [`minimize_neighbors`] - a cheaper heuristic with no recursion and no
//!   budget. It only reduces the likelihood of adjacent repeats; it does not
//!   guarantee their absence.
//!
//! Adjacency is decided solely by [`ArtistKeyed::artist_key`]; every other
//! field of an item is passenger data that the shufflers carry untouched.
//!
//! Neither strategy can fail: a call always returns a permutation, and an
//! output that still contains adjacent repeats is a normal outcome, not an
//! error. Callers that want to know can count with [`adjacent_violations`].
//!
//! # Randomness
//!
//! Every entry point takes a `rand::Rng` handle instead of reaching for a
//! global generator, so tests can pass a seeded `StdRng` and replay runs.
//!
//! # Example
//!
//! ```
//! use smxshuffle::{adjacent_violations, constrained_shuffle, ArtistKeyed};
//!
//! struct Track {
//!     artist: String,
//!     title: String,
//! }
//!
//! impl ArtistKeyed for Track {
//!     fn artist_key(&self) -> &str {
//!         &self.artist
//!     }
//! }
//!
//! let tracks = vec![
//!     Track { artist: "A".into(), title: "one".into() },
//!     Track { artist: "A".into(), title: "two".into() },
//!     Track { artist: "B".into(), title: "three".into() },
//!     Track { artist: "B".into(), title: "four".into() },
//! ];
//!
//! let budget = tracks.len();
//! let mixed = constrained_shuffle(tracks, budget, &mut rand::rng());
//!
//! assert_eq!(mixed.len(), 4);
//! assert_eq!(adjacent_violations(&mixed), 0);
//! ```

mod constrained;
mod item;
mod random;

pub use constrained::{adjacent_violations, constrained_shuffle, minimize_neighbors};
pub use item::ArtistKeyed;
pub use random::fisher_yates;
