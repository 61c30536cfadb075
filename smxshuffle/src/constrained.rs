//! Constrained shuffling: random permutations that keep same-artist tracks apart

use crate::item::ArtistKeyed;
use crate::random::fisher_yates;
use rand::Rng;
use std::collections::VecDeque;
use tracing::debug;

/// Counts adjacent pairs sharing an artist key.
///
/// This scan is the only way to observe how well a shuffle satisfied the
/// adjacency constraint: the shufflers themselves never report it.
pub fn adjacent_violations<T: ArtistKeyed>(items: &[T]) -> usize {
    items
        .windows(2)
        .filter(|pair| pair[0].artist_key() == pair[1].artist_key())
        .count()
}

/// Outcome of one node expansion in the backtracking search.
enum Search {
    /// The pool was emptied: `prefix` holds a full violation-free ordering.
    Found,
    /// Every candidate at this node fails; the caller should try a sibling.
    DeadEnd,
    /// The attempt budget ran out; the whole search unwinds immediately.
    OutOfBudget,
}

/// Shuffles `items` while avoiding adjacent tracks by the same artist.
///
/// This is the primary strategy (backtracking search):
///
/// 1. Lists of length <= 2 are returned unchanged; there is nothing to
///    optimize and a forced swap of two elements is not a shuffle.
/// 2. The input is pre-shuffled with [`fisher_yates`]. Upstream data arrives
///    clustered by artist, and a search started from a clustered order burns
///    its budget undoing the clustering.
/// 3. If the pre-shuffle already has no adjacent repeats it is returned
///    directly.
/// 4. Otherwise a depth-first search rebuilds the sequence: candidates are
///    tried in their current (randomized) pool order, a candidate is skipped
///    when it shares the key of the last placed item, and the first complete
///    ordering wins. Placing a candidate consumes one unit of
///    `attempt_budget`; when the budget hits zero the search is abandoned
///    and the pre-shuffled candidate is returned as-is.
///
/// The output is always a permutation of the input. Adjacent repeats in the
/// result are a normal outcome (unsolvable input, or budget exhausted), not
/// an error. Because the search returns the first success in pool order, the
/// distribution over valid arrangements is not uniform; that is accepted.
///
/// A budget equal to the input length is enough whenever the search never
/// has to backtrack; hard inputs benefit from a small multiple of it.
pub fn constrained_shuffle<T, R>(items: Vec<T>, attempt_budget: usize, rng: &mut R) -> Vec<T>
where
    T: ArtistKeyed,
    R: Rng + ?Sized,
{
    if items.len() <= 2 {
        return items;
    }

    let mut candidate = items;
    fisher_yates(&mut candidate, rng);

    if adjacent_violations(&candidate) == 0 {
        return candidate;
    }

    let mut pool: Vec<usize> = (0..candidate.len()).collect();
    let mut prefix: Vec<usize> = Vec::with_capacity(candidate.len());
    let mut attempts = attempt_budget;

    match extend(&candidate, &mut pool, &mut prefix, &mut attempts) {
        Search::Found => reorder(candidate, &prefix),
        Search::DeadEnd | Search::OutOfBudget => {
            debug!(
                budget = attempt_budget,
                violations = adjacent_violations(&candidate),
                "no violation-free arrangement within budget, keeping plain shuffle"
            );
            candidate
        }
    }
}

/// Depth-first extension of `prefix` with the indices remaining in `pool`.
///
/// Invariant: on a `DeadEnd` return, `pool` and `prefix` are exactly as the
/// caller passed them, so the caller can move on to its next sibling.
fn extend<T: ArtistKeyed>(
    items: &[T],
    pool: &mut Vec<usize>,
    prefix: &mut Vec<usize>,
    attempts: &mut usize,
) -> Search {
    if pool.is_empty() {
        return Search::Found;
    }

    let last_key = prefix.last().map(|&i| items[i].artist_key());

    for slot in 0..pool.len() {
        let candidate = pool[slot];
        if last_key == Some(items[candidate].artist_key()) {
            continue;
        }
        if *attempts == 0 {
            return Search::OutOfBudget;
        }
        *attempts -= 1;

        pool.remove(slot);
        prefix.push(candidate);

        match extend(items, pool, prefix, attempts) {
            Search::DeadEnd => {
                prefix.pop();
                pool.insert(slot, candidate);
            }
            done => return done,
        }
    }

    Search::DeadEnd
}

/// Rebuilds the item vector in `order`, where `order` is a permutation of
/// `0..items.len()` produced by a successful search.
fn reorder<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .map(|&i| slots[i].take().expect("search emitted a valid permutation"))
        .collect()
}

/// Shuffles `items`, reducing (not eliminating) adjacent same-artist tracks.
///
/// The cheaper alternative to [`constrained_shuffle`]: no recursion and no
/// attempt budget. After a [`fisher_yates`] pre-shuffle, items are drained
/// from the front of a working stack into the output; whenever the front
/// item would repeat the artist just emitted, the whole stack is reversed
/// first so a different artist usually resurfaces. Worst case is O(n^2)
/// total work (one reversal per emitted item) and the result may still
/// contain adjacent repeats.
///
/// The two strategies are deliberately independent: this pass never falls
/// back to the backtracking search, and vice versa.
pub fn minimize_neighbors<T, R>(items: Vec<T>, rng: &mut R) -> Vec<T>
where
    T: ArtistKeyed,
    R: Rng + ?Sized,
{
    if items.len() <= 2 {
        return items;
    }

    let mut candidate = items;
    fisher_yates(&mut candidate, rng);

    let mut work: VecDeque<T> = candidate.into();
    let mut output: Vec<T> = Vec::with_capacity(work.len());

    while !work.is_empty() {
        let conflict = match (output.last(), work.front()) {
            (Some(last), Some(front)) => last.artist_key() == front.artist_key(),
            _ => false,
        };
        if conflict {
            work.make_contiguous().reverse();
        }
        if let Some(next) = work.pop_front() {
            output.push(next);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Track {
        artist: &'static str,
        title: &'static str,
    }

    impl ArtistKeyed for Track {
        fn artist_key(&self) -> &str {
            self.artist
        }
    }

    fn track(artist: &'static str, title: &'static str) -> Track {
        Track { artist, title }
    }

    #[test]
    fn violations_are_counted_per_adjacent_pair() {
        let items = [
            track("a", "1"),
            track("a", "2"),
            track("a", "3"),
            track("b", "4"),
        ];
        assert_eq!(adjacent_violations(&items), 2);
        assert_eq!(adjacent_violations(&items[..1]), 0);
        assert_eq!(adjacent_violations::<Track>(&[]), 0);
    }

    #[test]
    fn zero_budget_falls_back_to_the_plain_shuffle() {
        let items = vec![
            track("a", "1"),
            track("a", "2"),
            track("a", "3"),
            track("b", "4"),
            track("b", "5"),
        ];
        let mut rng = StdRng::seed_from_u64(9);

        let out = constrained_shuffle(items.clone(), 0, &mut rng);

        // Still a permutation even though the search never ran.
        let mut titles: Vec<_> = out.iter().map(|t| t.title).collect();
        titles.sort_unstable();
        assert_eq!(titles, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn dead_end_restores_pool_and_prefix_for_siblings() {
        // {a, a, b} forces at least one backtrack from an [b? a a] branch
        // whenever the pre-shuffle leads with "b".
        let items = vec![track("a", "1"), track("a", "2"), track("b", "3")];
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = constrained_shuffle(items.clone(), 16, &mut rng);
            assert_eq!(adjacent_violations(&out), 0, "seed {seed}");
        }
    }

    #[test]
    fn reorder_applies_the_permutation() {
        let items = vec![track("a", "1"), track("b", "2"), track("c", "3")];
        let out = reorder(items, &[2, 0, 1]);
        let titles: Vec<_> = out.iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["3", "1", "2"]);
    }

    #[test]
    fn minimize_neighbors_keeps_the_multiset() {
        let items = vec![
            track("a", "1"),
            track("a", "2"),
            track("b", "3"),
            track("b", "4"),
            track("c", "5"),
        ];
        let mut rng = StdRng::seed_from_u64(3);

        let out = minimize_neighbors(items.clone(), &mut rng);

        assert_eq!(out.len(), items.len());
        let mut titles: Vec<_> = out.iter().map(|t| t.title).collect();
        titles.sort_unstable();
        assert_eq!(titles, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn minimize_neighbors_terminates_on_single_artist_input() {
        let items: Vec<Track> = (0..8)
            .map(|i| Track {
                artist: "a",
                title: Box::leak(format!("t{i}").into_boxed_str()),
            })
            .collect();
        let mut rng = StdRng::seed_from_u64(4);

        let out = minimize_neighbors(items, &mut rng);
        assert_eq!(out.len(), 8);
        assert_eq!(adjacent_violations(&out), 7);
    }
}
