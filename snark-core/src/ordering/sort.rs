//! Sorting helpers built on [`TorrentComparator`].
//!
//! Torrents are often live handles whose rates and progress keep changing.
//! The helpers here snapshot every item once, sort the snapshots' indices
//! and then reorder the caller's slice, so a single pass never sees two
//! different values for the same torrent.

use super::comparator::TorrentComparator;
use snark_contracts::prelude::TorrentLike;
use snark_model::Torrent;
use std::cmp::Ordering;

#[cfg(feature = "parallel-sorting")]
use rayon::prelude::*;

/// A strategy for putting a list of torrents in order.
pub trait SortStrategy<T>: Send + Sync {
    /// Apply this sorting strategy to the given items
    fn sort(&self, items: &mut [T]);
}

/// Apply a permutation from [`sorted_indices`]: afterwards `items[i]` is
/// the element that sat at `order[i]`.
pub fn reorder_by_indices<T: Clone>(items: &mut [T], order: &[usize]) {
    debug_assert_eq!(
        items.len(),
        order.len(),
        "permutation must cover every torrent"
    );
    let reordered: Vec<T> =
        order.iter().map(|&from| items[from].clone()).collect();
    items.clone_from_slice(&reordered);
}

/// Whether no adjacent pair of `items` is out of order under `compare`.
///
/// Lets a list view skip re-sorting when nothing moved since the last pass.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

/// Stable sorted permutation of `items`: position `i` of the result holds
/// the index of the item that belongs at `i`.
pub fn sorted_indices<T: TorrentLike>(
    items: &[T],
    comparator: &TorrentComparator,
) -> Vec<usize> {
    let snapshots: Vec<Torrent> =
        items.iter().map(TorrentLike::snapshot).collect();
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| comparator.compare(&snapshots[a], &snapshots[b]));
    indices
}

/// Sort `items` in place with `comparator`, reading each torrent once.
pub fn sort_torrents<T: TorrentLike + Clone>(
    items: &mut [T],
    comparator: &TorrentComparator,
) {
    if items.len() < 2 {
        return;
    }
    let indices = sorted_indices(items, comparator);
    reorder_by_indices(items, &indices);
}

impl<T> SortStrategy<T> for TorrentComparator
where
    T: TorrentLike + Clone,
{
    fn sort(&self, items: &mut [T]) {
        sort_torrents(items, self);
    }
}

/// Parallel sorting for large lists
///
/// Uses Rayon to snapshot and sort when the list reaches the threshold.
#[derive(Debug, Clone)]
pub struct ParallelSort {
    pub comparator: TorrentComparator,
    pub threshold: usize,
}

impl ParallelSort {
    /// Create a new parallel sort with default threshold (10,000 items)
    pub fn new(comparator: TorrentComparator) -> Self {
        Self {
            comparator,
            threshold: 10_000,
        }
    }

    /// Create a parallel sort with custom threshold
    pub fn with_threshold(
        comparator: TorrentComparator,
        threshold: usize,
    ) -> Self {
        Self {
            comparator,
            threshold,
        }
    }
}

#[cfg(feature = "parallel-sorting")]
impl<T> SortStrategy<T> for ParallelSort
where
    T: TorrentLike + Clone + Send + Sync,
{
    fn sort(&self, items: &mut [T]) {
        if items.len() < self.threshold {
            sort_torrents(items, &self.comparator);
            return;
        }

        let snapshots: Vec<Torrent> =
            items.par_iter().map(TorrentLike::snapshot).collect();
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.par_sort_by(|&a, &b| {
            self.comparator.compare(&snapshots[a], &snapshots[b])
        });
        reorder_by_indices(items, &indices);
    }
}

#[cfg(not(feature = "parallel-sorting"))]
impl<T> SortStrategy<T> for ParallelSort
where
    T: TorrentLike + Clone + Send + Sync,
{
    fn sort(&self, items: &mut [T]) {
        // Fallback to sequential sorting when parallel feature is disabled
        sort_torrents(items, &self.comparator);
    }
}
