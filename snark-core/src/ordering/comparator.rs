//! Comparator factory for the transfer list.
//!
//! Every comparator follows the same composition: the column's primary
//! comparison decides, with the selector's direction applied, and ties fall
//! back to ascending name order. The tie-break is never reversed, so
//! reversing a numeric column keeps equal-valued torrents alphabetical.

use super::collation::NameCollation;
use super::column::{ColumnSelector, SortColumn, SortDirection};
use super::metrics::compare_metric;
use super::status::status_rank;
use crate::config::OrderingConfig;
use crate::error::Result;
use snark_contracts::prelude::TorrentLike;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, trace};

/// Apply `direction` to a primary result, or break the tie with
/// `tie_break` (which is never reversed).
#[inline]
pub fn compose(
    primary: Ordering,
    direction: SortDirection,
    tie_break: impl FnOnce() -> Ordering,
) -> Ordering {
    match primary {
        Ordering::Equal => tie_break(),
        decided => direction.apply(decided),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Name ordering selected directly. The direction applies to the whole
    /// comparison, including the storage check.
    Name(SortDirection),
    /// Status rank, directed when the comparator is built.
    Status { reverse: bool },
    /// Any other metric column, directed by the shared wrapper.
    Metric(SortColumn, SortDirection),
}

impl Rule {
    fn for_selector(selector: ColumnSelector) -> Self {
        let direction = selector.direction();
        match selector.column() {
            SortColumn::Name => Rule::Name(direction),
            SortColumn::Status => Rule::Status {
                reverse: direction.is_reversed(),
            },
            metric => Rule::Metric(metric, direction),
        }
    }
}

fn compare_status<T: TorrentLike + ?Sized>(
    l: &T,
    r: &T,
    reverse: bool,
) -> Ordering {
    let ordering = status_rank(l).cmp(&status_rank(r));
    if reverse { ordering.reverse() } else { ordering }
}

/// Total order over torrents for one column selector.
///
/// Stateless after construction: it only holds the selector and a shared
/// handle to the name collation, and can be cloned and used from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct TorrentComparator {
    selector: ColumnSelector,
    rule: Rule,
    names: Arc<NameCollation>,
}

impl TorrentComparator {
    pub fn new(
        selector: impl Into<ColumnSelector>,
        names: Arc<NameCollation>,
    ) -> Self {
        let selector = selector.into();
        if !selector.is_recognized() {
            trace!(
                selector = selector.raw(),
                "unrecognized sort column, falling back to name"
            );
        }
        Self {
            selector,
            rule: Rule::for_selector(selector),
            names,
        }
    }

    pub fn selector(&self) -> ColumnSelector {
        self.selector
    }

    pub fn column(&self) -> SortColumn {
        self.selector.column()
    }

    pub fn direction(&self) -> SortDirection {
        self.selector.direction()
    }

    pub fn compare<T: TorrentLike + ?Sized>(&self, l: &T, r: &T) -> Ordering {
        match self.rule {
            Rule::Name(direction) => direction.apply(self.names.compare(l, r)),
            Rule::Status { reverse } => compose(
                compare_status(l, r, reverse),
                SortDirection::Ascending,
                || self.names.compare(l, r),
            ),
            Rule::Metric(column, direction) => compose(
                compare_metric(column, l, r).unwrap_or(Ordering::Equal),
                direction,
                || self.names.compare(l, r),
            ),
        }
    }

    /// Borrowing closure for `slice::sort_by` and friends.
    ///
    /// The closure reads fields on every call. Sorting live torrents that
    /// change mid-sort can make `sort_by` panic; use
    /// [`sort_torrents`](super::sort_torrents) for those.
    pub fn as_fn<T: TorrentLike>(&self) -> impl Fn(&T, &T) -> Ordering {
        move |l: &T, r: &T| self.compare(l, r)
    }

    /// Owning closure that can be moved into other threads.
    ///
    /// Same caveat as [`as_fn`](Self::as_fn): snapshot live torrents first,
    /// or sort them with [`sort_torrents`](super::sort_torrents).
    pub fn into_fn<T: TorrentLike>(
        self,
    ) -> impl Fn(&T, &T) -> Ordering + Clone + Send + Sync {
        move |l: &T, r: &T| self.compare(l, r)
    }
}

/// Builds comparators that share one name collation.
#[derive(Debug, Clone)]
pub struct OrderingEngine {
    names: Arc<NameCollation>,
}

impl OrderingEngine {
    /// Resolve the collation described by `config` once, for every
    /// comparator this engine hands out.
    pub fn new(config: &OrderingConfig) -> Result<Self> {
        let names = config.build_collation()?;
        debug!(
            locale = %names.locale(),
            strength = ?names.strength(),
            "name collation ready"
        );
        Ok(Self::with_collation(names))
    }

    pub fn with_collation(names: NameCollation) -> Self {
        Self {
            names: Arc::new(names),
        }
    }

    pub fn collation(&self) -> &NameCollation {
        &self.names
    }

    /// Comparator for a signed column selector. Total over `i32`: unknown
    /// magnitudes order by name.
    pub fn comparator(
        &self,
        selector: impl Into<ColumnSelector>,
    ) -> TorrentComparator {
        let comparator =
            TorrentComparator::new(selector, Arc::clone(&self.names));
        debug!(
            selector = comparator.selector().raw(),
            column = %comparator.column(),
            direction = ?comparator.direction(),
            "built torrent comparator"
        );
        comparator
    }
}
