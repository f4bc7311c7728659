//! Ordering module for the torrent transfer list
//!
//! This module provides:
//! - Signed column selectors and their columns/directions
//! - The derived status rank and the ETA estimate
//! - Locale-aware name collation used as the universal tie-break
//! - The comparator factory and sorting helpers built on it

pub mod collation;
pub mod column;
pub mod comparator;
pub mod metrics;
pub mod sort;
pub mod status;


pub use collation::{CollationStrength, NameCollation, strip_leading_article};
pub use column::{ColumnSelector, SortColumn, SortDirection};
pub use comparator::{OrderingEngine, TorrentComparator, compose};
pub use metrics::{ETA_UNKNOWN, compare_metric, eta_seconds};
pub use sort::{
    ParallelSort, SortStrategy, is_sorted_by, sort_torrents, sorted_indices,
};
pub use status::{StatusRank, status_rank};
