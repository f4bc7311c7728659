//! # snark-core
//!
//! Multi-key ordering for a list of torrents as shown in a transfer list.
//!
//! Given a signed column selector (magnitude = column, sign = direction),
//! [`OrderingEngine::comparator`] returns a total order over anything that
//! implements [`TorrentLike`](snark_contracts::prelude::TorrentLike):
//!
//! - ties on the selected column always fall back to ascending name order,
//! - names collate for the configured locale, ignoring a leading "the",
//! - the status column orders by a rank derived from live lifecycle and
//!   progress fields rather than by any stored field.
//!
//! ## Example
//!
//! ```no_run
//! use snark_core::{OrderingConfig, OrderingEngine, sort_torrents};
//! use snark_model::Torrent;
//!
//! # fn main() -> snark_core::error::Result<()> {
//! let engine = OrderingEngine::new(&OrderingConfig::default())?;
//! let mut list = vec![
//!     Torrent::downloading("The Matrix", 700, 100).with_rates(10, 0),
//!     Torrent::magnet("debian-12.iso"),
//! ];
//! // Largest first.
//! sort_torrents(&mut list, &engine.comparator(-5));
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod ordering;

pub use config::{OrderingConfig, OrderingConfigSource};
pub use error::{OrderingError, Result};
pub use ordering::{
    ColumnSelector, OrderingEngine, SortColumn, SortDirection, StatusRank,
    TorrentComparator, eta_seconds, sort_torrents, status_rank,
};
