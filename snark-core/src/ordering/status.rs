//! Derived status rank used by the status column.
//!
//! No torrent stores its rank. It is recomputed from the live lifecycle and
//! progress fields on every comparison, so a rank never outlives the call
//! that produced it.

use serde::Serialize;
use snark_contracts::prelude::TorrentLike;
use std::fmt;

/// Ordinal priority of a torrent's state. Higher means further along:
/// stopped/broken states rank low, active transfers sit in the middle and
/// complete/seeding torrents rank highest. The gaps between ranks are
/// reserved for future intermediate states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct StatusRank(u8);

impl StatusRank {
    pub const STOPPED_UNKNOWN: StatusRank = StatusRank(0);
    pub const STOPPED_INCOMPLETE: StatusRank = StatusRank(5);
    pub const STOPPED_COMPLETE: StatusRank = StatusRank(10);
    /// Starting up, or fetching magnet metadata.
    pub const STARTING: StatusRank = StatusRank(15);
    pub const ALLOCATING: StatusRank = StatusRank(20);
    pub const NO_PEERS: StatusRank = StatusRank(40);
    pub const STALLED: StatusRank = StatusRank(50);
    pub const DOWNLOADING: StatusRank = StatusRank(60);
    /// Nothing left that is wanted, although pieces are still missing.
    pub const PARTIAL_COMPLETE: StatusRank = StatusRank(90);
    pub const CHECKING: StatusRank = StatusRank(95);
    pub const SEEDING: StatusRank = StatusRank(100);

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::STOPPED_UNKNOWN => "Stopped",
            Self::STOPPED_INCOMPLETE => "Stopped (incomplete)",
            Self::STOPPED_COMPLETE => "Stopped (complete)",
            Self::STARTING => "Starting",
            Self::ALLOCATING => "Allocating",
            Self::NO_PEERS => "No peers",
            Self::STALLED => "Stalled",
            Self::DOWNLOADING => "Downloading",
            Self::PARTIAL_COMPLETE => "Complete (partial)",
            Self::CHECKING => "Checking",
            Self::SEEDING => "Seeding",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for StatusRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derive the status rank of `torrent`.
///
/// Rules are evaluated top to bottom and the first match wins, so the order
/// of the checks is part of the contract: a stopped torrent is ranked by its
/// remaining length alone, and a complete torrent ranks as seeding even if
/// its checking flag is raised.
pub fn status_rank<T: TorrentLike + ?Sized>(torrent: &T) -> StatusRank {
    let remaining = torrent.remaining_length();
    let lifecycle = torrent.lifecycle();

    if lifecycle.stopped {
        return match remaining {
            r if r < 0 => StatusRank::STOPPED_UNKNOWN,
            r if r > 0 => StatusRank::STOPPED_INCOMPLETE,
            _ => StatusRank::STOPPED_COMPLETE,
        };
    }
    if lifecycle.starting {
        return StatusRank::STARTING;
    }
    if lifecycle.allocating {
        return StatusRank::ALLOCATING;
    }
    // magnet
    if remaining < 0 {
        return StatusRank::STARTING;
    }
    if remaining == 0 {
        return StatusRank::SEEDING;
    }
    if lifecycle.checking {
        return StatusRank::CHECKING;
    }
    if torrent.needed_length() <= 0 {
        return StatusRank::PARTIAL_COMPLETE;
    }
    if torrent.peer_count() <= 0 {
        return StatusRank::NO_PEERS;
    }
    if torrent.download_rate() <= 0 {
        return StatusRank::STALLED;
    }
    StatusRank::DOWNLOADING
}
