//! Trait surfaces that describe read access to torrent state.

pub mod torrent_like;

/// Frequently used traits for list views and sorting.
pub mod prelude {
    pub use super::torrent_like::TorrentLike;
    pub use snark_model::{Lifecycle, Torrent};
}
