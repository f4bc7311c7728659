//! Core data model definitions shared across snark-sort crates.
#![allow(missing_docs)]

pub mod lifecycle;
pub mod torrent;

pub use lifecycle::Lifecycle;
pub use torrent::Torrent;
