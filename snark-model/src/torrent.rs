use crate::lifecycle::Lifecycle;

/// Owned view of a torrent as shown in a transfer list.
///
/// Lengths, totals and rates are signed because clients report sentinel
/// negatives: `remaining_length < 0` means the size is still being
/// determined (e.g. magnet metadata not fetched yet) and `peer_count < 0`
/// means the tracker/peer information is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Torrent {
    #[cfg_attr(feature = "serde", serde(alias = "name"))]
    pub base_name: String,
    /// `false` while the torrent has no storage yet (magnet link, pending
    /// download).
    pub has_storage: bool,
    pub total_length: i64,
    pub remaining_length: i64,
    pub needed_length: i64,
    pub downloaded: i64,
    pub uploaded: i64,
    /// Bytes per second.
    pub download_rate: i64,
    /// Bytes per second.
    pub upload_rate: i64,
    pub peer_count: i32,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub lifecycle: Lifecycle,
}

impl Default for Torrent {
    fn default() -> Self {
        Self {
            base_name: String::new(),
            has_storage: true,
            total_length: 0,
            remaining_length: 0,
            needed_length: 0,
            downloaded: 0,
            uploaded: 0,
            download_rate: 0,
            upload_rate: 0,
            peer_count: 0,
            lifecycle: Lifecycle::RUNNING,
        }
    }
}

impl Torrent {
    pub fn new(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            ..Self::default()
        }
    }

    /// A torrent whose storage is not materialized yet and whose size is
    /// unknown.
    pub fn magnet(base_name: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            has_storage: false,
            remaining_length: -1,
            needed_length: -1,
            ..Self::default()
        }
    }

    pub fn without_storage(mut self) -> Self {
        self.has_storage = false;
        self
    }

    pub fn with_total_length(mut self, total_length: i64) -> Self {
        self.total_length = total_length;
        self
    }

    pub fn with_remaining_length(mut self, remaining_length: i64) -> Self {
        self.remaining_length = remaining_length;
        self
    }

    pub fn with_needed_length(mut self, needed_length: i64) -> Self {
        self.needed_length = needed_length;
        self
    }

    pub fn with_transferred(mut self, downloaded: i64, uploaded: i64) -> Self {
        self.downloaded = downloaded;
        self.uploaded = uploaded;
        self
    }

    pub fn with_rates(mut self, download_rate: i64, upload_rate: i64) -> Self {
        self.download_rate = download_rate;
        self.upload_rate = upload_rate;
        self
    }

    pub fn with_peer_count(mut self, peer_count: i32) -> Self {
        self.peer_count = peer_count;
        self
    }

    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    /// Convenience for a running torrent with `remaining` bytes left of
    /// `total`, where everything still missing is also still needed.
    pub fn downloading(
        base_name: impl Into<String>,
        total: i64,
        remaining: i64,
    ) -> Self {
        Self::new(base_name)
            .with_total_length(total)
            .with_remaining_length(remaining)
            .with_needed_length(remaining)
    }
}
