use snark_model::{Lifecycle, Torrent};
use std::rc::Rc;
use std::sync::Arc;

/// Read-only accessors over a torrent, owned or live.
///
/// Implementors may be backed by state that another thread keeps updating
/// (rates, progress). Every accessor returns whatever value is current at
/// call time; nothing here promises two calls observe the same instant.
pub trait TorrentLike {
    /// Display name, without any directory component.
    fn base_name(&self) -> &str;

    /// Whether the torrent's storage has been materialized.
    fn has_storage(&self) -> bool;

    /// Total size in bytes.
    fn total_length(&self) -> i64;

    /// Negative while the size is still being determined.
    fn remaining_length(&self) -> i64;

    /// Bytes still wanted by the current file selection.
    fn needed_length(&self) -> i64;

    /// Bytes downloaded over the torrent's lifetime.
    fn downloaded(&self) -> i64;

    /// Bytes uploaded over the torrent's lifetime.
    fn uploaded(&self) -> i64;

    /// Bytes per second.
    fn download_rate(&self) -> i64;

    /// Bytes per second.
    fn upload_rate(&self) -> i64;

    /// Negative when peer information is unavailable.
    fn peer_count(&self) -> i32;

    /// Current lifecycle flags.
    fn lifecycle(&self) -> Lifecycle;

    /// Shorthand for `lifecycle().stopped`.
    fn is_stopped(&self) -> bool {
        self.lifecycle().stopped
    }

    /// Shorthand for `lifecycle().starting`.
    fn is_starting(&self) -> bool {
        self.lifecycle().starting
    }

    /// Shorthand for `lifecycle().allocating`.
    fn is_allocating(&self) -> bool {
        self.lifecycle().allocating
    }

    /// Shorthand for `lifecycle().checking`.
    fn is_checking(&self) -> bool {
        self.lifecycle().checking
    }

    /// Capture every field once into an owned [`Torrent`].
    fn snapshot(&self) -> Torrent {
        Torrent {
            base_name: self.base_name().to_owned(),
            has_storage: self.has_storage(),
            total_length: self.total_length(),
            remaining_length: self.remaining_length(),
            needed_length: self.needed_length(),
            downloaded: self.downloaded(),
            uploaded: self.uploaded(),
            download_rate: self.download_rate(),
            upload_rate: self.upload_rate(),
            peer_count: self.peer_count(),
            lifecycle: self.lifecycle(),
        }
    }
}

impl TorrentLike for Torrent {
    fn base_name(&self) -> &str {
        &self.base_name
    }

    fn has_storage(&self) -> bool {
        self.has_storage
    }

    fn total_length(&self) -> i64 {
        self.total_length
    }

    fn remaining_length(&self) -> i64 {
        self.remaining_length
    }

    fn needed_length(&self) -> i64 {
        self.needed_length
    }

    fn downloaded(&self) -> i64 {
        self.downloaded
    }

    fn uploaded(&self) -> i64 {
        self.uploaded
    }

    fn download_rate(&self) -> i64 {
        self.download_rate
    }

    fn upload_rate(&self) -> i64 {
        self.upload_rate
    }

    fn peer_count(&self) -> i32 {
        self.peer_count
    }

    fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    fn snapshot(&self) -> Torrent {
        self.clone()
    }
}

macro_rules! forward_torrent_like {
    ($($wrapper:ty),* $(,)?) => {
        $(
            impl<T: TorrentLike + ?Sized> TorrentLike for $wrapper {
                fn base_name(&self) -> &str { (**self).base_name() }
                fn has_storage(&self) -> bool { (**self).has_storage() }
                fn total_length(&self) -> i64 { (**self).total_length() }
                fn remaining_length(&self) -> i64 { (**self).remaining_length() }
                fn needed_length(&self) -> i64 { (**self).needed_length() }
                fn downloaded(&self) -> i64 { (**self).downloaded() }
                fn uploaded(&self) -> i64 { (**self).uploaded() }
                fn download_rate(&self) -> i64 { (**self).download_rate() }
                fn upload_rate(&self) -> i64 { (**self).upload_rate() }
                fn peer_count(&self) -> i32 { (**self).peer_count() }
                fn lifecycle(&self) -> Lifecycle { (**self).lifecycle() }
                fn snapshot(&self) -> Torrent { (**self).snapshot() }
            }
        )*
    };
}

forward_torrent_like!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of<T: TorrentLike>(t: T) -> String {
        t.base_name().to_owned()
    }

    #[test]
    fn wrappers_forward_to_inner_torrent() {
        let t = Torrent::new("Fedora").with_peer_count(4);
        let shared = Arc::new(t.clone());

        assert_eq!(name_of(&t), "Fedora");
        assert_eq!(name_of(Box::new(t.clone())), "Fedora");
        assert_eq!(shared.peer_count(), 4);
        assert_eq!(name_of(Arc::clone(&shared)), "Fedora");
    }

    #[test]
    fn snapshot_copies_every_field() {
        let t = Torrent::downloading("Mint", 900, 300)
            .with_transferred(600, 25)
            .with_rates(7, 3)
            .with_peer_count(-1)
            .with_lifecycle(Lifecycle::ALLOCATING)
            .without_storage();

        assert_eq!((&t).snapshot(), t);
        assert!(t.is_allocating());
        assert!(!t.is_stopped());
    }
}
