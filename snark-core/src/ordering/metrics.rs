//! Per-column primary comparisons.
//!
//! Every metric is compared three-way with `Ord` rather than by
//! subtraction, so values near the integer bounds cannot wrap.

use super::column::SortColumn;
use super::status::status_rank;
use snark_contracts::prelude::TorrentLike;
use std::cmp::Ordering;

/// Sentinel ETA for torrents that are not transferring or have nothing left
/// to fetch.
pub const ETA_UNKNOWN: i64 = -1;

/// Estimated seconds until the torrent has everything it needs.
///
/// The needed length is capped at the total length. Negative download rates
/// count as "not transferring", the same as zero.
pub fn eta_seconds<T: TorrentLike + ?Sized>(torrent: &T) -> i64 {
    let needed = torrent.needed_length().min(torrent.total_length());
    let rate = torrent.download_rate();
    if rate > 0 && needed > 0 {
        needed / rate
    } else {
        ETA_UNKNOWN
    }
}

/// Primary, direction-less comparison for a metric column.
///
/// Returns `None` for [`SortColumn::Name`], which has no metric of its own.
pub fn compare_metric<T: TorrentLike + ?Sized>(
    column: SortColumn,
    l: &T,
    r: &T,
) -> Option<Ordering> {
    let ordering = match column {
        SortColumn::Name => return None,
        SortColumn::Status => status_rank(l).cmp(&status_rank(r)),
        SortColumn::Peers => l.peer_count().cmp(&r.peer_count()),
        SortColumn::Eta => eta_seconds(l).cmp(&eta_seconds(r)),
        SortColumn::Size => l.total_length().cmp(&r.total_length()),
        SortColumn::Downloaded => l.downloaded().cmp(&r.downloaded()),
        SortColumn::Uploaded => l.uploaded().cmp(&r.uploaded()),
        SortColumn::DownloadRate => l.download_rate().cmp(&r.download_rate()),
        SortColumn::UploadRate => l.upload_rate().cmp(&r.upload_rate()),
        SortColumn::Remaining => l.needed_length().cmp(&r.needed_length()),
    };
    Some(ordering)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snark_model::Torrent;

    fn eta_of(rate: i64, needed: i64) -> i64 {
        eta_seconds(
            &Torrent::new("t")
                .with_total_length(1_000)
                .with_needed_length(needed)
                .with_rates(rate, 0),
        )
    }

    #[test]
    fn eta_is_needed_over_rate() {
        assert_eq!(eta_of(10, 100), 10);
        assert_eq!(eta_of(3, 100), 33);
    }

    #[test]
    fn eta_sentinel_when_idle_or_done() {
        assert_eq!(eta_of(5, 0), ETA_UNKNOWN);
        assert_eq!(eta_of(0, 100), ETA_UNKNOWN);
        assert_eq!(eta_of(-20, 100), ETA_UNKNOWN);
        assert_eq!(eta_of(5, -1), ETA_UNKNOWN);
    }

    #[test]
    fn eta_caps_needed_at_total_length() {
        let t = Torrent::new("t")
            .with_total_length(50)
            .with_needed_length(5_000)
            .with_rates(10, 0);
        assert_eq!(eta_seconds(&t), 5);
    }

    #[test]
    fn large_values_compare_without_wrapping() {
        let small = Torrent::new("a").with_total_length(i64::MIN + 1);
        let big = Torrent::new("b").with_total_length(i64::MAX);
        assert_eq!(
            compare_metric(SortColumn::Size, &small, &big),
            Some(Ordering::Less)
        );

        let few = Torrent::new("a").with_peer_count(i32::MIN);
        let many = Torrent::new("b").with_peer_count(i32::MAX);
        assert_eq!(
            compare_metric(SortColumn::Peers, &few, &many),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn remaining_column_reads_needed_length() {
        let a = Torrent::new("a").with_remaining_length(1).with_needed_length(9);
        let b = Torrent::new("b").with_remaining_length(9).with_needed_length(1);
        assert_eq!(
            compare_metric(SortColumn::Remaining, &a, &b),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn name_column_has_no_metric() {
        let t = Torrent::new("t");
        assert_eq!(compare_metric(SortColumn::Name, &t, &t), None);
    }
}
