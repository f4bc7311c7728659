//! Column selectors for the transfer list.
//!
//! A selector is a signed integer: the magnitude picks the column, a
//! negative sign reverses it. Selectors travel through query strings and
//! config files in this integer form, so [`ColumnSelector`] keeps the raw
//! value instead of normalising it.

use crate::error::OrderingError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Columns the list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Status,
    Peers,
    Eta,
    Size,
    Downloaded,
    Uploaded,
    DownloadRate,
    UploadRate,
    Remaining,
}

impl SortColumn {
    pub const ALL: [SortColumn; 10] = [
        SortColumn::Name,
        SortColumn::Status,
        SortColumn::Peers,
        SortColumn::Eta,
        SortColumn::Size,
        SortColumn::Downloaded,
        SortColumn::Uploaded,
        SortColumn::DownloadRate,
        SortColumn::UploadRate,
        SortColumn::Remaining,
    ];

    /// Positive column id used in selectors.
    pub const fn id(self) -> i32 {
        match self {
            SortColumn::Name => 1,
            SortColumn::Status => 2,
            SortColumn::Peers => 3,
            SortColumn::Eta => 4,
            SortColumn::Size => 5,
            SortColumn::Downloaded => 6,
            SortColumn::Uploaded => 7,
            SortColumn::DownloadRate => 8,
            SortColumn::UploadRate => 9,
            SortColumn::Remaining => 10,
        }
    }

    /// Resolve a selector magnitude. 0, 1 and anything unrecognised are
    /// the name column.
    pub const fn from_magnitude(magnitude: u32) -> SortColumn {
        match magnitude {
            2 => SortColumn::Status,
            3 => SortColumn::Peers,
            4 => SortColumn::Eta,
            5 => SortColumn::Size,
            6 => SortColumn::Downloaded,
            7 => SortColumn::Uploaded,
            8 => SortColumn::DownloadRate,
            9 => SortColumn::UploadRate,
            10 => SortColumn::Remaining,
            _ => SortColumn::Name,
        }
    }

    /// Same as [`SortColumn::from_magnitude`], but `None` for magnitudes
    /// outside 0..=10.
    pub const fn from_id(id: u32) -> Option<SortColumn> {
        match id {
            0..=10 => Some(Self::from_magnitude(id)),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Status => "status",
            SortColumn::Peers => "peers",
            SortColumn::Eta => "eta",
            SortColumn::Size => "size",
            SortColumn::Downloaded => "downloaded",
            SortColumn::Uploaded => "uploaded",
            SortColumn::DownloadRate => "download_rate",
            SortColumn::UploadRate => "upload_rate",
            SortColumn::Remaining => "remaining",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn is_reversed(self) -> bool {
        self == SortDirection::Descending
    }
}

/// Signed column selector, e.g. `4` (ETA ascending) or `-5` (size
/// descending).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct ColumnSelector(i32);

impl ColumnSelector {
    pub const NAME: ColumnSelector = ColumnSelector(1);

    pub const fn new(raw: i32) -> Self {
        ColumnSelector(raw)
    }

    pub const fn from_column(
        column: SortColumn,
        direction: SortDirection,
    ) -> Self {
        match direction {
            SortDirection::Ascending => ColumnSelector(column.id()),
            SortDirection::Descending => ColumnSelector(-column.id()),
        }
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    pub const fn column(self) -> SortColumn {
        SortColumn::from_magnitude(self.magnitude())
    }

    /// True when the magnitude names one of the known columns. Out of range
    /// selectors still resolve, to the name column.
    pub const fn is_recognized(self) -> bool {
        self.magnitude() <= 10
    }

    pub const fn direction(self) -> SortDirection {
        if self.0 < 0 {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    /// Flip the direction. `0` has no sign and stays `0`.
    pub const fn reversed(self) -> Self {
        ColumnSelector(self.0.saturating_neg())
    }

    /// Selector produced by clicking `column`'s header while `self` is
    /// active: the active column flips direction, any other column starts
    /// ascending.
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column() == column {
            match self.direction() {
                SortDirection::Ascending => {
                    Self::from_column(column, SortDirection::Descending)
                }
                SortDirection::Descending => {
                    Self::from_column(column, SortDirection::Ascending)
                }
            }
        } else {
            Self::from_column(column, SortDirection::Ascending)
        }
    }
}

impl From<i32> for ColumnSelector {
    fn from(raw: i32) -> Self {
        ColumnSelector(raw)
    }
}

impl From<ColumnSelector> for i32 {
    fn from(selector: ColumnSelector) -> Self {
        selector.0
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColumnSelector {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .map(ColumnSelector)
            .map_err(|source| OrderingError::InvalidSelector {
                input: s.to_owned(),
                source,
            })
    }
}
