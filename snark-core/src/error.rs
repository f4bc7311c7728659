use std::path::PathBuf;
use thiserror::Error;

/// Failures while configuring an [`OrderingEngine`](crate::OrderingEngine).
///
/// Comparing torrents never fails; only building the collation, parsing a
/// selector and loading configuration can.
#[derive(Error, Debug)]
pub enum OrderingError {
    /// The configured locale is not a valid BCP-47 tag.
    #[error("Invalid collation locale `{locale}`: {reason}")]
    InvalidLocale { locale: String, reason: String },

    /// No collation data could be loaded for a parsed locale.
    #[error("Collator unavailable for `{locale}`: {reason}")]
    CollatorUnavailable { locale: String, reason: String },

    /// A column selector that is not a decimal integer.
    #[error("Invalid column selector `{input}`: {source}")]
    InvalidSelector {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Failed to read ordering config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML or JSON that does not describe an ordering config.
    #[error("Failed to parse ordering config {origin}: {reason}")]
    ConfigParse { origin: String, reason: String },
}

/// Result alias for ordering setup.
pub type Result<T> = std::result::Result<T, OrderingError>;
