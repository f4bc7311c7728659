//! Locale-aware name ordering, shared by the name column and by the
//! tie-break of every other column.

use crate::error::{OrderingError, Result};
use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};
use snark_contracts::prelude::TorrentLike;
use std::cmp::Ordering;
use std::fmt;

/// How fine-grained name comparison is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CollationStrength {
    /// Base letters only: case and accents are ignored.
    Primary,
    /// Base letters and accents; case is ignored.
    #[default]
    Secondary,
    /// Base letters, accents and case.
    Tertiary,
}

impl From<CollationStrength> for Strength {
    fn from(strength: CollationStrength) -> Self {
        match strength {
            CollationStrength::Primary => Strength::Primary,
            CollationStrength::Secondary => Strength::Secondary,
            CollationStrength::Tertiary => Strength::Tertiary,
        }
    }
}

/// Remove a leading `"the"` plus one separator (`' '`, `'.'` or `'_'`),
/// ignoring ASCII case. Only the first four characters are ever removed.
pub fn strip_leading_article(name: &str) -> &str {
    match name.as_bytes() {
        [t, h, e, b' ' | b'.' | b'_', ..]
            if [*t, *h, *e].eq_ignore_ascii_case(b"the") =>
        {
            // The first four bytes are ASCII, so index 4 is a char boundary.
            &name[4..]
        }
        _ => name,
    }
}

/// Collator resolved once for a locale and reused by every comparison.
///
/// Collation keys are never cached: names can change between comparisons.
pub struct NameCollation {
    collator: CollatorBorrowed<'static>,
    locale: Locale,
    strength: CollationStrength,
}

impl NameCollation {
    /// Build a collator for a BCP-47 locale tag such as `"de-DE"`.
    pub fn new(locale: &str, strength: CollationStrength) -> Result<Self> {
        let parsed: Locale =
            locale.parse().map_err(|err| OrderingError::InvalidLocale {
                locale: locale.to_owned(),
                reason: format!("{err}"),
            })?;
        Self::with_locale(parsed, strength)
    }

    /// Collator for the root locale (`und`).
    pub fn root(strength: CollationStrength) -> Result<Self> {
        Self::with_locale(Locale::UNKNOWN, strength)
    }

    pub fn with_locale(
        locale: Locale,
        strength: CollationStrength,
    ) -> Result<Self> {
        let mut options = CollatorOptions::default();
        options.strength = Some(strength.into());

        let collator =
            Collator::try_new(locale.clone().into(), options).map_err(
                |err| OrderingError::CollatorUnavailable {
                    locale: locale.to_string(),
                    reason: format!("{err}"),
                },
            )?;

        Ok(Self {
            collator,
            locale,
            strength,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn strength(&self) -> CollationStrength {
        self.strength
    }

    /// Collate two display names after stripping a leading article from
    /// each.
    pub fn compare_names(&self, l: &str, r: &str) -> Ordering {
        self.collator
            .compare(strip_leading_article(l), strip_leading_article(r))
    }

    /// Name ordering for torrents: torrents without storage come first,
    /// then names collate in the configured locale.
    pub fn compare<T: TorrentLike + ?Sized>(&self, l: &T, r: &T) -> Ordering {
        match (l.has_storage(), r.has_storage()) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => self.compare_names(l.base_name(), r.base_name()),
        }
    }
}

impl fmt::Debug for NameCollation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollation")
            .field("locale", &self.locale.to_string())
            .field("strength", &self.strength)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snark_model::Torrent;

    fn root() -> NameCollation {
        NameCollation::root(CollationStrength::Secondary).unwrap()
    }

    #[test]
    fn strips_one_leading_article() {
        assert_eq!(strip_leading_article("The Matrix"), "Matrix");
        assert_eq!(strip_leading_article("the.wire.s01"), "wire.s01");
        assert_eq!(strip_leading_article("THE_OFFICE"), "OFFICE");
        assert_eq!(strip_leading_article("The The"), "The");
    }

    #[test]
    fn keeps_names_that_only_look_like_articles() {
        assert_eq!(strip_leading_article("Theory"), "Theory");
        assert_eq!(strip_leading_article("The"), "The");
        assert_eq!(strip_leading_article("the-end"), "the-end");
        assert_eq!(strip_leading_article(" The Matrix"), " The Matrix");
        assert_eq!(strip_leading_article("Thé Matrix"), "Thé Matrix");
        assert_eq!(strip_leading_article(""), "");
    }

    #[test]
    fn article_is_ignored_when_collating() {
        let collation = root();
        assert_eq!(
            collation.compare_names("The Matrix", "Matrix Reloaded"),
            Ordering::Less
        );
        assert_eq!(
            collation.compare_names("The Matrix", "Alien"),
            Ordering::Greater
        );
    }

    #[test]
    fn comparison_ignores_case() {
        let collation = root();
        assert_eq!(collation.compare_names("ubuntu", "Ubuntu"), Ordering::Equal);
        assert_eq!(collation.compare_names("alpha", "Beta"), Ordering::Less);
        assert_eq!(collation.compare_names("Alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let collation = root();
        // Byte-wise, 'É' sorts after every ASCII letter.
        assert_eq!(collation.compare_names("Éclair", "Zebra"), Ordering::Less);
        assert_eq!(collation.compare_names("Eagle", "Éclair"), Ordering::Less);
    }

    #[test]
    fn tertiary_strength_distinguishes_case() {
        let collation =
            NameCollation::root(CollationStrength::Tertiary).unwrap();
        assert_ne!(collation.compare_names("ubuntu", "Ubuntu"), Ordering::Equal);
    }

    #[test]
    fn missing_storage_sorts_first() {
        let collation = root();
        let magnet = Torrent::magnet("Zulu");
        let stored = Torrent::new("Alpha");
        assert_eq!(collation.compare(&magnet, &stored), Ordering::Less);
        assert_eq!(collation.compare(&stored, &magnet), Ordering::Greater);
    }

    #[test]
    fn rejects_malformed_locale() {
        let err = NameCollation::new("not a locale!", CollationStrength::Primary)
            .unwrap_err();
        assert!(matches!(err, OrderingError::InvalidLocale { .. }));
    }

    #[test]
    fn builds_for_regional_locale() {
        let collation =
            NameCollation::new("de-DE", CollationStrength::Secondary).unwrap();
        assert_eq!(collation.locale().to_string(), "de-DE");
        assert_eq!(collation.compare_names("Äpfel", "Birnen"), Ordering::Less);
    }
}
