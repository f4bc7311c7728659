//! Ordering configuration.
//!
//! Only the collation set-up is configurable. The active column selector is
//! caller state and is never stored here.

use crate::error::{OrderingError, Result};
use crate::ordering::collation::{CollationStrength, NameCollation};
use icu_locale_core::Locale;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const CONFIG_PATH_ENV: &str = "SNARK_SORT_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "SNARK_SORT_CONFIG_JSON";

/// Environment variables consulted for the collation locale, in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_COLLATE", "LANG"];

/// Source that produced the ordering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OrderingConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Where the collation locale came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSource {
    Config,
    /// Named environment variable.
    Env(&'static str),
    Root,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// BCP-47 tag for name collation, e.g. `"sv-SE"`. When unset the
    /// process locale from the environment is used, then the root locale.
    pub locale: Option<String>,
    /// Collation strength for names. Defaults to case-insensitive.
    pub strength: CollationStrength,
}

impl OrderingConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$SNARK_SORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SNARK_SORT_CONFIG_JSON` (inline JSON),
    /// 3) defaults if neither is set.
    pub fn load_from_env() -> Result<(Self, OrderingConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, OrderingConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = serde_json::from_str(&raw).map_err(|err| {
                OrderingError::ConfigParse {
                    origin: CONFIG_JSON_ENV.to_owned(),
                    reason: err.to_string(),
                }
            })?;
            return Ok((parsed, OrderingConfigSource::EnvInline));
        }

        Ok((Self::default(), OrderingConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| {
            OrderingError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|err| {
                OrderingError::ConfigParse {
                    origin,
                    reason: err.to_string(),
                }
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    OrderingError::ConfigParse {
                        origin,
                        reason: err.to_string(),
                    }
                })
            }
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    pub fn parse_from_str(contents: &str, origin: &str) -> Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                OrderingError::ConfigParse {
                    origin: origin.to_owned(),
                    reason: format!(
                        "toml error: {toml_err}; json error: {json_err}"
                    ),
                }
            })
        })
    }

    /// Resolve the collation locale: explicit config value, then the process
    /// environment, then the root locale.
    ///
    /// An explicit locale that does not parse is an error. An environment
    /// locale that does not parse is skipped with a warning.
    pub fn resolve_locale(&self) -> Result<(Locale, LocaleSource)> {
        if let Some(tag) =
            self.locale.as_deref().map(str::trim).filter(|t| !t.is_empty())
        {
            let locale: Locale =
                tag.parse().map_err(|err| OrderingError::InvalidLocale {
                    locale: tag.to_owned(),
                    reason: format!("{err}"),
                })?;
            return Ok((locale, LocaleSource::Config));
        }

        // The first variable that is set decides, as POSIX does.
        if let Some((var, raw)) = LOCALE_ENV_VARS.iter().find_map(|var| {
            env::var(var)
                .ok()
                .filter(|raw| !raw.trim().is_empty())
                .map(|raw| (*var, raw))
        }) && let Some(tag) = normalize_posix_locale(&raw)
        {
            match tag.parse::<Locale>() {
                Ok(locale) => return Ok((locale, LocaleSource::Env(var))),
                Err(err) => {
                    warn!(
                        variable = var,
                        value = %raw,
                        error = %err,
                        "ignoring unusable environment locale"
                    );
                }
            }
        }

        Ok((Locale::UNKNOWN, LocaleSource::Root))
    }

    /// Build the shared name collation this configuration describes.
    pub fn build_collation(&self) -> Result<NameCollation> {
        let (locale, _) = self.resolve_locale()?;
        NameCollation::with_locale(locale, self.strength)
    }
}

/// Turn a POSIX locale such as `en_US.UTF-8@euro` into a BCP-47 tag
/// (`en-US`). Returns `None` for empty values and for `C`/`POSIX`, which
/// mean "no particular language".
pub fn normalize_posix_locale(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let base = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or(trimmed)
        .trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
