//! Library half of `snarkctl`: load a torrent list, order it, write it back.
#![allow(missing_docs)]

use anyhow::{Context, Result};
use snark_core::ordering::{
    CollationStrength, ColumnSelector, OrderingEngine, SortColumn,
    sort_torrents,
};
use snark_core::{OrderingConfig, OrderingConfigSource};
use snark_model::Torrent;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How sorted torrents are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, same shape as the input.
    #[default]
    Json,
    /// One base name per line.
    Names,
}

#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    pub selector: ColumnSelector,
    /// Explicit config file; otherwise the environment is consulted.
    pub config: Option<PathBuf>,
    pub locale: Option<String>,
    pub strength: Option<CollationStrength>,
    pub format: OutputFormat,
}

/// Resolve the effective ordering config: file or environment, then
/// command line overrides.
pub fn resolve_config(options: &SortOptions) -> Result<OrderingConfig> {
    let (mut config, source) = match options.config.as_deref() {
        Some(path) => (
            OrderingConfig::load_from_file(path)?,
            OrderingConfigSource::File(path.to_path_buf()),
        ),
        None => OrderingConfig::load_from_env()?,
    };
    debug!(?source, "ordering config loaded");

    if let Some(locale) = options.locale.clone() {
        config.locale = Some(locale);
    }
    if let Some(strength) = options.strength {
        config.strength = strength;
    }
    Ok(config)
}

pub fn read_torrents(input: Option<&Path>) -> Result<Vec<Torrent>> {
    let raw = match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| {
                format!("failed to read torrents from {}", path.display())
            })?,
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read torrents from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("input is not a JSON array of torrents")
}

pub fn write_torrents<W: Write>(
    out: &mut W,
    torrents: &[Torrent],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, torrents)?;
            writeln!(out)?;
        }
        OutputFormat::Names => {
            for torrent in torrents {
                writeln!(out, "{}", torrent.base_name)?;
            }
        }
    }
    Ok(())
}

/// Read, sort and write in one go.
pub fn run_sort<W: Write>(options: &SortOptions, out: &mut W) -> Result<()> {
    let config = resolve_config(options)?;
    let engine = OrderingEngine::new(&config)?;
    let mut torrents = read_torrents(options.input.as_deref())?;

    let comparator = engine.comparator(options.selector);
    sort_torrents(&mut torrents, &comparator);
    info!(
        count = torrents.len(),
        column = %comparator.column(),
        direction = ?comparator.direction(),
        "sorted torrents"
    );

    write_torrents(out, &torrents, options.format)
}

/// `id  name` lines for every sortable column.
pub fn write_columns<W: Write>(out: &mut W) -> Result<()> {
    for column in SortColumn::ALL {
        writeln!(out, "{:>2}  {}", column.id(), column)?;
    }
    Ok(())
}
