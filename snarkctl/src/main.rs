//! `snarkctl`: order a JSON torrent list by a transfer-list column.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use snark_core::ordering::{CollationStrength, ColumnSelector};
use snarkctl::{OutputFormat, SortOptions, run_sort, write_columns};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "snarkctl", about = "Order torrent lists by column")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a JSON array of torrents
    Sort {
        /// JSON input file; stdin when omitted or `-`
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Signed column selector, e.g. 5 (size) or -4 (ETA, reversed)
        #[arg(long, short, default_value = "1", allow_negative_numbers = true)]
        column: ColumnSelector,
        /// Ordering config file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Collation locale, e.g. sv-SE
        #[arg(long)]
        locale: Option<String>,
        #[arg(long, value_enum)]
        strength: Option<StrengthArg>,
        #[arg(long, value_enum, default_value = "json")]
        format: FormatArg,
    },
    /// List column ids
    Columns,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrengthArg {
    Primary,
    Secondary,
    Tertiary,
}

impl From<StrengthArg> for CollationStrength {
    fn from(val: StrengthArg) -> Self {
        match val {
            StrengthArg::Primary => CollationStrength::Primary,
            StrengthArg::Secondary => CollationStrength::Secondary,
            StrengthArg::Tertiary => CollationStrength::Tertiary,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Json,
    Names,
}

impl From<FormatArg> for OutputFormat {
    fn from(val: FormatArg) -> Self {
        match val {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Names => OutputFormat::Names,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Sort {
            input,
            column,
            config,
            locale,
            strength,
            format,
        } => {
            let options = SortOptions {
                input,
                selector: column,
                config,
                locale,
                strength: strength.map(Into::into),
                format: format.into(),
            };
            run_sort(&options, &mut out)
        }
        Command::Columns => write_columns(&mut out),
    }
}
