pub mod lint;

use clap::Parser;
use pslint::OutputFormat;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "pslint")]
#[command(author, version, about = "Lint a Public Suffix List", long_about = None)]
#[command(
    after_help = "Examples:\n  pslint --file public_suffix_list.dat\n  \
                  cat public_suffix_list.dat | pslint --fail-first=false"
)]
pub struct Cli {
    /// Read the list from FILE instead of stdin
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Stop checking on first problem
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub fail_fast: Option<bool>,

    /// Stop checking a line on its first problem [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub fail_first: Option<bool>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the enabled checks in the order they run, then exit
    #[arg(long)]
    pub list_checks: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Force colored output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose (info-level) logging to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug-level logging to stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Initialize tracing based on CLI flags. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
