use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;

use keypad_cli::{
    KeypadConfig,
    commands::{self, Seed},
    logging,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Numeric keypad amount entry.
///
/// Replays keypresses the way the expense form's keypad handles them, and
/// formats amounts the way the transaction list shows them.
#[derive(Debug, Parser)]
#[command(name = "amount-keypad")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with locale and entry settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Cap on digits typed after the decimal separator (overrides the config file)
    #[arg(long, global = true)]
    max_minor_digits: Option<u32>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    /// Also append log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Press keys in order and show the amount after each one.
    ///
    /// Keys are digits, the locale decimal separator, and C to clear.
    Press {
        /// Key symbols, e.g. "500,5"
        keys: String,

        /// Major units of an existing amount to edit
        #[arg(long)]
        major: Option<u64>,

        /// Minor units of an existing amount to edit (needs --major)
        #[arg(long, requires = "major")]
        minor: Option<u64>,
    },

    /// Format a decimal amount (written with a '.' point) as currency
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Split a receipt subtotal into the stored main and decimal amounts
    Split { subtotal: Decimal },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => KeypadConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => KeypadConfig::default(),
    }
    .with_max_minor_digits(cli.max_minor_digits);
    debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Press { keys, major, minor } => {
            commands::run_press(&config, &keys, Seed { major, minor }, &mut out)
        }
        Command::Format { amount } => commands::run_format(&config, amount, &mut out),
        Command::Split { subtotal } => commands::run_split(&config, subtotal, &mut out),
    }
}
