//! bondprice CLI - bullet bond prices and yield sensitivity from the shell
//!
//! # Commands
//!
//! - `bondprice price` - price one bond at each configured yield
//! - `bondprice sweep` - price series across yields for several maturities
//!
//! Parameters come from built-in defaults, then an optional TOML file
//! (`--config`), then command-line flags.

use std::io::{self, Write};
use std::path::PathBuf;

use bondprice::{Frequency, SweepPolicy};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use config::{AppConfig, Overrides};
use output::OutputFormat;

pub use error::{CliError, Result};

/// Fixed-rate bullet bond pricing
#[derive(Parser)]
#[command(name = "bondprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Face amount
    #[arg(long, global = true)]
    face: Option<f64>,

    /// Annual coupon rate as a decimal (0.10 = 10%)
    #[arg(long, global = true)]
    coupon: Option<f64>,

    /// Coupon frequency (annual, semiannual, quarterly, monthly, or a count)
    #[arg(long, global = true)]
    frequency: Option<Frequency>,

    /// Discounting convention (compound-periodic, simple-accrual, 30/360, Actual/Actual)
    #[arg(long, global = true)]
    convention: Option<String>,

    /// Market yields as decimals, comma separated
    #[arg(long, global = true, value_delimiter = ',', allow_hyphen_values = true)]
    yields: Option<Vec<f64>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one bond at each yield
    Price {
        /// Years to maturity
        #[arg(short, long)]
        maturity: Option<f64>,
    },

    /// Price series across yields, one per maturity
    Sweep {
        /// Years to maturity, comma separated
        #[arg(short, long, value_delimiter = ',')]
        maturities: Option<Vec<f64>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Drop unpriceable points instead of failing
        #[arg(long)]
        skip_unpriceable: bool,

        /// Price every point on the calling thread
        #[arg(long)]
        sequential: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply(Overrides {
        face_amount: cli.face,
        coupon_rate: cli.coupon,
        frequency: cli.frequency,
        convention: cli.convention,
    });
    if let Some(yields) = cli.yields {
        config.sweep.yields = yields;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Price { maturity } => {
            if let Some(m) = maturity {
                config.bond.maturity_years = m;
            }
            commands::price::run(&config, &mut out)?;
        }
        Commands::Sweep {
            maturities,
            format,
            skip_unpriceable,
            sequential,
        } => {
            if let Some(m) = maturities {
                config.sweep.maturities = m;
            }
            if skip_unpriceable {
                config.sweep.policy = SweepPolicy::SkipUnpriceable;
            }
            if sequential {
                config.sweep.parallel = false;
            }
            commands::sweep::run(&config, format, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
