//! bizval CLI binary.
//!
//! Provides a command-line interface for the bizval valuation engine.

mod cmd;
mod format;
mod intake;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use bizval::IndustryTrack;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bizval")]
#[command(about = "Small-business valuation and saleability scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Engine configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show detailed output and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported industries and the track each routes to
    Industries {
        /// Filter by track (trade, ecommerce, generic)
        #[arg(short, long)]
        track: Option<IndustryTrack>,
    },

    /// Appraise a stored questionnaire submission
    Valuate {
        /// Path to the intake JSON file
        intake: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Benchmark narrative, overriding the one in the intake
        #[arg(short, long)]
        benchmark: Option<String>,
    },

    /// Score saleability from margin, recurrence and owner involvement
    Saleability {
        /// Net profit margin in percent
        #[arg(short, long, allow_negative_numbers = true)]
        margin: f64,

        /// Revenue is recurring or contracted
        #[arg(short, long)]
        recurring: bool,

        /// Owner involvement (Low, Medium, High)
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// Compare a multiple against an industry benchmark
    Benchmark {
        /// Multiple applied to the business
        #[arg(short, long)]
        multiple: f64,

        /// Benchmark narrative to extract the reference multiple from
        #[arg(short, long, required_unless_present = "reference")]
        narrative: Option<String>,

        /// Reference multiple given directly
        #[arg(short, long, conflicts_with = "narrative")]
        reference: Option<f64>,
    },
}

/// Output format for appraisal results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let appraiser = intake::load_appraiser(cli.config.as_deref())?;

    match cli.command {
        Commands::Industries { track } => {
            cmd::industries::list_industries(track, cli.verbose);
        }
        Commands::Valuate {
            intake,
            format,
            benchmark,
        } => {
            cmd::valuate::appraise_file(&appraiser, &intake, format, benchmark)?;
        }
        Commands::Saleability {
            margin,
            recurring,
            owner,
        } => {
            cmd::saleability::show_saleability(margin, recurring, owner.as_deref())?;
        }
        Commands::Benchmark {
            multiple,
            narrative,
            reference,
        } => {
            cmd::benchmark::show_benchmark(&appraiser, multiple, narrative, reference);
        }
    }

    Ok(())
}
