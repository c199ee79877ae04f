use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trend_scout::analytics::report::analyze;
use trend_scout::config::Config;
use trend_scout::ingest::load_items;

#[derive(Parser)]
#[command(
    name = "trend-scout",
    version,
    about = "Windowed trend analytics for classified newsletter topics",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze classified items and emit the trend report
    Analyze {
        /// Path to the JSON items file
        #[arg(short, long)]
        input: PathBuf,

        /// Reference date for window selection (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        now: Option<NaiveDate>,

        /// Report output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON report
        #[arg(long, default_value = "false")]
        pretty: bool,

        /// Optional TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse an items file and report its shape without analyzing
    Validate {
        /// Path to the JSON items file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    match cli.command {
        Commands::Analyze {
            input,
            now,
            output,
            pretty,
            config,
        } => {
            tracing::info!(
                input = %input.display(),
                now = ?now,
                "Starting analyze command"
            );
            run_analyze(input, now, output, pretty, config)?;
        }

        Commands::Validate { input } => {
            tracing::info!(input = %input.display(), "Starting validate command");
            run_validate(input)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("trend_scout=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("trend_scout=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

fn run_analyze(
    input: PathBuf,
    now: Option<NaiveDate>,
    output: Option<PathBuf>,
    pretty: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::from_file(&path)?,
        None => Config::from_env()?,
    };
    config.validate()?;

    let items = load_items(&input)
        .with_context(|| format!("Failed to load items from {}", input.display()))?;

    // The engine takes "now" explicitly; only the CLI boundary may consult
    // the wall clock
    let now = now.unwrap_or_else(|| Utc::now().date_naive());

    tracing::info!(items = items.len(), now = %now, "Running trend analysis");

    let report = analyze(&items, now);

    let pretty = pretty || config.report.pretty;
    let serialized = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match output.or(config.report.output_path) {
        Some(path) => {
            std::fs::write(&path, serialized)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!(output = %path.display(), "Report written");
        }
        None => println!("{serialized}"),
    }

    Ok(())
}

fn run_validate(input: PathBuf) -> Result<()> {
    let items = load_items(&input)
        .with_context(|| format!("Failed to load items from {}", input.display()))?;

    let mut dated: Vec<&str> = items
        .iter()
        .map(|item| item.date_key())
        .filter(|d| !d.is_empty())
        .collect();
    dated.sort_unstable();

    let tagged = items
        .iter()
        .filter(|item| !item.matched_categories_tags.is_empty())
        .count();

    println!("Items: {}", items.len());
    println!("  With tags: {tagged}");
    println!("  Undated: {}", items.len() - dated.len());
    if let (Some(first), Some(last)) = (dated.first(), dated.last()) {
        println!("  Date span: {first} .. {last}");
    }

    Ok(())
}
