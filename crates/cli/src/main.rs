use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{AnalyzeArgs, FetchDataArgs, SignalsArgs};

#[derive(Parser)]
#[command(name = "rae")]
#[command(about = "Quantitative research signals for a single stock", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "config/Config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute, normalize and summarize signals for a ticker
    Analyze(AnalyzeArgs),
    /// Download daily history from Yahoo Finance into a CSV file
    FetchData(FetchDataArgs),
    /// Compute raw signals from two local history files and print JSON
    Signals(SignalsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = rae_core::ConfigLoader::load_from(&cli.config)?;

    match cli.command {
        Commands::Analyze(args) => commands::run_analyze(args, &config).await?,
        Commands::FetchData(args) => commands::run_fetch_data(args, &config).await?,
        Commands::Signals(args) => commands::run_signals(args, &config).await?,
    }

    Ok(())
}
