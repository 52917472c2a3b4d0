//! FONASA registry service
//!
//! Serves the HTTP API, or ingests a cut file from disk.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fonasa_registry::config::Config;
use fonasa_registry::core::ingest::BatchIngestor;
use fonasa_registry::server;
use fonasa_registry::storage::StorageLayer;
use fonasa_registry::utils::logging::init_tracing;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "registry-server", version, about)]
struct Cli {
    /// Configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "REGISTRY_CONFIG",
        default_value = "config/registry.yaml"
    )]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Ingest a cut file from disk and print the resulting batch
    Ingest {
        /// Path of the CSV file
        path: PathBuf,
    },
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the context chain readable
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    init_tracing(config.logging());

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::builder::run_server(config).await?,
        Command::Ingest { path } => ingest_file(&config, &path).await?,
        Command::Migrate => {
            let storage = StorageLayer::new(config.storage()).await?;
            storage.migrate().await?;
            info!("Database is up to date");
        }
    }
    Ok(())
}

async fn ingest_file(config: &Config, path: &Path) -> anyhow::Result<()> {
    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let storage = StorageLayer::new(config.storage()).await?;
    let ingestor = BatchIngestor::new(storage.store(), config.ingest().clone());
    let batch = ingestor.ingest(&filename, &content).await?;

    println!("{}", serde_json::to_string_pretty(&batch)?);
    Ok(())
}
