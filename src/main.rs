//! Command-line entry point.
//!
//! ```text
//! flood-sentinel <signals.json>
//! ```
//!
//! Reads a JSON array of signal records, ingests them, and prints the
//! decision package of every region as JSON on stdout.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use flood_sentinel::adapters::{FileRecordStore, InMemoryAuditLog, InMemoryRecordStore, InMemorySignalStore};
use flood_sentinel::application::{BuildDecisionPackagesHandler, IngestSignalCommand, IngestSignalHandler};
use flood_sentinel::config::{AppConfig, ConfigError};
use flood_sentinel::domain::foundation::{CommandMetadata, DomainError};
use flood_sentinel::domain::signals::IngestionError;
use flood_sentinel::ports::DecisionRecordStore;
use flood_sentinel::telemetry;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: flood-sentinel <signals.json>")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse signal records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("record {index} rejected: {source}")]
    Ingest {
        index: usize,
        source: IngestionError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

async fn run() -> Result<(), CliError> {
    let path = env::args_os().nth(1).map(PathBuf::from).ok_or(CliError::Usage)?;

    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    if let Err(err) = telemetry::init_tracing(&config.telemetry) {
        eprintln!("tracing already initialised: {}", err);
    }

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
    let commands: Vec<IngestSignalCommand> = serde_json::from_str(&raw)?;

    let signals = Arc::new(InMemorySignalStore::new());
    let audit = Arc::new(InMemoryAuditLog::new());
    let records: Arc<dyn DecisionRecordStore> = match &config.storage.snapshot_dir {
        Some(dir) => Arc::new(FileRecordStore::new(dir)),
        None => Arc::new(InMemoryRecordStore::new()),
    };
    let metadata = CommandMetadata::correlated().with_source("cli");

    let ingest = IngestSignalHandler::new(signals.clone(), audit.clone());
    for (index, cmd) in commands.into_iter().enumerate() {
        ingest
            .handle(cmd, metadata.clone())
            .await
            .map_err(|source| CliError::Ingest { index, source })?;
    }

    let packages = BuildDecisionPackagesHandler::new(
        Arc::new(config.pipeline()),
        signals,
        records,
        audit.clone(),
    )
    .handle(metadata)
    .await?;

    println!("{}", serde_json::to_string_pretty(&packages)?);

    let summary = audit.summary().await;
    info!(
        regions = packages.len(),
        audit_events = summary.total_events,
        "Decision packages ready for human review"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "flood-sentinel failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
