//! Signal ingestion handlers.

mod ingest_signal;

pub use ingest_signal::{IngestSignalCommand, IngestSignalHandler, IngestSignalResult};
