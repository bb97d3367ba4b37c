//! Snapshot storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where decision snapshots are written
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Directory for JSON snapshots; kept in memory when unset
    pub snapshot_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn is_persistent(&self) -> bool {
        self.snapshot_dir.is_some()
    }
}
