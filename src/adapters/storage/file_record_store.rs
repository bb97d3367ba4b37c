//! File-based Decision Record Store
//!
//! Writes every snapshot as a pretty-printed JSON file, grouped per region:
//! `<base>/<region-slug>/<kind>-<timestamp>.json`.
//!
//! Distinct region names can share a slug ("Zone A" and "zone-a"), so a
//! directory may hold snapshots of several regions. Readers filter on the
//! exact region stored in each snapshot.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::approval::ApprovalRecord;
use crate::domain::foundation::{RegionName, Timestamp};
use crate::domain::governance::GovernanceResult;
use crate::domain::risk::RiskAssessment;
use crate::ports::{DecisionRecordStore, StoreError};

const RISK_KIND: &str = "risk";
const GOVERNANCE_KIND: &str = "governance";
const APPROVAL_KIND: &str = "approval";

/// Governance verdict as written to disk, with its region and time.
#[derive(Debug, Serialize)]
struct GovernanceSnapshot<'a> {
    region: &'a RegionName,
    recorded_at: Timestamp,
    #[serde(flatten)]
    result: &'a GovernanceResult,
}

/// File-based storage for decision snapshots
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    base_path: PathBuf,
}

impl FileRecordStore {
    /// Create a new file store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileRecordStore::new("./data/decisions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn region_dir(&self, region: &RegionName) -> PathBuf {
        self.base_path.join(region.slug())
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), StoreError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))
    }

    /// Writes `value` to a fresh file; never overwrites an earlier snapshot.
    async fn write_snapshot<T: Serialize + ?Sized>(
        &self,
        region: &RegionName,
        kind: &str,
        at: Timestamp,
        value: &T,
    ) -> Result<PathBuf, StoreError> {
        let dir = self.region_dir(region);
        self.ensure_dir(&dir).await?;

        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;

        let stamp = at.file_stamp();
        let mut attempt = 0u32;
        loop {
            let name = if attempt == 0 {
                format!("{}-{}.json", kind, stamp)
            } else {
                format!("{}-{}-{}.json", kind, stamp, attempt)
            };
            let path = dir.join(name);

            match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(mut file) => {
                    file.write_all(&json)
                        .await
                        .map_err(|e| StoreError::IoError(e.to_string()))?;
                    file.flush()
                        .await
                        .map_err(|e| StoreError::IoError(e.to_string()))?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(StoreError::IoError(e.to_string())),
            }
        }
    }

    /// Loads every snapshot of `kind` for a region, in file name order.
    async fn read_snapshots<T: DeserializeOwned>(
        &self,
        region: &RegionName,
        kind: &str,
    ) -> Result<Vec<T>, StoreError> {
        let dir = self.region_dir(region);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let prefix = format!("{}-", kind);
        let mut paths = Vec::new();
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&prefix) && name.ends_with(".json") {
                paths.push(entry.path());
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let json = fs::read_to_string(&path)
                .await
                .map_err(|e| StoreError::IoError(e.to_string()))?;
            let record = serde_json::from_str(&json)
                .map_err(|e| StoreError::DeserializationFailed(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }

    /// Risk snapshots of a region, in file name order.
    pub async fn risk_snapshots(
        &self,
        region: &RegionName,
    ) -> Result<Vec<RiskAssessment>, StoreError> {
        let mut snapshots: Vec<RiskAssessment> = self.read_snapshots(region, RISK_KIND).await?;
        snapshots.retain(|s| s.region == *region);
        Ok(snapshots)
    }
}

#[async_trait]
impl DecisionRecordStore for FileRecordStore {
    async fn save_risk_assessment(&self, assessment: &RiskAssessment) -> Result<(), StoreError> {
        self.write_snapshot(&assessment.region, RISK_KIND, Timestamp::now(), assessment)
            .await?;
        Ok(())
    }

    async fn save_governance(
        &self,
        region: &RegionName,
        result: &GovernanceResult,
    ) -> Result<(), StoreError> {
        let snapshot = GovernanceSnapshot {
            region,
            recorded_at: Timestamp::now(),
            result,
        };
        self.write_snapshot(region, GOVERNANCE_KIND, snapshot.recorded_at, &snapshot)
            .await?;
        Ok(())
    }

    async fn save_approval(&self, approval: &ApprovalRecord) -> Result<(), StoreError> {
        self.write_snapshot(&approval.region, APPROVAL_KIND, approval.approved_at, approval)
            .await?;
        Ok(())
    }

    async fn list_approvals(&self, region: &RegionName) -> Result<Vec<ApprovalRecord>, StoreError> {
        let mut approvals: Vec<ApprovalRecord> = self.read_snapshots(region, APPROVAL_KIND).await?;
        approvals.retain(|a| a.region == *region);
        approvals.sort_by_key(|a| a.approved_at);
        Ok(approvals)
    }
}
