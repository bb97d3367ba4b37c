//! SignalStore port - ordered raw signal records per region.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, RegionName};
use crate::domain::signals::SignalRecord;

/// Port for reading and appending raw signal records.
///
/// Implementations must ensure:
/// - Records of a region come back in append order
/// - `list_regions` is sorted and only names regions with at least one record
/// - Stored records are never mutated
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// All records of a region in append order; empty when unknown.
    async fn region_signals(&self, region: &RegionName) -> Result<Vec<SignalRecord>, DomainError>;

    /// Distinct regions with at least one record, sorted.
    async fn list_regions(&self) -> Result<Vec<RegionName>, DomainError>;

    /// Appends one validated record.
    async fn append(&self, record: SignalRecord) -> Result<(), DomainError>;
}
