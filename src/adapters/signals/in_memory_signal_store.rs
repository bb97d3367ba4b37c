//! In-memory signal store.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, RegionName};
use crate::domain::signals::SignalRecord;
use crate::ports::SignalStore;

/// Append-only record store keyed by region.
///
/// Reads return a cloned snapshot, so a pipeline pass never observes a
/// concurrent append halfway through.
#[derive(Debug, Clone, Default)]
pub struct InMemorySignalStore {
    records: Arc<RwLock<BTreeMap<RegionName, Vec<SignalRecord>>>>,
}

impl InMemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `records`, kept in the given order.
    pub fn with_records(records: impl IntoIterator<Item = SignalRecord>) -> Self {
        let mut map: BTreeMap<RegionName, Vec<SignalRecord>> = BTreeMap::new();
        for record in records {
            map.entry(record.region.clone()).or_default().push(record);
        }
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl SignalStore for InMemorySignalStore {
    async fn region_signals(&self, region: &RegionName) -> Result<Vec<SignalRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(region)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_regions(&self) -> Result<Vec<RegionName>, DomainError> {
        Ok(self.records.read().await.keys().cloned().collect())
    }

    async fn append(&self, record: SignalRecord) -> Result<(), DomainError> {
        self.records
            .write()
            .await
            .entry(record.region.clone())
            .or_default()
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signals::{DataType, SourceType};

    fn record(region: &str, value: f64) -> SignalRecord {
        SignalRecord::numeric(
            RegionName::new(region).unwrap(),
            SourceType::Weather,
            DataType::Rainfall,
            value,
            0.9,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn regions_are_listed_sorted() {
        let store = InMemorySignalStore::new();
        store.append(record("Riverside", 10.0)).await.unwrap();
        store.append(record("Coastal Zone A", 20.0)).await.unwrap();
        store.append(record("Industrial Park", 30.0)).await.unwrap();

        let regions: Vec<String> = store
            .list_regions()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.to_string())
            .collect();
        assert_eq!(regions, vec!["Coastal Zone A", "Industrial Park", "Riverside"]);
    }

    #[tokio::test]
    async fn records_keep_append_order() {
        let store = InMemorySignalStore::with_records(vec![
            record("Riverside", 1.0),
            record("Riverside", 2.0),
            record("Riverside", 3.0),
        ]);

        let values: Vec<f64> = store
            .region_signals(&RegionName::new("Riverside").unwrap())
            .await
            .unwrap()
            .iter()
            .filter_map(|r| r.value.as_number())
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn unknown_region_is_empty_not_an_error() {
        let store = InMemorySignalStore::new();
        let records = store
            .region_signals(&RegionName::new("Nowhere").unwrap())
            .await
            .unwrap();
        assert!(records.is_empty());
        assert_eq!(store.record_count().await, 0);
    }
}
