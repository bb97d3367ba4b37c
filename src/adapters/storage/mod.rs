//! Storage Adapters
//!
//! Implementations of the `DecisionRecordStore` port.
//!
//! - **FileRecordStore** - JSON snapshots on disk, one directory per region
//! - **InMemoryRecordStore** - Snapshots in memory

mod file_record_store;
mod in_memory_record_store;

pub use file_record_store::FileRecordStore;
pub use in_memory_record_store::InMemoryRecordStore;
