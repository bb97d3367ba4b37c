//! Adapters - Implementations of port interfaces.
//!
//! - `signals` - Signal store implementations
//! - `audit` - Audit sink implementations
//! - `storage` - Decision record store implementations (memory, JSON files)

pub mod audit;
pub mod signals;
pub mod storage;

pub use audit::InMemoryAuditLog;
pub use signals::InMemorySignalStore;
pub use storage::{FileRecordStore, InMemoryRecordStore};
