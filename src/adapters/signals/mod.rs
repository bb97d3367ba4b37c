//! Signal store adapters.

mod in_memory_signal_store;

pub use in_memory_signal_store::InMemorySignalStore;
