//! In-memory adapters.

mod dataset_store;

pub use dataset_store::InMemoryDatasetStore;
