//! JSON file adapter for the dataset store port.

mod codec;
mod store;

pub use store::JsonFileStore;
