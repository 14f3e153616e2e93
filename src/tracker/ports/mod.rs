//! Port contracts for tracker persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the repositories.

pub mod store;

pub use store::{DatasetStore, StoreError, StoreResult};
