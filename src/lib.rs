//! Tasktrack: a command-line project and task tracker.
//!
//! Projects and tasks live in one local JSON document that is loaded in
//! full, changed in memory, and written back in full on every mutation.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Records and lifecycle rules with no I/O
//! - **Ports**: The dataset store contract
//! - **Adapters**: JSON file and in-memory stores
//! - **Services**: Project and task repositories built on an injected store
//!
//! # Modules
//!
//! - [`tracker`]: Domain, store and repositories
//! - [`cli`]: Command definitions, configuration and dispatch

pub mod cli;
pub mod tracker;
