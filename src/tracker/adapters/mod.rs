//! Adapter implementations for tracker ports.

pub mod json_file;
pub mod memory;
