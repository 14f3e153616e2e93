//! Step definitions for the tracker workflow scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
