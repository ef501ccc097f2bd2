//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: drives a directory walker with a `FilterSpec`
//! - [`dto`]: result of one counting run
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::CountEntriesOutput;
pub use orchestrator::CountEntries;
