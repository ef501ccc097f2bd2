//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory traversal with per-entry pruning
//!
//! The use case layer drives a [`filesystem::DirectoryWalker`] without knowing
//! which traversal library sits behind it.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
