// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod filesystem;
pub mod platform;

pub use config::{WalkOptions, WalkOptionsBuilder};
pub use filesystem::WalkdirWalker;
