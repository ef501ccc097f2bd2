//! # Domain
//!
//! Filter model for `vfs.dir.count`.
//!
//! - [`parsers`]: single-value parsers (sizes, ages, depths, type lists, regexes)
//! - [`params`]: positional parameter list → [`FilterSpec`]
//! - [`config`]: the [`FilterSpec`] aggregate and its value objects
//!
//! Nothing in this crate touches the filesystem; metadata is supplied by the caller.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod params;
pub mod parsers;

pub use config::{AgeRange, EntryFacts, EntryTypes, FilterSpec, MaxDepth, NamePattern, SizeRange};
pub use params::{parse_params, parse_params_at};
