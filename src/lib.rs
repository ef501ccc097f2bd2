//! # dir_count
//!
//! The `vfs.dir.count` metric: count the entries below a directory that pass
//! a set of positional filters (name patterns, entry types, depth, size and
//! modification age).
//!
//! ```no_run
//! let txt_files = dir_count::count(&["/var/log", r"\.txt$"])?;
//! # Ok::<(), dir_count::DirCountError>(())
//! ```
//!
//! The workspace is layered:
//! - `dir_count_shared_kernel`: errors and value objects
//! - `dir_count_domain`: parameter parsing and the filter rules
//! - `dir_count_ports`: the directory walker abstraction
//! - `dir_count_usecase`: one counting run
//! - `dir_count_infra`: the `walkdir` adapter and walk options

#![allow(clippy::multiple_crate_versions)]

pub use dir_count_domain::{FilterSpec, parse_params};
pub use dir_count_infra::{WalkOptions, WalkOptionsBuilder, WalkdirWalker};
pub use dir_count_shared_kernel::{DirCountError, ParamError, ParamSlot, Result};
use dir_count_usecase::CountEntries;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key under which the agent registers this metric.
pub const METRIC_KEY: &str = "vfs.dir.count";

const METRICS: &[(&str, &str)] = &[(METRIC_KEY, "Directory entry count.")];

/// Registered `(key, description)` pairs.
pub fn metrics() -> &'static [(&'static str, &'static str)] {
    METRICS
}

/// Count with the default walk options (links not followed).
///
/// # Errors
/// Parameter errors are reported before any filesystem access; traversal
/// errors abort the count.
pub fn count<S: AsRef<str>>(params: &[S]) -> Result<u64> {
    count_with(params, &WalkOptions::default())
}

/// # Errors
/// See [`count`].
pub fn count_with<S: AsRef<str>>(params: &[S], options: &WalkOptions) -> Result<u64> {
    let spec = parse_params(params)?;
    let walker = WalkdirWalker::new(*options);
    let output = CountEntries::new(&walker).run(&spec)?;
    Ok(output.count.value())
}

/// Dispatch a metric request by key.
///
/// # Errors
/// [`DirCountError::UnsupportedMetric`] for any key but [`METRIC_KEY`],
/// otherwise as [`count`].
pub fn export<S: AsRef<str>>(key: &str, params: &[S]) -> Result<u64> {
    export_with(key, params, &WalkOptions::default())
}

/// # Errors
/// See [`export`].
pub fn export_with<S: AsRef<str>>(key: &str, params: &[S], options: &WalkOptions) -> Result<u64> {
    match key {
        METRIC_KEY => count_with(params, options),
        other => Err(DirCountError::UnsupportedMetric(other.to_string())),
    }
}
