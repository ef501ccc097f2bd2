// crates/shared-kernel/src/value_objects/entry_meta.rs
use chrono::{DateTime, Utc};

/// Size and modification time of a walked entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMeta {
    pub size: u64,
    pub modified: DateTime<Utc>,
}
