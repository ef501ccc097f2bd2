// crates/infra/src/filesystem.rs
use std::{
    borrow::Cow,
    io,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use chrono::{DateTime, Utc};
use dir_count_ports::filesystem::{DirectoryWalker, WalkedEntry};
use dir_count_shared_kernel::{DirCountError, EntryMeta, EntryType, Result, Visit};
use log::debug;
use walkdir::{DirEntry, WalkDir};

use crate::{config::WalkOptions, platform::classify};

/// Filesystem adapter implementing the `DirectoryWalker` port with `walkdir`.
///
/// Traversal is single-threaded and depth-first. Any unreadable directory,
/// vanished entry or symlink loop aborts the walk.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkdirWalker {
    options: WalkOptions,
}

impl WalkdirWalker {
    pub fn new(options: WalkOptions) -> Self {
        Self { options }
    }
}

impl DirectoryWalker for WalkdirWalker {
    fn walk(
        &self,
        root: &Path,
        visitor: &mut dyn FnMut(&dyn WalkedEntry) -> Result<Visit>,
    ) -> Result<()> {
        debug!(
            "walking {} (follow_links={}, same_file_system={})",
            root.display(),
            self.options.follow_links,
            self.options.same_file_system
        );

        let mut it = WalkDir::new(root)
            .min_depth(1)
            .follow_links(self.options.follow_links)
            .same_file_system(self.options.same_file_system)
            .into_iter();

        while let Some(next) = it.next() {
            let entry = WalkdirEntry(next.map_err(|err| traversal_error(err, root))?);
            // skip_current_dir on a non-directory would skip its siblings
            if visitor(&entry)?.prunes() && entry.0.file_type().is_dir() {
                it.skip_current_dir();
            }
        }
        Ok(())
    }
}

struct WalkdirEntry(DirEntry);

impl WalkedEntry for WalkdirEntry {
    fn path(&self) -> &Path {
        self.0.path()
    }

    fn depth(&self) -> usize {
        self.0.depth()
    }

    fn file_name(&self) -> Cow<'_, str> {
        self.0.file_name().to_string_lossy()
    }

    fn entry_type(&self) -> EntryType {
        classify(self.0.file_type())
    }

    fn metadata(&self) -> Result<EntryMeta> {
        let metadata = self
            .0
            .metadata()
            .map_err(|err| traversal_error(err, self.path()))?;
        let modified = metadata.modified().map_err(|source| DirCountError::TraversalFailed {
            path: self.path().to_path_buf(),
            source,
        })?;
        Ok(EntryMeta {
            size: metadata.len(),
            modified: modified_at(modified),
        })
    }
}

/// Convert an mtime, clamping instants chrono cannot represent to its range.
fn modified_at(stamp: SystemTime) -> DateTime<Utc> {
    match stamp.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, after.subsec_nanos()))
            .unwrap_or(DateTime::<Utc>::MAX_UTC),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).ok().map(|secs| -secs);
            let (secs, nanos) = match before.subsec_nanos() {
                0 => (secs, 0),
                nanos => (secs.and_then(|s| s.checked_sub(1)), 1_000_000_000 - nanos),
            };
            secs.and_then(|secs| DateTime::from_timestamp(secs, nanos))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        }
    }
}

fn traversal_error(err: walkdir::Error, fallback: &Path) -> DirCountError {
    let path = err
        .path()
        .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);
    DirCountError::TraversalFailed {
        path,
        source: io::Error::from(err),
    }
}
