// crates/ports/src/filesystem.rs
use std::{borrow::Cow, path::Path};

use dir_count_shared_kernel::{EntryMeta, EntryType, Result, Visit};

/// One entry produced by a [`DirectoryWalker`].
pub trait WalkedEntry {
    fn path(&self) -> &Path;

    /// Levels below the walk root; direct children are at depth 1.
    fn depth(&self) -> usize;

    /// Base name, lossily converted when it is not valid UTF-8.
    fn file_name(&self) -> Cow<'_, str>;

    fn entry_type(&self) -> EntryType;

    /// Size and modification time. Links are only resolved when the walker
    /// itself follows them.
    ///
    /// # Errors
    /// Returns [`dir_count_shared_kernel::DirCountError::TraversalFailed`]
    /// when the entry cannot be stat'ed.
    fn metadata(&self) -> Result<EntryMeta>;
}

/// Port for depth-first traversal below a root directory.
///
/// The root itself is never passed to the visitor. A visitor returning
/// [`Visit::PruneSubtree`] for a directory stops descent into it; a visitor
/// error aborts the walk and is returned unchanged.
pub trait DirectoryWalker {
    /// # Errors
    /// Returns the first traversal error or the first visitor error.
    fn walk(
        &self,
        root: &Path,
        visitor: &mut dyn FnMut(&dyn WalkedEntry) -> Result<Visit>,
    ) -> Result<()>;
}
