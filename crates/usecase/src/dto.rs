use dir_count_shared_kernel::EntryCount;

/// Tallies of one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountEntriesOutput {
    /// Entries that passed every filter.
    pub count: EntryCount,
    /// Entries handed to the filter, counted or not.
    pub visited: u64,
    /// Directories whose subtree was not descended into.
    pub pruned: u64,
}
