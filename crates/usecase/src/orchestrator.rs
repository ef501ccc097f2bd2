use dir_count_domain::{EntryFacts, FilterSpec};
use dir_count_ports::filesystem::{DirectoryWalker, WalkedEntry};
use dir_count_shared_kernel::{Result, Visit};
use log::{debug, warn};

use crate::dto::CountEntriesOutput;

/// Counts the entries below a [`FilterSpec`] root that pass all of its filters.
pub struct CountEntries<'a> {
    walker: &'a dyn DirectoryWalker,
}

impl<'a> CountEntries<'a> {
    pub fn new(walker: &'a dyn DirectoryWalker) -> Self {
        Self { walker }
    }

    /// Walk once and tally. No partial result is returned on error.
    ///
    /// # Errors
    /// Returns the first traversal or metadata error.
    pub fn run(&self, spec: &FilterSpec) -> Result<CountEntriesOutput> {
        let root = spec.root();
        debug!(
            "counting entries under {} (max depth {:?}, size {:?}, age {:?})",
            root.display(),
            spec.max_depth(),
            spec.size(),
            spec.age()
        );

        let mut output = CountEntriesOutput::default();
        let result = self.walker.walk(root, &mut |entry: &dyn WalkedEntry| {
            let visit = visit_entry(spec, entry)?;
            output.visited += 1;
            match visit {
                Visit::Count => output.count.increment(),
                Visit::PruneSubtree => output.pruned += 1,
                Visit::Skip => {}
            }
            Ok(visit)
        });

        if let Err(err) = result {
            warn!("walk of {} aborted: {err}", root.display());
            return Err(err);
        }

        debug!(
            "counted {} of {} entries under {} ({} subtrees pruned)",
            output.count.value(),
            output.visited,
            root.display(),
            output.pruned
        );
        Ok(output)
    }
}

fn visit_entry(spec: &FilterSpec, entry: &dyn WalkedEntry) -> Result<Visit> {
    let name = entry.file_name();
    let facts = EntryFacts {
        depth: entry.depth(),
        name: &name,
        entry_type: entry.entry_type(),
    };
    spec.visit(&facts, || entry.metadata())
}
