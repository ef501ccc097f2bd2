use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use dir_count_shared_kernel::{EntryMeta, EntryType, Visit};
use log::trace;

use crate::config::{AgeRange, EntryTypes, MaxDepth, NamePattern, SizeRange};

/// What the walker knows about an entry before any metadata is read.
#[derive(Debug, Clone, Copy)]
pub struct EntryFacts<'a> {
    /// Levels below the root; direct children are at depth 1.
    pub depth: usize,
    /// Base name, never the full path.
    pub name: &'a str,
    pub entry_type: EntryType,
}

/// Every filter criterion of one `vfs.dir.count` invocation.
///
/// Built once per call by [`crate::parse_params`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub(crate) root: PathBuf,
    pub(crate) include_name: Option<NamePattern>,
    pub(crate) exclude_name: Option<NamePattern>,
    pub(crate) exclude_dir_name: Option<NamePattern>,
    pub(crate) max_depth: MaxDepth,
    pub(crate) include_types: EntryTypes,
    pub(crate) exclude_types: EntryTypes,
    pub(crate) size: SizeRange,
    pub(crate) age: AgeRange,
}

impl FilterSpec {
    /// Spec with no filters; the root is separator-terminated.
    pub fn new(root: &str) -> Self {
        Self {
            root: normalize_root(root),
            include_name: None,
            exclude_name: None,
            exclude_dir_name: None,
            max_depth: MaxDepth::Unlimited,
            include_types: EntryTypes::empty(),
            exclude_types: EntryTypes::empty(),
            size: SizeRange::default(),
            age: AgeRange::default(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn include_name(&self) -> Option<&NamePattern> {
        self.include_name.as_ref()
    }

    pub fn exclude_name(&self) -> Option<&NamePattern> {
        self.exclude_name.as_ref()
    }

    pub fn exclude_dir_name(&self) -> Option<&NamePattern> {
        self.exclude_dir_name.as_ref()
    }

    pub fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    pub fn include_types(&self) -> EntryTypes {
        self.include_types
    }

    pub fn exclude_types(&self) -> EntryTypes {
        self.exclude_types
    }

    pub fn size(&self) -> SizeRange {
        self.size
    }

    pub fn age(&self) -> AgeRange {
        self.age
    }

    /// Decide what to do with one entry.
    ///
    /// Rules run in a fixed order (depth, name, type, metadata) and the first
    /// rejecting rule wins. `metadata` is only called once the cheap rules have
    /// passed; its error aborts the decision.
    ///
    /// # Errors
    /// Returns the error produced by `metadata`.
    pub fn visit<E, F>(&self, facts: &EntryFacts<'_>, metadata: F) -> Result<Visit, E>
    where
        F: FnOnce() -> Result<EntryMeta, E>,
    {
        if let Some(rejected) = self.screen(facts) {
            return Ok(rejected);
        }

        let meta = metadata()?;
        if self.admits(&meta) {
            Ok(Visit::Count)
        } else {
            trace!("skip {}: size/age", facts.name);
            Ok(Visit::Skip)
        }
    }

    /// Depth, name and type rules. `None` means the entry survived them.
    fn screen(&self, facts: &EntryFacts<'_>) -> Option<Visit> {
        let is_dir = facts.entry_type.is_dir();

        if self.max_depth.is_exceeded_by(facts.depth) {
            trace!("skip {}: depth {} beyond limit", facts.name, facts.depth);
            return Some(if is_dir { Visit::PruneSubtree } else { Visit::Skip });
        }

        if self
            .include_name
            .as_ref()
            .is_some_and(|p| !p.matches(facts.name))
        {
            trace!("skip {}: include pattern", facts.name);
            return Some(Visit::Skip);
        }
        if self
            .exclude_name
            .as_ref()
            .is_some_and(|p| p.matches(facts.name))
        {
            trace!("skip {}: exclude pattern", facts.name);
            return Some(Visit::Skip);
        }
        if is_dir
            && self
                .exclude_dir_name
                .as_ref()
                .is_some_and(|p| p.matches(facts.name))
        {
            trace!("prune {}: directory exclude pattern", facts.name);
            return Some(Visit::PruneSubtree);
        }

        if !self.include_types.is_empty() && !self.include_types.matches(facts.entry_type) {
            trace!("skip {}: type {} not included", facts.name, facts.entry_type);
            return Some(Visit::Skip);
        }
        if !self.exclude_types.is_empty() && self.exclude_types.matches(facts.entry_type) {
            trace!("skip {}: type {} excluded", facts.name, facts.entry_type);
            return Some(Visit::Skip);
        }

        None
    }

    /// Size and age rules.
    pub fn admits(&self, meta: &EntryMeta) -> bool {
        self.size.contains(meta.size) && self.age.contains(meta.modified)
    }
}

fn normalize_root(path: &str) -> PathBuf {
    let mut root = path.to_string();
    if !root.ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR);
    }
    PathBuf::from(root)
}
