// crates/shared-kernel/src/value_objects/visit.rs

/// Outcome of visiting one entry during a walk.
///
/// Hard failures are not a variant: they travel on the `Err` side of the
/// visitor's `Result` and abort the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The entry passed every filter.
    Count,
    /// The entry is not counted; its children (if any) are still visited.
    Skip,
    /// The entry is not counted and nothing below it is visited.
    PruneSubtree,
}

impl Visit {
    #[inline]
    pub const fn prunes(self) -> bool {
        matches!(self, Self::PruneSubtree)
    }
}
