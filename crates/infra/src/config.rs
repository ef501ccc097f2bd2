// crates/infra/src/config.rs
use derive_builder::Builder;

/// How the filesystem walk treats links and mount points.
///
/// The defaults reproduce the agent's behaviour: symbolic links are
/// reported as links and never followed, and mount points are crossed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    /// Descend through symbolic links and classify them by their target.
    #[builder(default)]
    pub follow_links: bool,
    /// Do not cross into directories on another filesystem than the root.
    #[builder(default)]
    pub same_file_system: bool,
}
