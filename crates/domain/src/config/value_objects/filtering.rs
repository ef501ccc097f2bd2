pub mod age_range;
pub mod entry_types;
pub mod max_depth;
pub mod size_range;

pub use age_range::AgeRange;
pub use entry_types::EntryTypes;
pub use max_depth::MaxDepth;
pub use size_range::SizeRange;
