pub mod aggregates;
pub mod value_objects;

pub use aggregates::{EntryFacts, FilterSpec};
pub use value_objects::{AgeRange, EntryTypes, MaxDepth, NamePattern, SizeRange};
