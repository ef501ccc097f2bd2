pub mod filtering;
pub mod name_pattern;

pub use filtering::{AgeRange, EntryTypes, MaxDepth, SizeRange};
pub use name_pattern::NamePattern;
