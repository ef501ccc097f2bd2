pub mod filter_spec;

pub use filter_spec::{EntryFacts, FilterSpec};
