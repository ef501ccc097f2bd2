// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod entry_meta;
pub mod entry_type;
pub mod param_slot;
pub mod visit;

pub use counts::EntryCount;
pub use entry_meta::EntryMeta;
pub use entry_type::EntryType;
pub use param_slot::ParamSlot;
pub use visit::Visit;
