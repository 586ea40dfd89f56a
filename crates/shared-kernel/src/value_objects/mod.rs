// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod entry;

pub use counts::{ByteCount, LineCount, WordCount};
pub use entry::{EntryKind, EntryMetadata, EntryMetadataBuilder, EntryMetadataBuilderError};
