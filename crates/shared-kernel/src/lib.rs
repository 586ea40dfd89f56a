// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DirectoryReadError, DomainError, DomainResult, ErrorContext, InfrastructureError, LswcError,
    PresentationError, Result, StatError, StatResult,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    ByteCount, EntryKind, EntryMetadata, EntryMetadataBuilder, EntryMetadataBuilderError, LineCount, WordCount,
};
