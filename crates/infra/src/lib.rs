// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod accounts;
pub mod filesystem;
pub mod input;
pub mod persistence;

pub use accounts::SystemAccounts;
pub use filesystem::{DirectoryEntries, FsMetadataReader};
pub use input::FsInputReader;
