// crates/ports/src/filesystem.rs
use std::ffi::{OsStr, OsString};

use lswc_shared_kernel::{DirectoryReadError, EntryMetadata, StatResult};

/// Port for reading the raw contents of the working directory.
pub trait DirectoryReader: Send + Sync {
    /// Every entry name as reported by the filesystem, unordered and unfiltered.
    fn entry_names(&self) -> Result<Vec<OsString>, DirectoryReadError>;
}

/// Port producing a fresh metadata snapshot for one entry name.
pub trait MetadataReader: Send + Sync {
    fn read(&self, name: &OsStr) -> StatResult<EntryMetadata>;
}
