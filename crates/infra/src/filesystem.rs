// crates/infra/src/filesystem.rs
//! `std::fs` adapters for directory enumeration and per-entry stat.

use std::{
    ffi::{OsStr, OsString},
    fs, io,
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use log::debug;
use lswc_ports::filesystem::{DirectoryReader, MetadataReader};
use lswc_shared_kernel::{DirectoryReadError, EntryKind, EntryMetadata, StatError, StatResult};

/// Lists the raw contents of one directory (the working directory by default).
#[derive(Debug, Clone)]
pub struct DirectoryEntries {
    root: PathBuf,
}

impl DirectoryEntries {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current() -> Self {
        Self::new(".")
    }
}

impl DirectoryReader for DirectoryEntries {
    fn entry_names(&self) -> Result<Vec<OsString>, DirectoryReadError> {
        let fail = |source| DirectoryReadError { path: self.root.clone(), source };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(fail)? {
            names.push(entry.map_err(fail)?.file_name());
        }
        debug!("{} entries in {}", names.len(), self.root.display());
        Ok(names)
    }
}

/// Takes one `lstat` per entry, resolved against `root`.
#[derive(Debug, Clone)]
pub struct FsMetadataReader {
    root: PathBuf,
}

impl FsMetadataReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current() -> Self {
        Self::new(".")
    }

    fn path_of(&self, name: &OsStr) -> PathBuf {
        if self.root == Path::new(".") { PathBuf::from(name) } else { self.root.join(name) }
    }
}

impl MetadataReader for FsMetadataReader {
    fn read(&self, name: &OsStr) -> StatResult<EntryMetadata> {
        let fail = |source| StatError { name: name.to_string_lossy().into_owned(), source };

        // Symlinks are described, not followed.
        let meta = fs::symlink_metadata(self.path_of(name)).map_err(fail)?;
        let modified: DateTime<Local> = meta.modified().map_err(fail)?.into();

        EntryMetadata::builder()
            .name(name)
            .kind(EntryKind::from_file_type(meta.file_type()))
            .permission_mode(meta.mode())
            .link_count(meta.nlink())
            .owner_id(meta.uid())
            .group_id(meta.gid())
            .size_bytes(meta.size())
            .block_count(meta.blocks())
            .modified_at(modified)
            .build()
            .map_err(|err| fail(io::Error::other(err)))
    }
}
