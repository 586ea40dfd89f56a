// crates/shared-kernel/src/value_objects/entry.rs
use std::ffi::{OsStr, OsString};

use chrono::{DateTime, Local};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Closed classification of a directory entry.
///
/// Sockets, FIFOs and device nodes all land in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    RegularFile,
    Directory,
    SymbolicLink,
    Other,
}

impl EntryKind {
    /// Classifies an entry from the type query of its own (non-followed) metadata.
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::SymbolicLink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::RegularFile
        } else {
            Self::Other
        }
    }
}

/// Snapshot of one entry's stat information at the moment it was read.
///
/// The name is kept exactly as the filesystem reported it, so it can be fed
/// back into the next lookup even when it is not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct EntryMetadata {
    #[builder(setter(into))]
    name: OsString,
    kind: EntryKind,
    #[builder(setter(custom))]
    permission_mode: u32,
    #[builder(setter(custom), default = "1")]
    link_count: u64,
    owner_id: u32,
    group_id: u32,
    #[builder(default)]
    size_bytes: u64,
    /// Allocated storage in 512-byte blocks.
    #[builder(default)]
    block_count: u64,
    modified_at: DateTime<Local>,
}

impl EntryMetadata {
    /// Only the owner/group/other rwx bits are kept.
    pub const PERMISSION_MASK: u32 = 0o777;

    pub fn builder() -> EntryMetadataBuilder {
        EntryMetadataBuilder::default()
    }

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn permission_mode(&self) -> u32 {
        self.permission_mode
    }

    #[inline]
    pub fn link_count(&self) -> u64 {
        self.link_count
    }

    #[inline]
    pub fn owner_id(&self) -> u32 {
        self.owner_id
    }

    #[inline]
    pub fn group_id(&self) -> u32 {
        self.group_id
    }

    #[inline]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[inline]
    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    #[inline]
    pub fn modified_at(&self) -> DateTime<Local> {
        self.modified_at
    }
}

impl EntryMetadataBuilder {
    /// Higher bits (file type, setuid, sticky) are dropped here.
    pub fn permission_mode(&mut self, mode: u32) -> &mut Self {
        self.permission_mode = Some(mode & EntryMetadata::PERMISSION_MASK);
        self
    }

    pub fn link_count(&mut self, link_count: u64) -> &mut Self {
        self.link_count = Some(link_count.max(1));
        self
    }
}
