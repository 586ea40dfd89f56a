// crates/domain/src/listing/permission.rs
//! Symbolic rendering of the nine rwx permission bits.

use lswc_shared_kernel::EntryMetadata;

/// Indexed by one octal digit.
const TRIADS: [&str; 8] = ["---", "--x", "-w-", "-wx", "r--", "r-x", "rw-", "rwx"];

/// Renders `mode` as a 9-character `rwxrwxrwx` string.
///
/// Bits above the low nine are ignored.
pub fn format_permissions(mode: u32) -> String {
    let mode = mode & EntryMetadata::PERMISSION_MASK;
    [6u32, 3, 0].iter().map(|shift| TRIADS[((mode >> shift) & 0o7) as usize]).collect()
}
