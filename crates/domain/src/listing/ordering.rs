// crates/domain/src/listing/ordering.rs
//! Hidden-entry rules and name ordering.
//!
//! The visible pass and the full pass are alternatives computed from the raw
//! directory contents; the full pass is not the visible pass with a filter
//! switched off (it also contributes the self entries).
//!
//! Names stay as raw `OsString`s here; only rendering turns them into text.

use std::{
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

/// Self entries reported by the full pass, in addition to the real contents.
pub const SELF_ENTRIES: [&str; 2] = [".", ".."];

/// Names starting with `.` are hidden unless the full pass is requested.
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

fn is_self_entry(name: &OsStr) -> bool {
    SELF_ENTRIES.iter().any(|entry| name == OsStr::new(entry))
}

/// Raw contents minus every dot entry.
pub fn visible_pass(raw: Vec<OsString>) -> Vec<OsString> {
    raw.into_iter().filter(|name| !is_hidden(name)).collect()
}

/// Raw contents plus the self entries, nothing removed.
pub fn full_pass(raw: Vec<OsString>) -> Vec<OsString> {
    let mut names: Vec<OsString> = SELF_ENTRIES.into_iter().map(OsString::from).collect();
    names.extend(raw.into_iter().filter(|name| !is_self_entry(name)));
    names
}

/// Byte-order sort, then an optional reversal of the sorted result.
pub fn order_names(mut names: Vec<OsString>, reverse: bool) -> Vec<OsString> {
    names.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    if reverse {
        names.reverse();
    }
    names
}
