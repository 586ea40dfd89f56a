// crates/infra/src/accounts.rs
//! Owner/group name lookup through the C library's name service (`getpwuid_r`, `getgrgid_r`).

use std::{ffi::CStr, ptr};

use log::debug;
use lswc_ports::accounts::AccountResolver;

/// Fallback when `sysconf` gives no hint for the lookup buffer size.
const DEFAULT_BUFFER_LEN: usize = 1024;
/// Upper bound for ERANGE retries.
const MAX_BUFFER_LEN: usize = 1 << 20;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAccounts;

impl AccountResolver for SystemAccounts {
    fn user_name(&self, uid: u32) -> Option<String> {
        let name = with_lookup_buffer(libc::_SC_GETPW_R_SIZE_MAX, |buf, len| {
            // SAFETY: all pointers refer to live locals/`buf`, and `len` is the length of `buf`.
            let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
            let mut found: *mut libc::passwd = ptr::null_mut();
            let rc = unsafe { libc::getpwuid_r(uid, &mut entry, buf, len, &mut found) };
            // SAFETY: on success `pw_name` points into `buf`, which outlives this closure call.
            (rc, (!found.is_null()).then(|| unsafe { c_string(entry.pw_name) }))
        });
        if name.is_none() {
            debug!("no user name for uid {uid}");
        }
        name
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        let name = with_lookup_buffer(libc::_SC_GETGR_R_SIZE_MAX, |buf, len| {
            // SAFETY: as in `user_name`.
            let mut entry: libc::group = unsafe { std::mem::zeroed() };
            let mut found: *mut libc::group = ptr::null_mut();
            let rc = unsafe { libc::getgrgid_r(gid, &mut entry, buf, len, &mut found) };
            // SAFETY: on success `gr_name` points into `buf`.
            (rc, (!found.is_null()).then(|| unsafe { c_string(entry.gr_name) }))
        });
        if name.is_none() {
            debug!("no group name for gid {gid}");
        }
        name
    }
}

/// Runs `lookup` with a scratch buffer, growing it while the call reports `ERANGE`.
fn with_lookup_buffer<F>(size_hint: libc::c_int, mut lookup: F) -> Option<String>
where
    F: FnMut(*mut libc::c_char, usize) -> (libc::c_int, Option<String>),
{
    // SAFETY: sysconf has no memory-safety preconditions.
    let hinted = unsafe { libc::sysconf(size_hint) };
    let mut len = usize::try_from(hinted).ok().filter(|n| *n > 0).unwrap_or(DEFAULT_BUFFER_LEN);

    loop {
        let mut buf: Vec<libc::c_char> = vec![0; len];
        match lookup(buf.as_mut_ptr(), buf.len()) {
            (libc::ERANGE, _) if len < MAX_BUFFER_LEN => len *= 2,
            (0, name) => return name,
            _ => return None,
        }
    }
}

/// # Safety
///
/// `raw` must be null or point to a NUL-terminated string.
unsafe fn c_string(raw: *const libc::c_char) -> String {
    if raw.is_null() {
        return String::new();
    }
    // SAFETY: guaranteed by the caller.
    unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
}
