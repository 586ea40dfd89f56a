// crates/usecase/src/enumerate.rs
use std::ffi::OsString;

use log::debug;
use lswc_domain::listing::{ListingOptions, full_pass, order_names, visible_pass};
use lswc_ports::filesystem::DirectoryReader;
use lswc_shared_kernel::DirectoryReadError;

/// Produces the ordered names shown by one listing run.
pub struct EnumerateEntries<'a> {
    reader: &'a dyn DirectoryReader,
}

impl<'a> EnumerateEntries<'a> {
    pub fn new(reader: &'a dyn DirectoryReader) -> Self {
        Self { reader }
    }

    /// # Errors
    ///
    /// Fails only when the working directory itself cannot be read.
    pub fn run(&self, options: &ListingOptions) -> Result<Vec<OsString>, DirectoryReadError> {
        let raw = self.reader.entry_names()?;
        let raw_len = raw.len();
        let names = if options.include_hidden { full_pass(raw) } else { visible_pass(raw) };
        debug!(
            "enumerated {raw_len} raw entries, {} after {} pass",
            names.len(),
            if options.include_hidden { "full" } else { "visible" }
        );
        Ok(order_names(names, options.reverse_order))
    }
}
