// crates/usecase/src/render.rs
use std::{borrow::Cow, ffi::OsString};

use log::{debug, warn};
use lswc_domain::listing::{GridLayout, ListingOptions, format_long_line, format_total};
use lswc_ports::{accounts::AccountResolver, filesystem::MetadataReader};
use lswc_shared_kernel::{EntryMetadata, StatError};

use crate::dto::ListingOutput;

/// Turns enumerated names into printable text.
///
/// Metadata is read fresh on every call; nothing is cached between renders.
pub struct RenderListing<'a> {
    metadata: &'a dyn MetadataReader,
    accounts: &'a dyn AccountResolver,
    layout: GridLayout,
}

impl<'a> RenderListing<'a> {
    pub fn new(metadata: &'a dyn MetadataReader, accounts: &'a dyn AccountResolver) -> Self {
        Self { metadata, accounts, layout: GridLayout::default() }
    }

    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn render(&self, names: &[OsString], options: &ListingOptions) -> ListingOutput {
        if options.long_format {
            self.render_long(names)
        } else {
            ListingOutput { text: self.render_grid(names), failures: Vec::new() }
        }
    }

    /// Exactly `column_count` newline-terminated rows.
    pub fn render_grid(&self, names: &[OsString]) -> String {
        let shown: Vec<Cow<'_, str>> = names.iter().map(|name| name.to_string_lossy()).collect();
        self.layout.render_rows(&shown).into_iter().fold(String::new(), |mut text, row| {
            text.push_str(&row);
            text.push('\n');
            text
        })
    }

    /// Total line followed by one line per readable entry.
    ///
    /// Entries whose stat fails are left out of the text and returned in
    /// `failures`; the rest of the listing is unaffected.
    pub fn render_long(&self, names: &[OsString]) -> ListingOutput {
        let (entries, failures) = self.read_all(names);
        let total: u64 = entries.iter().map(EntryMetadata::block_count).sum();

        let mut text = format_total(total);
        text.push('\n');
        for meta in &entries {
            let owner = self.accounts.user_label(meta.owner_id());
            let group = self.accounts.group_label(meta.group_id());
            text.push_str(&format_long_line(meta, &owner, &group));
            text.push('\n');
        }
        ListingOutput { text, failures }
    }

    fn read_all(&self, names: &[OsString]) -> (Vec<EntryMetadata>, Vec<StatError>) {
        let mut entries = Vec::with_capacity(names.len());
        let mut failures = Vec::new();
        for name in names {
            match self.metadata.read(name) {
                Ok(meta) => entries.push(meta),
                Err(err) => {
                    warn!("skipping entry: {err}");
                    failures.push(err);
                }
            }
        }
        debug!("read metadata for {} of {} entries", entries.len(), names.len());
        (entries, failures)
    }
}
