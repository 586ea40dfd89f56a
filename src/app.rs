// src/app.rs
//! Wiring of adapters, use cases and output streams for the two binaries.

use std::io::{self, Write};

use log::debug;
use lswc_domain::{counting::CountOptions, listing::ListingOptions};
use lswc_infra::{DirectoryEntries, FsInputReader, FsMetadataReader, SystemAccounts};
use lswc_ports::{
    accounts::AccountResolver,
    filesystem::{DirectoryReader, MetadataReader},
    input::InputReader,
};
use lswc_shared_kernel::ErrorContext;
use lswc_usecase::{CountInputs, EnumerateEntries, RenderListing};

use crate::{
    cli::{LsArgs, WcArgs},
    config::input_sources,
};

/// The `ls` pipeline over injectable ports.
pub struct Ls<'a> {
    pub directory: &'a dyn DirectoryReader,
    pub metadata: &'a dyn MetadataReader,
    pub accounts: &'a dyn AccountResolver,
}

impl Ls<'_> {
    /// Writes the listing to `out` and per-entry problems to `diag`.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be enumerated or a stream cannot be written.
    pub fn run(&self, options: &ListingOptions, out: &mut dyn Write, diag: &mut dyn Write) -> anyhow::Result<()> {
        debug!("listing options: {}", serde_json::to_string(options)?);

        let names = EnumerateEntries::new(self.directory)
            .run(options)
            .context("cannot list the working directory")?;
        let output = RenderListing::new(self.metadata, self.accounts).render(&names, options);

        out.write_all(output.text.as_bytes())?;
        out.flush()?;
        for failure in &output.failures {
            writeln!(diag, "ls: {failure}")?;
        }
        Ok(())
    }
}

/// `ls` against the real working directory.
///
/// # Errors
///
/// See [`Ls::run`].
pub fn run_ls(args: &LsArgs) -> anyhow::Result<()> {
    let options = ListingOptions::try_from(args)?;
    let directory = DirectoryEntries::current();
    let metadata = FsMetadataReader::current();
    let ls = Ls { directory: &directory, metadata: &metadata, accounts: &SystemAccounts };
    ls.run(&options, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Counts `args`' inputs through `reader`. Returns `false` if any input failed.
///
/// # Errors
///
/// Fails only when the output streams cannot be written.
pub fn count(
    args: &WcArgs,
    reader: &dyn InputReader,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> anyhow::Result<bool> {
    let options = CountOptions::try_from(args)?;
    let sources = input_sources(args);
    debug!("count options: {}, {} inputs", serde_json::to_string(&options)?, sources.len());

    let output = CountInputs::new(reader).run(&sources);
    out.write_all(output.render(&options).as_bytes()).with_context(|| "writing counts".to_string())?;
    out.flush()?;
    for (source, err) in &output.failures {
        // Innermost cause only, e.g. "No such file or directory".
        let err: &(dyn std::error::Error + 'static) = err;
        let cause = std::iter::successors(Some(err), |e| e.source()).last().unwrap_or(err);
        writeln!(diag, "wc: {source}: {cause}")?;
    }
    Ok(output.failures.is_empty())
}

/// `wc` against the real filesystem and standard input.
///
/// # Errors
///
/// See [`count`].
pub fn run_wc(args: &WcArgs) -> anyhow::Result<bool> {
    count(args, &FsInputReader, &mut io::stdout().lock(), &mut io::stderr().lock())
}
