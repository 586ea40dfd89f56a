// src/config.rs
//! Conversion from parsed CLI flags into the option records the use cases take.

use lswc_domain::{
    counting::{CountOptions, CountOptionsBuilder},
    listing::{ListingOptions, ListingOptionsBuilder},
};
use lswc_ports::input::InputSource;
use lswc_shared_kernel::PresentationError;

use crate::cli::{LsArgs, WcArgs};

impl TryFrom<&LsArgs> for ListingOptions {
    type Error = PresentationError;

    fn try_from(args: &LsArgs) -> Result<Self, Self::Error> {
        ListingOptionsBuilder::default()
            .include_hidden(args.all)
            .reverse_order(args.reverse)
            .long_format(args.long)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

impl TryFrom<&WcArgs> for CountOptions {
    type Error = PresentationError;

    fn try_from(args: &WcArgs) -> Result<Self, Self::Error> {
        CountOptionsBuilder::default()
            .lines_only(args.lines)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

/// Files in command-line order, or standard input when none were named.
pub fn input_sources(args: &WcArgs) -> Vec<InputSource> {
    if args.files.is_empty() {
        vec![InputSource::Stdin]
    } else {
        args.files.iter().cloned().map(InputSource::File).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn ls_flags_map_one_to_one() {
        let args = LsArgs { all: true, reverse: false, long: true };
        let options = ListingOptions::try_from(&args).expect("builds");
        assert_eq!(options, ListingOptions { include_hidden: true, reverse_order: false, long_format: true });
    }

    #[test]
    fn wc_lines_flag() {
        let args = WcArgs { lines: true, files: vec![] };
        assert!(CountOptions::try_from(&args).expect("builds").lines_only);
    }

    #[test]
    fn sources_default_to_stdin() {
        assert_eq!(input_sources(&WcArgs::default()), vec![InputSource::Stdin]);
        let args = WcArgs { lines: false, files: vec![PathBuf::from("x")] };
        assert_eq!(input_sources(&args), vec![InputSource::File(PathBuf::from("x"))]);
    }
}
