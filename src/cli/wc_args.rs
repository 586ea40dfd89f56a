// src/cli/wc_args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Count lines, words and bytes.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wc", version = crate::VERSION, about = "Count lines, words and bytes of files or standard input")]
pub struct WcArgs {
    /// Print only the line count
    #[arg(short = 'l')]
    pub lines: bool,

    /// Files to count; standard input is read when none are given
    #[arg(value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_and_flag() {
        let args = WcArgs::try_parse_from(["wc", "-l", "a.txt", "b.txt"]).expect("parses");
        assert!(args.lines);
        assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn no_files_means_stdin() {
        let args = WcArgs::try_parse_from(["wc"]).expect("parses");
        assert!(args.files.is_empty());
    }
}
