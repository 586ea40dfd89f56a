// src/cli/ls_args.rs
use clap::Parser;

/// List the current directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ls", version = crate::VERSION, about = "List the entries of the current directory")]
#[allow(clippy::struct_excessive_bools)]
pub struct LsArgs {
    /// Include entries starting with `.`, plus `.` and `..`
    #[arg(short = 'a')]
    pub all: bool,

    /// Reverse the sort order
    #[arg(short = 'r')]
    pub reverse: bool,

    /// Long format: type, permissions, links, owner, group, size, time, name
    #[arg(short = 'l')]
    pub long: bool,
}
