// src/cli/mod.rs
mod ls_args;
mod wc_args;

pub use ls_args::LsArgs;
pub use wc_args::WcArgs;
