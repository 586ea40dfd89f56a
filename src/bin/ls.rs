// src/bin/ls.rs
use std::process::ExitCode;

use clap::Parser;
use lswc::{app, cli::LsArgs, logging};

fn main() -> ExitCode {
    logging::init();
    let args = LsArgs::parse();

    match app::run_ls(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ls: {e}");
            ExitCode::FAILURE
        }
    }
}
