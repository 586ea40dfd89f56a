// src/bin/wc.rs
use std::process::ExitCode;

use clap::Parser;
use lswc::{app, cli::WcArgs, logging};

fn main() -> ExitCode {
    logging::init();
    let args = WcArgs::parse();

    match app::run_wc(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("wc: {e}");
            ExitCode::FAILURE
        }
    }
}
