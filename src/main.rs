use std::process::ExitCode;

use arbgen::cli::{Arguments, ExitStatus};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match arbgen::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
