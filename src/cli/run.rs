//! Dispatch to the command handler for the parsed arguments.
//!
//! No subcommand means a conversion run.
//!
//! # Returns
//! - `Ok(CommandResult)` with the per-locale outcomes or init summary
//! - `Err` if the command fails (e.g., invalid config, output write error)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, convert::convert, init::init},
};

pub fn run(Arguments { command, convert: args }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        None => convert(&args),
    }
}
