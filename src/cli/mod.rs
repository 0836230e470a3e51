use anyhow::Result;

mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, ConvertArgs};
pub use commands::{CommandResult, CommandSummary, ConvertSummary, InitSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(args)?;
    report::print(&result);

    Ok(result.exit_status())
}
