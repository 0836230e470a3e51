pub mod convert;
pub mod init;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::core::LocaleOutcome;

#[derive(Debug)]
pub enum CommandSummary {
    Convert(ConvertSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ConvertSummary {
    pub outcomes: Vec<LocaleOutcome>,
    pub output_dir: PathBuf,
    pub is_dry_run: bool,
}

impl ConvertSummary {
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_skipped()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running arbgen commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    /// Skipped locales do not fail a conversion; an existing config fails `init`.
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Convert(_) => ExitStatus::Success,
            CommandSummary::Init(summary) if summary.created => ExitStatus::Success,
            CommandSummary::Init(_) => ExitStatus::Failure,
        }
    }
}
