use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, skipped locales included
/// - `Failure` (1): Command refused to run (e.g. `init` with an existing config)
/// - `Error` (2): Command failed due to internal error (config error, write error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command refused to run.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
