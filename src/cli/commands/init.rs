use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    init_in(&cwd)
}

/// Write the default config into `dir` unless one already exists.
pub fn init_in(dir: &Path) -> Result<CommandResult> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let created = !config_path.exists();

    if created {
        fs::write(&config_path, default_config_json()?)
            .with_context(|| format!("Failed to write file: {}", config_path.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary {
            path: config_path,
            created,
        }),
    })
}
