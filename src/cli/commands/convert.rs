use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::{args::ConvertArgs, report};
use super::{CommandResult, CommandSummary, ConvertSummary};
use crate::config::{Config, load_config};
use crate::core::Converter;

pub fn convert(args: &ConvertArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    convert_in(args, &cwd, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Run the conversion from `cwd`. Each locale's header is printed before its
/// bundle is written, so it shows up even when the write fails.
pub fn convert_in<O: Write, E: Write>(
    args: &ConvertArgs,
    cwd: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<CommandResult> {
    let (config, root) = resolve_config(args, cwd)?;
    let converter = Converter::new(config, root).dry_run(args.dry_run);

    let mut outcomes = Vec::new();
    for job in converter.plan() {
        let outcome = match converter.prepare(&job) {
            Ok(prepared) => {
                report::print_prepared_to(&prepared, args.verbose, out);
                converter.write(prepared)?
            }
            Err(reason) => converter.skipped(&job, reason),
        };
        report::print_outcome_to(&outcome, out, err);
        outcomes.push(outcome);
    }

    Ok(CommandResult {
        summary: CommandSummary::Convert(ConvertSummary {
            outcomes,
            output_dir: converter.output_dir(),
            is_dry_run: args.dry_run,
        }),
    })
}

/// Merge config file and flags, and pick the project root.
///
/// The config file is searched from `--project-root` when given, otherwise
/// from `cwd`. Without `--project-root` the root is the config file's
/// directory, or `cwd` when no config file exists.
fn resolve_config(args: &ConvertArgs, cwd: &Path) -> Result<(Config, PathBuf)> {
    let search_from = match &args.project_root {
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    };
    let loaded = load_config(&search_from)?;

    let root = match &args.project_root {
        Some(_) => search_from,
        None => loaded
            .config_dir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf()),
    };

    let mut config = loaded.config;
    args.apply_to(&mut config);
    config.validate()?;

    Ok((config, root))
}
