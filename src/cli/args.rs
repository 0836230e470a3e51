//! CLI argument definitions using clap.
//!
//! Running `arbgen` without a subcommand converts every configured locale.
//! Flags override values from `.arbgenrc.json`.
//!
//! ## Commands
//!
//! - (none): Convert Dart localization files to ARB bundles
//! - `init`: Initialize arbgen configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LocaleEntry};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Arguments of the default convert run.
#[derive(Debug, Clone, Default, Args)]
pub struct ConvertArgs {
    /// Project root that input/output directories are relative to
    /// (default: directory of the config file, else the current directory)
    #[arg(long, env = "ARBGEN_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Directory holding the Dart localization files (overrides config file)
    #[arg(long)]
    pub input_dir: Option<String>,

    /// Directory the ARB files are written to (overrides config file)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Locale that receives placeholder metadata (overrides config file)
    #[arg(long)]
    pub template_locale: Option<String>,

    /// Locales to convert, as TAG or SUFFIX=TAG (overrides config file)
    /// Example: --locales es,en,br=pt_BR
    #[arg(long, value_delimiter = ',')]
    pub locales: Vec<LocaleEntry>,

    /// Report what would be written without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(locale) = &self.template_locale {
            config.template_locale = locale.clone();
        }
        if !self.locales.is_empty() {
            config.locales = self.locales.clone();
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .arbgenrc.json configuration file
    Init,
}
