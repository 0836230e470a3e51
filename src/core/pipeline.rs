//! Per-locale conversion: read, extract, generate, write.
//!
//! Locales run one after another. A missing or unreadable input only skips
//! its own locale; write failures abort the whole run.

use std::{fmt, path::PathBuf};

use anyhow::Result;

use super::{
    bundle::{Bundle, generate_bundle},
    extract::extract_file,
    writer::{BundleWriter, WriteAction},
};
use crate::config::{Config, LocaleEntry};

/// One planned locale conversion with resolved paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleJob {
    pub entry: LocaleEntry,
    pub input: PathBuf,
    pub output: PathBuf,
    pub is_template: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Input file does not exist.
    Missing,
    /// Input exists but could not be read (permissions, invalid UTF-8, ...).
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "not found"),
            SkipReason::Unreadable(err) => write!(f, "could not be read: {}", err),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocaleOutcome {
    Converted(ConvertedLocale),
    Skipped {
        entry: LocaleEntry,
        input: PathBuf,
        reason: SkipReason,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedLocale {
    pub entry: LocaleEntry,
    pub output: PathBuf,
    pub string_count: usize,
    /// Keys that received `@key` placeholder metadata.
    pub placeholder_keys: Vec<String>,
    pub action: WriteAction,
    /// False for dry runs.
    pub written: bool,
}

/// A locale whose input was read and turned into a bundle, not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedLocale {
    pub job: LocaleJob,
    pub string_count: usize,
    pub bundle: Bundle,
}

impl PreparedLocale {
    /// Keys that received `@key` placeholder metadata.
    pub fn placeholder_keys(&self) -> Vec<String> {
        self.bundle
            .placeholder_keys()
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl LocaleOutcome {
    pub fn entry(&self) -> &LocaleEntry {
        match self {
            LocaleOutcome::Converted(converted) => &converted.entry,
            LocaleOutcome::Skipped { entry, .. } => entry,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, LocaleOutcome::Skipped { .. })
    }
}

/// Runs the configured locales against a project root.
pub struct Converter {
    config: Config,
    root: PathBuf,
    dry_run: bool,
}

impl Converter {
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            dry_run: false,
        }
    }

    /// Extract and generate without writing any file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join(&self.config.input_dir)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_dir)
    }

    /// Jobs in configuration order.
    pub fn plan(&self) -> Vec<LocaleJob> {
        let input_dir = self.input_dir();
        let output_dir = self.output_dir();

        self.config
            .locales
            .iter()
            .map(|entry| LocaleJob {
                entry: entry.clone(),
                input: input_dir.join(self.config.input_file_for(entry)),
                output: output_dir.join(self.config.output_file_for(entry)),
                is_template: self.config.is_template(&entry.locale),
            })
            .collect()
    }

    /// Read and convert one input. `Err` carries the reason the locale is
    /// skipped; nothing here is fatal.
    pub fn prepare(&self, job: &LocaleJob) -> std::result::Result<PreparedLocale, SkipReason> {
        if !job.input.exists() {
            return Err(SkipReason::Missing);
        }

        let strings = extract_file(&job.input)
            .map_err(|err| SkipReason::Unreadable(err.root_cause().to_string()))?;
        let bundle = generate_bundle(&strings, &job.entry.locale, job.is_template);

        Ok(PreparedLocale {
            job: job.clone(),
            string_count: strings.len(),
            bundle,
        })
    }

    /// Write a prepared bundle, or only plan the write on a dry run.
    pub fn write(&self, prepared: PreparedLocale) -> Result<LocaleOutcome> {
        let writer = BundleWriter::new(&prepared.job.output);
        let action = if self.dry_run {
            writer.plan(&prepared.bundle)?
        } else {
            writer.save(&prepared.bundle)?
        };

        let placeholder_keys = prepared.placeholder_keys();
        Ok(LocaleOutcome::Converted(ConvertedLocale {
            entry: prepared.job.entry,
            output: prepared.job.output,
            string_count: prepared.string_count,
            placeholder_keys,
            action,
            written: !self.dry_run,
        }))
    }

    pub fn skipped(&self, job: &LocaleJob, reason: SkipReason) -> LocaleOutcome {
        LocaleOutcome::Skipped {
            entry: job.entry.clone(),
            input: job.input.clone(),
            reason,
        }
    }

    pub fn run_job(&self, job: &LocaleJob) -> Result<LocaleOutcome> {
        match self.prepare(job) {
            Ok(prepared) => self.write(prepared),
            Err(reason) => Ok(self.skipped(job, reason)),
        }
    }

    /// Run every planned job, stopping at the first write error.
    pub fn run_all(&self) -> Result<Vec<LocaleOutcome>> {
        self.plan().iter().map(|job| self.run_job(job)).collect()
    }
}
