//! Console output for conversion runs.
//!
//! Progress goes to stdout, warnings and errors to stderr. Every printer has
//! a `*_to` variant taking explicit writers for testing.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, ConvertSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ConvertedLocale, LocaleOutcome, PreparedLocale};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Command to run after the ARB files are in place.
pub const NEXT_STEP_COMMAND: &str = "flutter gen-l10n";

/// Print the header of a locale that was read, before its bundle is written.
pub fn print_prepared_to<W: Write>(prepared: &PreparedLocale, verbose: bool, out: &mut W) {
    let _ = writeln!(out, "Processing {}...", prepared.job.entry.suffix);
    let _ = writeln!(out, "  Found {} strings", prepared.string_count);

    let placeholder_keys = prepared.placeholder_keys();
    if verbose && !placeholder_keys.is_empty() {
        let _ = writeln!(
            out,
            "  {} {}",
            "placeholders:".dimmed(),
            placeholder_keys.join(", ")
        );
    }
}

/// Print how one locale ended: where it was written, or why it was skipped.
pub fn print_outcome_to<O: Write, E: Write>(outcome: &LocaleOutcome, out: &mut O, err: &mut E) {
    match outcome {
        LocaleOutcome::Converted(converted) => print_converted(converted, out),
        LocaleOutcome::Skipped { input, reason, .. } => {
            let _ = writeln!(
                err,
                "{} {} {}, skipping",
                "warning:".bold().yellow(),
                input.display(),
                reason
            );
        }
    }
}

/// Print the final summary of a command.
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Convert(summary) => print_convert_summary_to(
            summary,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        CommandSummary::Init(summary) => {
            print_init_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
    }
}

pub fn print_convert_summary_to<O: Write, E: Write>(
    summary: &ConvertSummary,
    out: &mut O,
    err: &mut E,
) {
    let converted = summary.converted_count();
    let skipped = summary.skipped_count();

    if converted == 0 {
        let _ = writeln!(
            err,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "No localization files found for {} configured {}",
                summary.outcomes.len(),
                locale_word(summary.outcomes.len())
            )
            .red()
        );
        return;
    }

    let _ = writeln!(out);
    let skipped_note = if skipped > 0 {
        format!(" ({} skipped)", skipped)
    } else {
        String::new()
    };

    if summary.is_dry_run {
        let _ = writeln!(
            out,
            "{} {} {} {} in {}{}.",
            SUCCESS_MARK.green(),
            "Would write".yellow().bold(),
            converted,
            locale_word(converted),
            summary.output_dir.display(),
            skipped_note
        );
        let _ = writeln!(out, "Run without {} to write the files.", "--dry-run".cyan());
    } else {
        let _ = writeln!(
            out,
            "{} {} {} {} to {}{}.",
            SUCCESS_MARK.green(),
            "Done! Converted".green().bold(),
            converted,
            locale_word(converted),
            summary.output_dir.display(),
            skipped_note
        );
        let _ = writeln!(out, "Now run: {}", NEXT_STEP_COMMAND.cyan());
    }
}

pub fn print_init_to<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            summary.path.display()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_converted<W: Write>(converted: &ConvertedLocale, out: &mut W) {
    if converted.written {
        let _ = writeln!(out, "  Written to {}", converted.output.display());
    } else {
        let _ = writeln!(
            out,
            "  Would write {} ({})",
            converted.output.display(),
            converted.action.as_str()
        );
    }
}

fn locale_word(count: usize) -> &'static str {
    if count == 1 { "locale" } else { "locales" }
}

// ============================================================
// Tests
// ============================================================
