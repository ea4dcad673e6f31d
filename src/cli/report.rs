//! Human-readable output for the CLI commands.

use std::io::{self, Write};

use colored::Colorize;

use crate::rules::ValidationReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_success(message: &str) {
    let _ = writeln!(
        io::stdout().lock(),
        "{} {}",
        SUCCESS_MARK.green(),
        message.green()
    );
}

pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

pub fn print_failure(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", FAILURE_MARK.red(), message);
}

/// Print every invalid file with its violations to stderr.
pub fn print_validation(report: &ValidationReport, regenerate_hint: &str) {
    print_validation_to(report, regenerate_hint, &mut io::stderr().lock());
}

/// Print a validation report to a custom writer.
pub fn print_validation_to<W: Write>(
    report: &ValidationReport,
    regenerate_hint: &str,
    writer: &mut W,
) {
    for file in report.invalid_files() {
        let _ = writeln!(
            writer,
            "{} {}:",
            FAILURE_MARK.red(),
            file.display_path.bold()
        );
        for violation in &file.violations {
            let _ = writeln!(writer, "   - {}", violation);
        }
    }

    let invalid = report.invalid_files().count();
    if invalid > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} of {} {} invalid or not created with the scaffolding tool. Use {} to create templates and {} to register them.",
            "FAIL:".bold().red(),
            invalid,
            report.files_checked(),
            if report.files_checked() == 1 { "template is" } else { "templates are" },
            "mailgen new".cyan(),
            regenerate_hint.cyan()
        );
    }
}
