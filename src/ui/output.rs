//! Console output for codemod runs

use std::io::{self, Write};
use std::path::Path;

use crate::batch::{BatchReporter, BatchSummary};
use crate::core::constants::display;
use crate::core::error::CodemodError;
use crate::reporting::logging;
use crate::ui::color::{Colors, colorize};

/// Prints one line per modified or failed file
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    quiet: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(io::stdout(), quiet)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Blank line, then the total count
    pub fn print_summary(&mut self, summary: &BatchSummary, verb: &str, dry_run: bool) {
        let _ = writeln!(self.out, "\n{}", summary_line(summary, verb, dry_run));
    }
}

impl<W: Write> BatchReporter for ConsoleReporter<W> {
    fn file_modified(&mut self, path: &Path, dry_run: bool) {
        if self.quiet {
            return;
        }
        let mark = if dry_run {
            colorize(display::DRY_RUN_MARK, Colors::YELLOW)
        } else {
            colorize(display::MODIFIED_MARK, Colors::GREEN)
        };
        let _ = writeln!(self.out, "{mark} {}", path.display());
    }

    fn file_failed(&mut self, path: &Path, error: &CodemodError) {
        logging::log_file_error(path, error);
        let _ = writeln!(
            self.out,
            "{} {}: {}",
            colorize("Error processing", Colors::RED),
            path.display(),
            failure_detail(error)
        );
    }
}

/// `3 files modified!`, or `3 files would be modified!` for a dry run
pub fn summary_line(summary: &BatchSummary, verb: &str, dry_run: bool) -> String {
    if dry_run {
        format!("{} files would be {verb}!", summary.modified)
    } else {
        format!("{} files {verb}!", summary.modified)
    }
}

// The path is already on the line; keep only what went wrong
fn failure_detail(error: &CodemodError) -> String {
    match error {
        CodemodError::FileRead { source, .. } => format!("read failed: {source}"),
        CodemodError::FileWrite { source, .. } => format!("write failed: {source}"),
        other => other.to_string(),
    }
}
