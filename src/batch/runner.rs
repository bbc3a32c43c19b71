use log::{debug, info};

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{CodemodError, Result};
use crate::transform::Codemod;

/// Receives per-file events while a batch runs
pub trait BatchReporter {
    fn file_modified(&mut self, path: &Path, dry_run: bool);

    fn file_failed(&mut self, path: &Path, error: &CodemodError);
}

/// Totals for one batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub scanned: usize,
    pub modified: usize,
    pub failed: usize,
}

/// Read, transform and, when the content changed, write back one file.
///
/// Returns whether the file was (or, for a dry run, would be) modified.
pub fn process_file(path: &Path, codemod: &dyn Codemod, dry_run: bool) -> Result<bool> {
    let original = fs::read_to_string(path).map_err(|source| CodemodError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let transformed = codemod.apply(&original);
    if !transformed.modified {
        return Ok(false);
    }

    if dry_run {
        debug!("{}: would modify {}", codemod.name(), path.display());
        return Ok(true);
    }

    fs::write(path, transformed.content).map_err(|source| CodemodError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{}: modified {}", codemod.name(), path.display());

    Ok(true)
}

/// Run `codemod` over every path, isolating failures per file.
pub fn run_batch<I, R>(
    paths: I,
    codemod: &dyn Codemod,
    dry_run: bool,
    reporter: &mut R,
) -> BatchSummary
where
    I: IntoIterator<Item = PathBuf>,
    R: BatchReporter + ?Sized,
{
    let mut summary = BatchSummary::default();

    for path in paths {
        summary.scanned += 1;
        debug!("{}: scanning {}", codemod.name(), path.display());

        match process_file(&path, codemod, dry_run) {
            Ok(true) => {
                summary.modified += 1;
                reporter.file_modified(&path, dry_run);
            }
            Ok(false) => {}
            Err(e) => {
                summary.failed += 1;
                reporter.file_failed(&path, &e);
            }
        }
    }

    info!(
        "{}: scanned {} file(s), {} modified, {} failed",
        codemod.name(),
        summary.scanned,
        summary.modified,
        summary.failed
    );

    summary
}
