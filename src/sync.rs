use crate::error::Result;
use crate::patcher::{DirectivePatcher, PatchResult};
use std::fs;
use std::path::Path;

/// Per-file classification after a sync or check pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The target path does not exist.
    Missing,
    /// The file exists but contains no directive.
    NoDirective,
    /// Every directive already meets the target version.
    Compliant { versions: Vec<String> },
    /// `count` directive occurrences were (or would be) rewritten.
    Updated { count: usize, versions: Vec<String> },
}

impl FileOutcome {
    pub fn updated_count(&self) -> usize {
        match self {
            FileOutcome::Updated { count, .. } => *count,
            _ => 0,
        }
    }
}

/// FileSync reads target files, patches their directives, and writes
/// results back only when something actually changed.
pub struct FileSync {
    patcher: DirectivePatcher,
}

impl FileSync {
    pub fn new(target_version: &str) -> Result<Self> {
        Ok(Self {
            patcher: DirectivePatcher::new(target_version)?,
        })
    }

    /// Patch one file in place.
    ///
    /// The file is only reopened for writing when at least one
    /// occurrence was rewritten; compliant files keep their
    /// modification timestamps.
    pub fn sync_file<P: AsRef<Path>>(&self, path: P) -> Result<FileOutcome> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(FileOutcome::Missing);
        }

        let text = fs::read_to_string(path)?;
        let result = self.patcher.patch(&text)?;

        if result.updated > 0 {
            fs::write(path, &result.text)?;
        }

        Ok(Self::outcome(result))
    }

    /// Classify one file without touching it (dry run).
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<FileOutcome> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(FileOutcome::Missing);
        }

        let text = fs::read_to_string(path)?;
        Ok(Self::outcome(self.patcher.patch(&text)?))
    }

    fn outcome(result: PatchResult) -> FileOutcome {
        if !result.has_directives() {
            FileOutcome::NoDirective
        } else if result.updated == 0 {
            FileOutcome::Compliant {
                versions: result.versions,
            }
        } else {
            FileOutcome::Updated {
                count: result.updated,
                versions: result.versions,
            }
        }
    }
}
