use crate::error::{CmverError, Result};
use crate::version::Version;
use std::path::{Path, PathBuf};

/// Minimum version enforced when no override is given.
pub const DEFAULT_TARGET_VERSION: &str = "3.18";

/// Vendored build files maintained by this tool, relative to the
/// repository root.
pub const DEFAULT_TARGETS: &[&str] = &[
    "deps/tokenizers-cpp/msgpack/CMakeLists.txt",
    "deps/tokenizers-cpp/msgpack/test-install/CMakeLists.txt",
    "deps/tokenizers-cpp/sentencepiece/CMakeLists.txt",
];

/// Resolved run configuration: where to look, what to enforce.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub root: PathBuf,
    pub target_version: String,
    targets: Vec<PathBuf>,
}

impl SyncConfig {
    /// Build a configuration from CLI input, falling back to the
    /// built-in target list and version where nothing was overridden.
    pub fn resolve<P: AsRef<Path>>(
        root: P,
        target_version: &str,
        files: &[String],
    ) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CmverError::Config(format!(
                "Root path '{}' is not a directory",
                root.display()
            )));
        }

        // Reject an unusable target before any file is touched.
        Version::parse(target_version)?;

        let targets = if files.is_empty() {
            DEFAULT_TARGETS.iter().map(PathBuf::from).collect()
        } else {
            files.iter().map(PathBuf::from).collect()
        };

        Ok(Self {
            root: root.to_path_buf(),
            target_version: target_version.to_string(),
            targets,
        })
    }

    /// Target files in declaration order, resolved against the root.
    pub fn target_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.targets.iter().map(|target| self.root.join(target))
    }

    /// Root-relative form of a resolved target path, for reporting.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
