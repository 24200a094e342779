//! Example tree discovery.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::example::{ExampleRules, ExampleSource};

/// Walks a documentation tree and collects example files.
#[derive(Debug, Clone)]
pub struct ExampleScanner {
    root: PathBuf,
    rules: ExampleRules,
}

impl ExampleScanner {
    /// Create a scanner for the given root directory.
    pub fn new(root: impl Into<PathBuf>, rules: ExampleRules) -> Self {
        Self {
            root: root.into(),
            rules,
        }
    }

    /// Root directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Rules used to qualify examples.
    pub fn rules(&self) -> &ExampleRules {
        &self.rules
    }

    /// Find every qualifying example path, in directory-walk order.
    ///
    /// Entries are visited sorted by file name within each directory so the
    /// order does not depend on the filesystem.
    pub fn example_paths(&self) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.is_dir() {
            return Err(ScanError::DirectoryNotFound(self.root.display().to_string()));
        }

        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ScanError::Walk(e.to_string()))?;
            let path = entry.path();

            if entry.file_type().is_file() && self.rules.is_example(path) {
                paths.push(path.to_path_buf());
            }
        }

        Ok(paths)
    }

    /// Find and read every qualifying example.
    pub fn scan(&self) -> Result<Vec<ExampleSource>, ScanError> {
        self.example_paths()?
            .iter()
            .map(|path| ExampleSource::read(path))
            .collect()
    }
}

/// Errors that can occur while discovering examples.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to walk example tree: {0}")]
    Walk(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}
