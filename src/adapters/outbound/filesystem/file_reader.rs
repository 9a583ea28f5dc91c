use crate::ports::outbound::RequirementSource;
use crate::shared::error::ConvertError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading requirement files from disk
///
/// This adapter implements the RequirementSource port. Paths are
/// canonicalized so the same file reached through different relative
/// paths or symlinks is recognized as one.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementSource for FileSystemReader {
    fn locate(&self, path: &Path) -> Option<PathBuf> {
        fs::canonicalize(path).ok()
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        validate_regular_file(path, "requirements file")?;

        let content = fs::read_to_string(path).map_err(|e| ConvertError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(content.lines().map(str::to_string).collect())
    }
}
