use crate::shared::Result;
use std::path::{Path, PathBuf};

/// RequirementSource port for locating and reading requirement files
///
/// This port abstracts the file system so include resolution can run
/// against real files or an in-memory tree in tests.
pub trait RequirementSource {
    /// Returns the canonical absolute path of `path`
    ///
    /// # Returns
    /// `None` if the file does not exist
    fn locate(&self, path: &Path) -> Option<PathBuf>;

    /// Reads a located file and returns its lines, untrimmed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The path is not a regular file
    /// - The file is too large or not valid UTF-8
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}
