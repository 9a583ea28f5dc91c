use req2pyproject::prelude::*;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// In-memory RequirementSource keyed by absolute path
#[derive(Default)]
pub struct MockRequirementSource {
    files: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
}

impl MockRequirementSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Registers a file that exists but fails to read
    pub fn with_unreadable_file(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }
}

impl RequirementSource for MockRequirementSource {
    fn locate(&self, path: &Path) -> Option<PathBuf> {
        (self.files.contains_key(path) || self.unreadable.contains(path))
            .then(|| path.to_path_buf())
    }

    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        if self.unreadable.contains(path) {
            anyhow::bail!("Mock read failure");
        }
        let content = self
            .files
            .get(path)
            .ok_or_else(|| anyhow::anyhow!("Mock file not found: {}", path.display()))?;
        Ok(content.lines().map(str::to_string).collect())
    }
}
