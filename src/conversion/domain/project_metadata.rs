/// Placeholder values written when nothing overrides them
pub const DEFAULT_NAME: &str = "your-project-name";
pub const DEFAULT_VERSION: &str = "0.1.0";
pub const DEFAULT_DESCRIPTION: &str = "A short description of your project.";
pub const DEFAULT_AUTHOR: &str = "Your Name <you@example.com>";
pub const DEFAULT_PYTHON: &str = "^3.8";

/// Project metadata rendered into the manifest header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    name: String,
    version: String,
    description: String,
    authors: Vec<String>,
    python: String,
}

impl ProjectMetadata {
    pub fn new(
        name: String,
        version: String,
        description: String,
        authors: Vec<String>,
        python: String,
    ) -> Self {
        Self {
            name,
            version,
            description,
            authors,
            python,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn python(&self) -> &str {
        &self.python
    }
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAME.to_string(),
            DEFAULT_VERSION.to_string(),
            DEFAULT_DESCRIPTION.to_string(),
            vec![DEFAULT_AUTHOR.to_string()],
            DEFAULT_PYTHON.to_string(),
        )
    }
}
