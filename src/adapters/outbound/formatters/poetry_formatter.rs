use crate::conversion::domain::{DependencySet, ProjectMetadata};
use crate::ports::outbound::ManifestFormatter;

/// Version written for dependencies without a constraint
const ANY_VERSION: &str = "*";

/// Trailing build-system block, separated from the dependencies by two blank lines
const BUILD_SYSTEM_BLOCK: &str = "

[build-system]
requires = [\"poetry-core>=1.0.0\"]
build-backend = \"poetry.core.masonry.api\"
";

/// PoetryFormatter adapter for rendering a Poetry `pyproject.toml`
///
/// Values are written between double quotes as-is. A quote inside a
/// package name or constraint produces invalid TOML; the use case checks
/// the rendered text and warns about it.
pub struct PoetryFormatter;

impl PoetryFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(metadata: &ProjectMetadata) -> String {
        let authors = metadata
            .authors()
            .iter()
            .map(|author| format!("\"{}\"", author))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "[tool.poetry]\n\
             name = \"{}\"\n\
             version = \"{}\"\n\
             description = \"{}\"\n\
             authors = [{}]\n\
             \n\
             [tool.poetry.dependencies]\n\
             python = \"{}\"\n",
            metadata.name(),
            metadata.version(),
            metadata.description(),
            authors,
            metadata.python()
        )
    }
}

impl Default for PoetryFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestFormatter for PoetryFormatter {
    fn format(&self, metadata: &ProjectMetadata, dependencies: &DependencySet) -> String {
        let mut output = Self::render_header(metadata);

        for (package, constraint) in dependencies.iter() {
            output.push_str(&format!(
                "{} = \"{}\"\n",
                package,
                constraint.unwrap_or(ANY_VERSION)
            ));
        }

        output.push_str(BUILD_SYSTEM_BLOCK);
        output
    }
}
