use crate::conversion::domain::{DependencySet, ProjectMetadata};

/// ManifestFormatter port for rendering the package-manager manifest
pub trait ManifestFormatter {
    /// Renders the manifest text
    ///
    /// # Arguments
    /// * `metadata` - Values for the project header block
    /// * `dependencies` - Dependencies in output order
    fn format(&self, metadata: &ProjectMetadata, dependencies: &DependencySet) -> String;
}
