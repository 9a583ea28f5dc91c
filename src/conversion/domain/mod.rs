pub mod conversion_warning;
pub mod dependency_set;
pub mod project_metadata;
pub mod requirement;

pub use conversion_warning::ConversionWarning;
pub use dependency_set::DependencySet;
pub use project_metadata::ProjectMetadata;
pub use requirement::Requirement;
