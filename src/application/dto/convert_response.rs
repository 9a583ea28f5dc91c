use crate::conversion::domain::{ConversionWarning, DependencySet};

/// ConvertResponse - Response DTO from the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    /// Deduplicated dependencies in output order
    pub dependencies: DependencySet,
    /// Rendered manifest text
    pub manifest: String,
    /// Every recoverable anomaly, in the order it was reported
    pub warnings: Vec<ConversionWarning>,
    /// Number of raw requirement lines collected across all files
    pub requirement_line_count: usize,
}

impl ConvertResponse {
    pub fn new(
        dependencies: DependencySet,
        manifest: String,
        warnings: Vec<ConversionWarning>,
        requirement_line_count: usize,
    ) -> Self {
        Self {
            dependencies,
            manifest,
            warnings,
            requirement_line_count,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
