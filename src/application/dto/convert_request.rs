use crate::conversion::domain::ProjectMetadata;
use std::path::PathBuf;

/// ConvertRequest - Request DTO for the conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Path to the top-level requirements file
    pub input_path: PathBuf,
    /// Metadata for the manifest header block
    pub metadata: ProjectMetadata,
}

impl ConvertRequest {
    pub fn new(input_path: PathBuf, metadata: ProjectMetadata) -> Self {
        Self {
            input_path,
            metadata,
        }
    }
}
