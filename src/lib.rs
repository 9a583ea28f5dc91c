//! req2pyproject - convert requirements.txt files into a Poetry pyproject.toml
//!
//! Reads a requirements file, follows nested `-r` / `--requirement`
//! includes, deduplicates packages (last pin wins, first position kept)
//! and renders a `pyproject.toml` for Poetry.
//!
//! # Architecture
//!
//! - **Domain Layer** (`conversion`): requirement model, include resolution, line parsing
//! - **Application Layer** (`application`): the conversion use case and its DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, console and formatter implementations
//! - **Shared** (`shared`): error types and security checks
//!
//! # Example
//!
//! ```no_run
//! use req2pyproject::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertRequirementsUseCase::new(
//!     FileSystemReader::new(),
//!     PoetryFormatter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ConvertRequest::new(PathBuf::from("requirements.txt"), ProjectMetadata::default());
//! let response = use_case.execute(request);
//!
//! FileSystemWriter::new(PathBuf::from("pyproject.toml")).present(&response.manifest)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod conversion;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::PoetryFormatter;
    pub use crate::application::dto::{ConvertRequest, ConvertResponse};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::ConvertRequirementsUseCase;
    pub use crate::conversion::domain::{
        ConversionWarning, DependencySet, ProjectMetadata, Requirement,
    };
    pub use crate::conversion::services::{IncludeResolver, RequirementParser, Resolution};
    pub use crate::ports::outbound::{
        ManifestFormatter, OutputPresenter, ProgressReporter, RequirementSource,
    };
    pub use crate::shared::Result;
}
