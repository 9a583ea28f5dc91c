/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod manifest_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod requirement_source;

pub use manifest_formatter::ManifestFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use requirement_source::RequirementSource;
