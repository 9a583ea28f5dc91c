use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::conversion::domain::{ConversionWarning, DependencySet, Requirement};
use crate::conversion::services::{IncludeResolver, RequirementParser};
use crate::ports::outbound::{ManifestFormatter, ProgressReporter, RequirementSource};

/// ConvertRequirementsUseCase - Converts a requirements file into a manifest
///
/// Orchestrates include resolution, line parsing, deduplication and
/// rendering, using generic dependency injection for infrastructure.
///
/// # Type Parameters
/// * `RS` - RequirementSource implementation
/// * `MF` - ManifestFormatter implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertRequirementsUseCase<RS, MF, PR> {
    requirement_source: RS,
    manifest_formatter: MF,
    progress_reporter: PR,
}

impl<RS, MF, PR> ConvertRequirementsUseCase<RS, MF, PR>
where
    RS: RequirementSource,
    MF: ManifestFormatter,
    PR: ProgressReporter,
{
    /// Creates a new ConvertRequirementsUseCase with injected dependencies
    pub fn new(requirement_source: RS, manifest_formatter: MF, progress_reporter: PR) -> Self {
        Self {
            requirement_source,
            manifest_formatter,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// Never fails: every anomaly in the input is reported as a warning
    /// and the manifest is built from whatever could be parsed.
    pub fn execute(&self, request: ConvertRequest) -> ConvertResponse {
        let mut warnings = Vec::new();

        // Step 1: Flatten the include tree
        let lines = self.resolve_requirement_lines(&request, &mut warnings);
        let requirement_line_count = lines.len();

        // Step 2: Parse and deduplicate
        let dependencies = self.build_dependency_set(&lines, &mut warnings);
        self.progress_reporter.report(&format!(
            "✅ Detected {} requirement line(s), {} unique package(s)",
            requirement_line_count,
            dependencies.len()
        ));

        // Step 3: Render and sanity-check the manifest
        let manifest = self
            .manifest_formatter
            .format(&request.metadata, &dependencies);
        if let Err(e) = manifest.parse::<toml::Table>() {
            self.warn(
                &mut warnings,
                ConversionWarning::InvalidManifest {
                    details: e.message().to_string(),
                },
            );
        }

        ConvertResponse::new(dependencies, manifest, warnings, requirement_line_count)
    }

    fn resolve_requirement_lines(
        &self,
        request: &ConvertRequest,
        warnings: &mut Vec<ConversionWarning>,
    ) -> Vec<String> {
        self.progress_reporter.report(&format!(
            "📖 Loading requirements from: {}",
            request.input_path.display()
        ));

        let resolution = IncludeResolver::new(&self.requirement_source).resolve(&request.input_path);
        for warning in resolution.warnings {
            self.warn(warnings, warning);
        }

        resolution.lines
    }

    fn build_dependency_set(
        &self,
        lines: &[String],
        warnings: &mut Vec<ConversionWarning>,
    ) -> DependencySet {
        let mut dependencies = DependencySet::new();

        for line in lines {
            let requirement = match RequirementParser::parse(line) {
                Some(requirement) => requirement,
                None => {
                    self.warn(
                        warnings,
                        ConversionWarning::UnparseableLine { line: line.clone() },
                    );
                    Requirement::verbatim(line)
                }
            };
            dependencies.insert(requirement);
        }

        dependencies
    }

    /// Reports a warning immediately and records it for the response
    fn warn(&self, warnings: &mut Vec<ConversionWarning>, warning: ConversionWarning) {
        self.progress_reporter
            .report_error(&format!("⚠️  Warning: {}", warning));
        warnings.push(warning);
    }
}
