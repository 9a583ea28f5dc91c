mod cli;

use cli::Args;
use req2pyproject::config::{discover_config, load_config_from_path, ConfigFile};
use req2pyproject::prelude::*;
use req2pyproject::shared::error::ExitCode;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let metadata = resolve_metadata(&args)?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = ConvertRequirementsUseCase::new(
        FileSystemReader::new(),
        PoetryFormatter::new(),
        &progress_reporter,
    );

    let request = ConvertRequest::new(args.input, metadata);
    let response = use_case.execute(request);

    let presenter_type = PresenterType::from_output_arg(&args.output);
    let presenter = PresenterFactory::create(presenter_type.clone());
    presenter.present(&response.manifest)?;

    if let PresenterType::File(path) = presenter_type {
        progress_reporter
            .report_completion(&format!("✅ Successfully generated {}", path.display()));
    }

    Ok(())
}

/// Builds header metadata: placeholders, then the config file, then CLI flags
fn resolve_metadata(args: &Args) -> Result<ProjectMetadata> {
    let config = load_config(args.config.as_deref())?;

    let mut metadata = config
        .map(|c| c.apply_to(ProjectMetadata::default()))
        .unwrap_or_default();
    if let Some(name) = &args.project_name {
        metadata = metadata.with_name(name);
    }

    Ok(metadata)
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}
