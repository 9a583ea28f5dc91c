use clap::Parser;
use std::path::PathBuf;

/// Conventional input file name
pub const DEFAULT_INPUT: &str = "requirements.txt";

/// Conventional output file name
pub const DEFAULT_OUTPUT: &str = "pyproject.toml";

/// Convert requirements.txt (with nested -r) to pyproject.toml for Poetry
#[derive(Parser, Debug)]
#[command(name = "req2pyproject")]
#[command(version)]
#[command(
    about = "Convert requirements.txt (with nested -r) to pyproject.toml for Poetry",
    long_about = None
)]
pub struct Args {
    /// Path to the requirements.txt file
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to the output pyproject.toml file ("-" writes to stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Path to a config file (defaults to ./req2pyproject.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project name for the manifest header (overrides the config file)
    #[arg(long, value_name = "NAME")]
    pub project_name: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["req2pyproject"]).unwrap();
        assert_eq!(args.input, PathBuf::from("requirements.txt"));
        assert_eq!(args.output, "pyproject.toml");
        assert!(args.config.is_none());
        assert!(args.project_name.is_none());
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from([
            "req2pyproject",
            "-i",
            "reqs/prod.txt",
            "-o",
            "-",
            "-c",
            "conf.yml",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("reqs/prod.txt"));
        assert_eq!(args.output, "-");
        assert_eq!(args.config, Some(PathBuf::from("conf.yml")));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "req2pyproject",
            "--input",
            "in.txt",
            "--output",
            "out.toml",
            "--project-name",
            "demo",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, "out.toml");
        assert_eq!(args.project_name.as_deref(), Some("demo"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["req2pyproject", "--format", "json"]);
        assert!(result.is_err());
    }
}
