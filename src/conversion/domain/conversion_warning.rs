use std::fmt;
use std::path::PathBuf;

/// A recoverable anomaly found while converting.
///
/// None of these abort the run; each is printed as a diagnostic and the
/// conversion continues with whatever could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionWarning {
    /// The file was already visited during this resolution
    CircularInclude { path: PathBuf },
    /// A top-level or nested requirements file does not exist
    MissingFile { path: PathBuf },
    /// The file exists but could not be read
    UnreadableFile { path: PathBuf, details: String },
    /// An include directive without exactly one path argument
    MalformedInclude { line: String },
    /// A requirement line that does not look like `name[extras]spec`
    UnparseableLine { line: String },
    /// The rendered manifest does not parse as TOML
    InvalidManifest { details: String },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::CircularInclude { path } => write!(
                f,
                "Already parsed {}, skipping to avoid circular includes.",
                path.display()
            ),
            ConversionWarning::MissingFile { path } => {
                write!(f, "{} does not exist. Skipping.", path.display())
            }
            ConversionWarning::UnreadableFile { path, details } => write!(
                f,
                "Could not read {}: {}. Skipping.",
                path.display(),
                details
            ),
            ConversionWarning::MalformedInclude { line } => {
                write!(f, "Unrecognized requirement line: {}", line)
            }
            ConversionWarning::UnparseableLine { line } => {
                write!(f, "Could not parse requirement line: {}", line)
            }
            ConversionWarning::InvalidManifest { details } => write!(
                f,
                "Generated manifest is not valid TOML (quotes and duplicate keys are not escaped): {}",
                details
            ),
        }
    }
}
