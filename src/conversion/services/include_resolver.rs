use crate::conversion::domain::ConversionWarning;
use crate::ports::outbound::RequirementSource;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Tokens that start a nested include directive
const INCLUDE_DIRECTIVES: [&str; 2] = ["-r", "--requirement"];

/// Marker that starts a comment line
const COMMENT_MARKER: char = '#';

/// Flattened result of resolving a requirements file and its includes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Raw requirement lines in traversal order
    pub lines: Vec<String>,
    /// Recoverable anomalies in the order they were found
    pub warnings: Vec<ConversionWarning>,
}

/// IncludeResolver - Depth-first expansion of `-r` / `--requirement` includes
///
/// Each file is visited at most once per top-level [`resolve`](Self::resolve)
/// call. Missing, unreadable and circular includes contribute no lines and
/// are recorded as warnings.
pub struct IncludeResolver<'a, S> {
    source: &'a S,
}

impl<'a, S: RequirementSource> IncludeResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolves `path` and everything it includes
    pub fn resolve(&self, path: &Path) -> Resolution {
        let mut visited = HashSet::new();
        let mut resolution = Resolution::default();
        self.resolve_into(path, &mut visited, &mut resolution);
        resolution
    }

    /// Resolves `path`, sharing `visited` with earlier calls
    ///
    /// Files already in `visited` are reported as circular includes.
    pub fn resolve_into(
        &self,
        path: &Path,
        visited: &mut HashSet<PathBuf>,
        resolution: &mut Resolution,
    ) {
        let Some(canonical) = self.source.locate(path) else {
            resolution.warnings.push(ConversionWarning::MissingFile {
                path: absolute_for_display(path),
            });
            return;
        };

        if visited.contains(&canonical) {
            resolution
                .warnings
                .push(ConversionWarning::CircularInclude { path: canonical });
            return;
        }
        visited.insert(canonical.clone());

        let lines = match self.source.read_lines(&canonical) {
            Ok(lines) => lines,
            Err(e) => {
                resolution.warnings.push(ConversionWarning::UnreadableFile {
                    path: canonical,
                    details: e.to_string(),
                });
                return;
            }
        };

        // Includes are relative to where the file appears, not to a symlink target.
        let location = absolute_for_display(path);
        let base_dir = location.parent().unwrap_or(Path::new(""));

        for raw in lines {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }

            if is_include_directive(line) {
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.as_slice() {
                    [_, nested] => {
                        self.resolve_into(&base_dir.join(nested), visited, resolution)
                    }
                    _ => resolution.warnings.push(ConversionWarning::MalformedInclude {
                        line: line.to_string(),
                    }),
                }
            } else {
                resolution.lines.push(line.to_string());
            }
        }
    }
}

fn is_include_directive(line: &str) -> bool {
    INCLUDE_DIRECTIVES
        .iter()
        .any(|directive| line.starts_with(directive))
}

fn absolute_for_display(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
