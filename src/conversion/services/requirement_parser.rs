use crate::conversion::domain::Requirement;
use regex::Regex;
use std::sync::LazyLock;

/// `name[extra,extra] <spec>`: group 1 is the package (extras kept), group 2
/// is everything after it.
static REQUIREMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_\-.]+(?:\[[A-Za-z0-9_,\-.]+\])?)\s*(.*)$")
        .expect("requirement pattern is a valid regex")
});

/// RequirementParser - Splits a raw requirement line into package and constraint
pub struct RequirementParser;

impl RequirementParser {
    /// Parses a requirement line
    ///
    /// # Arguments
    /// * `line` - A trimmed, non-empty requirement line
    ///
    /// # Returns
    /// `None` if the line does not start with a package identifier. The
    /// caller decides how to degrade (see [`Requirement::verbatim`]).
    pub fn parse(line: &str) -> Option<Requirement> {
        let captures = REQUIREMENT_PATTERN.captures(line)?;
        let package = captures.get(1)?.as_str();
        let constraint = captures
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Some(Requirement::new(package, constraint))
    }
}
