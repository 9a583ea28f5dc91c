use std::fmt;

/// A single dependency declaration: a package identity and an optional
/// version constraint.
///
/// The package keeps any extras suffix verbatim (`foo[socks,security]`),
/// so `foo` and `foo[socks]` are distinct identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    package: String,
    constraint: Option<String>,
}

impl Requirement {
    pub fn new(package: impl Into<String>, constraint: Option<String>) -> Self {
        Self {
            package: package.into(),
            constraint,
        }
    }

    /// Builds a requirement that carries a whole unparseable line as its
    /// package, with no constraint.
    pub fn verbatim(line: &str) -> Self {
        Self::new(line, None)
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.package, self.constraint)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.constraint {
            Some(constraint) => write!(f, "{}{}", self.package, constraint),
            None => write!(f, "{}", self.package),
        }
    }
}
