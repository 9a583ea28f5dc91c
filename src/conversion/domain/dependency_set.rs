use super::Requirement;
use indexmap::IndexMap;

/// Insertion-ordered mapping from package identity to version constraint.
///
/// Inserting a package that is already present replaces its constraint but
/// keeps the entry at the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    entries: IndexMap<String, Option<String>>,
}

impl DependencySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a requirement (last write wins).
    ///
    /// # Returns
    /// The constraint it replaced, if the package was already present
    pub fn insert(&mut self, requirement: Requirement) -> Option<Option<String>> {
        let (package, constraint) = requirement.into_parts();
        self.entries.insert(package, constraint)
    }

    pub fn get(&self, package: &str) -> Option<Option<&str>> {
        self.entries.get(package).map(|c| c.as_deref())
    }

    pub fn contains(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(package, constraint)` pairs in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(package, constraint)| (package.as_str(), constraint.as_deref()))
    }
}

impl FromIterator<Requirement> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Requirement>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Requirement> for DependencySet {
    fn extend<I: IntoIterator<Item = Requirement>>(&mut self, iter: I) {
        for requirement in iter {
            self.insert(requirement);
        }
    }
}
