/// Result of trying to extend the work-type menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
    Blank,
}

/// Ordered menu of work-type labels shared by every project in the session.
///
/// Labels keep their insertion order and are matched verbatim. Whitespace is
/// not trimmed, so "鋼筋" and "鋼筋 " are two distinct entries.
#[derive(Debug, Clone)]
pub struct WorkTypeRegistry {
    types: Vec<String>,
}

impl WorkTypeRegistry {
    /// Builds a registry from the configured seed. Duplicate seed entries
    /// collapse to the first occurrence.
    pub fn new<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self { types: Vec::new() };
        for label in seed {
            registry.add(label.as_ref());
        }
        registry
    }

    pub fn list(&self) -> &[String] {
        &self.types
    }

    pub fn contains(&self, label: &str) -> bool {
        self.types.iter().any(|t| t == label)
    }

    /// Appends `label` unless it is empty or already present.
    pub fn add(&mut self, label: &str) -> AddOutcome {
        if label.is_empty() {
            return AddOutcome::Blank;
        }
        if self.contains(label) {
            return AddOutcome::AlreadyExists;
        }
        self.types.push(label.to_string());
        AddOutcome::Added
    }
}
