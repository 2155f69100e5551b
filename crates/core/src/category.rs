//! Category Registry
//!
//! Holds the fixed, ordered set of category names a skill knows about. Lookups
//! are case-insensitive and require an exact match after normalization, so a
//! category such as `old` never matches input like `told`.

use crate::random::RandomSource;
use std::collections::HashSet;

/// The ordered list of valid categories for a skill.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl CategoryRegistry {
    /// Creates a registry from category names. Names are lower-cased and
    /// duplicates are dropped while keeping the first occurrence's position.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut members = HashSet::new();
        for category in categories {
            let name = normalize(category.as_ref());
            if name.is_empty() {
                continue;
            }
            if members.insert(name.clone()) {
                ordered.push(name);
            }
        }
        Self { ordered, members }
    }

    /// Returns true if `candidate` names a registered category.
    pub fn is_valid_category(&self, candidate: &str) -> bool {
        self.members.contains(&normalize(candidate))
    }

    /// Picks one category uniformly at random.
    ///
    /// Returns `None` only when the registry is empty.
    pub fn random_category(&self, random: &dyn RandomSource) -> Option<&str> {
        crate::random::choose(random, &self.ordered).map(String::as_str)
    }

    /// All categories in registration order.
    pub fn list_categories(&self) -> &[String] {
        &self.ordered
    }

    /// The category list joined for use in spoken prompts, e.g. `fat, stupid, ugly`.
    pub fn joined(&self) -> String {
        self.ordered.join(", ")
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Lower-cases and trims a category candidate.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}
