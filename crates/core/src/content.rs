//! Content Table
//!
//! A read-only mapping from category name to the lines a skill can speak for
//! it. Tables are built once at startup, either from the built-in datasets in
//! [`crate::data`] or from a JSON file, and shared across requests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse content JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Category name -> ordered content lines.
#[derive(Debug, Clone, Default)]
pub struct ContentTable {
    entries: HashMap<String, Vec<String>>,
}

impl ContentTable {
    /// Builds a table from owned entries. Category keys are lower-cased; entries
    /// whose keys collide after normalization are concatenated.
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::new();
        for (category, items) in entries {
            normalized
                .entry(crate::category::normalize(&category))
                .or_default()
                .extend(items);
        }
        Self {
            entries: normalized,
        }
    }

    /// Builds a table from one of the static datasets.
    pub fn from_static(table: &[(&str, &[&str])]) -> Self {
        let entries = table
            .iter()
            .map(|(category, items)| {
                (
                    category.to_string(),
                    items.iter().map(|item| item.to_string()).collect(),
                )
            })
            .collect();
        Self::new(entries)
    }

    /// Parses a JSON object of the form `{"category": ["line", ...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let entries: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Reads and parses a JSON content file.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The content lines for `category`, empty if the category has none.
    pub fn items(&self, category: &str) -> &[String] {
        self.entries
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories that have an entry in the table, in no particular order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
