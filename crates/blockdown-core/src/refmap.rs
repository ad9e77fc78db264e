//! The link-reference accumulator.
//!
//! Reference definitions (`[label]: url "title"`) are consumed into this
//! map as their containers close; they never appear in the block AST.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Normalize a reference label: lowercase, collapse whitespace runs to one
/// space, trim the ends.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Map from normalized link label to `(url, title)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceMap {
    map: HashMap<String, (String, String)>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition. Insertion is unconditional: a duplicate label
    /// silently overwrites the earlier definition.
    pub fn insert(&mut self, label: &str, url: impl Into<String>, title: impl Into<String>) {
        self.map
            .insert(normalize_label(label), (url.into(), title.into()));
    }

    /// Look up a label (normalized before the lookup).
    pub fn lookup(&self, label: &str) -> Option<&(String, String)> {
        self.map.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(normalized_label, (url, title))` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &(String, String))> {
        self.map.iter()
    }
}
