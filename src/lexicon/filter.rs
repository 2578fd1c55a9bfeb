//! Narrowing the lexicon before listing or decomposition.
//!
//! Each active criterion is a linear scan; the result is sorted by surface
//! form whenever any criterion was applied.

use std::collections::BTreeSet;

use super::entry::{Category, LexiconEntry};

/// Criteria for narrowing a lexicon. All set criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconFilter {
    /// Surface form starts with this (case-insensitive).
    pub prefix: Option<String>,
    /// Surface form contains this (case-insensitive).
    pub contains: Option<String>,
    /// Gloss contains this (case-insensitive).
    pub meaning: Option<String>,
    /// Exact category.
    pub category: Option<Category>,
}

impl LexiconFilter {
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    pub fn with_contains(mut self, needle: &str) -> Self {
        self.contains = Some(needle.to_string());
        self
    }

    pub fn with_meaning(mut self, meaning: &str) -> Self {
        self.meaning = Some(meaning.to_string());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        non_blank(&self.prefix).is_none()
            && non_blank(&self.contains).is_none()
            && non_blank(&self.meaning).is_none()
            && self.category.is_none()
    }

    /// Check a single entry against every set criterion.
    pub fn matches(&self, entry: &LexiconEntry) -> bool {
        let surface = entry.surface.to_lowercase();

        if let Some(prefix) = non_blank(&self.prefix)
            && !surface.starts_with(&prefix.to_lowercase())
        {
            return false;
        }
        if let Some(needle) = non_blank(&self.contains)
            && !surface.contains(&needle.to_lowercase())
        {
            return false;
        }
        if let Some(meaning) = non_blank(&self.meaning)
            && !entry.gloss.to_lowercase().contains(&meaning.to_lowercase())
        {
            return false;
        }
        if let Some(category) = &self.category
            && entry.category.as_ref() != Some(category)
        {
            return false;
        }
        true
    }

    /// Apply the filter. Lexicon order is kept when no criterion is set.
    pub fn apply(&self, entries: &[LexiconEntry]) -> Vec<LexiconEntry> {
        if self.is_empty() {
            return entries.to_vec();
        }
        let mut narrowed: Vec<LexiconEntry> = entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        narrowed.sort_by(|a, b| a.surface.cmp(&b.surface));
        narrowed
    }
}

/// Empty strings count as "not set", like an omitted flag.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Distinct category labels present in the lexicon, sorted.
/// Entries without a category are not listed.
pub fn categories(entries: &[LexiconEntry]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| entry.category.as_ref())
        .map(|category| category.label().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
