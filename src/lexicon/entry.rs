//! Lexicon entry and category types.

use serde::{Serialize, Serializer};

use crate::errors::LexiconError;

/// Category of a sub-word unit.
///
/// | Code  | Label       |
/// |-------|-------------|
/// | `wr`  | Word Root   |
/// | `suf` | Suffix      |
/// | `pre` | Prefix      |
/// | `ba`  | Body Axis   |
/// | `pos` | Position    |
///
/// Labels found in a lexicon file that match none of the above are kept
/// verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    WordRoot,
    Suffix,
    Prefix,
    BodyAxis,
    Position,
    Other(String),
}

impl Category {
    /// The full label as written in lexicon files.
    pub fn label(&self) -> &str {
        match self {
            Category::WordRoot => "Word Root",
            Category::Suffix => "Suffix",
            Category::Prefix => "Prefix",
            Category::BodyAxis => "Body Axis",
            Category::Position => "Position",
            Category::Other(label) => label,
        }
    }

    /// Short code accepted on the command line, if the category has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Category::WordRoot => Some("wr"),
            Category::Suffix => Some("suf"),
            Category::Prefix => Some("pre"),
            Category::BodyAxis => Some("ba"),
            Category::Position => Some("pos"),
            Category::Other(_) => None,
        }
    }

    /// Interpret a category cell from a lexicon file.
    ///
    /// Empty cells mean "no category". Unknown labels become `Other`.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(category) => Some(category),
            Err(_) => Some(Category::Other(trimmed.to_string())),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = LexiconError;

    /// Accepts either the short code or the full label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wr" | "word root" => Ok(Category::WordRoot),
            "suf" | "suffix" => Ok(Category::Suffix),
            "pre" | "prefix" => Ok(Category::Prefix),
            "ba" | "body axis" => Ok(Category::BodyAxis),
            "pos" | "position" => Ok(Category::Position),
            _ => Err(LexiconError::UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A tagged sub-word unit: root, prefix, suffix or similar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    /// Surface form with hyphens and spaces removed (e.g. "derm" for "derm-").
    pub surface: String,
    /// Meaning of the unit.
    pub gloss: String,
    /// Language of origin (e.g. "Greek", "Latin").
    pub origin: String,
    /// Category, or `None` when the lexicon leaves it blank.
    pub category: Option<Category>,
}

impl LexiconEntry {
    /// Create an entry, normalizing the surface form.
    pub fn new(surface: &str, gloss: &str, origin: &str, category: Option<Category>) -> Self {
        Self {
            surface: normalize_surface(surface),
            gloss: gloss.to_string(),
            origin: origin.to_string(),
            category,
        }
    }

    /// Label of the category, or an empty string.
    pub fn category_label(&self) -> &str {
        self.category.as_ref().map_or("", Category::label)
    }
}

/// Strip the hyphens and spaces lexicon files use to mark attachment points.
pub fn normalize_surface(raw: &str) -> String {
    raw.chars().filter(|c| *c != '-' && *c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code_and_label() {
        assert_eq!("wr".parse::<Category>().unwrap(), Category::WordRoot);
        assert_eq!("SUF".parse::<Category>().unwrap(), Category::Suffix);
        assert_eq!("Prefix".parse::<Category>().unwrap(), Category::Prefix);
        assert_eq!("body axis".parse::<Category>().unwrap(), Category::BodyAxis);
        assert_eq!(" pos ".parse::<Category>().unwrap(), Category::Position);
    }

    #[test]
    fn test_category_from_str_invalid() {
        let err = "verb".parse::<Category>().unwrap_err();
        match err {
            LexiconError::UnknownCategory(label) => assert_eq!(label, "verb"),
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_category_from_label_keeps_unknown() {
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("   "), None);
        assert_eq!(Category::from_label("Word Root"), Some(Category::WordRoot));
        assert_eq!(
            Category::from_label("Combining Form"),
            Some(Category::Other("Combining Form".to_string()))
        );
    }

    #[test]
    fn test_category_display_and_code() {
        assert_eq!(Category::BodyAxis.to_string(), "Body Axis");
        assert_eq!(Category::BodyAxis.code(), Some("ba"));
        assert_eq!(Category::Other("X".into()).code(), None);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::WordRoot).unwrap();
        assert_eq!(json, "\"Word Root\"");
    }

    #[test]
    fn test_entry_strips_hyphens_and_spaces() {
        let entry = LexiconEntry::new("-it is", "inflammation", "Greek", Some(Category::Suffix));
        assert_eq!(entry.surface, "itis");
        assert_eq!(entry.category_label(), "Suffix");
    }

    #[test]
    fn test_entry_without_category() {
        let entry = LexiconEntry::new("derm-", "skin", "Greek", None);
        assert_eq!(entry.surface, "derm");
        assert_eq!(entry.category_label(), "");
    }
}
