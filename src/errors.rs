//! Typed error hierarchy for wordroot.
//!
//! Two top-level enums cover the two subsystems:
//! - `LexiconError`: loading and interpreting the lexicon file
//! - `DecomposeError`: decomposition requests that exceed configured bounds
//!
//! "Not found" outcomes are never errors: an entry that does not occur in a
//! term is omitted, and a term with no occurrences yields an empty forest.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to open lexicon file at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read line {line} of {path}: {source}")]
    Read {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed row at line {line} of {path}: expected 4 columns, found {found}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        found: usize,
    },

    #[error("Unknown category '{0}'. Valid values: wr, suf, pre, ba, pos")]
    UnknownCategory(String),

    #[error("Lexicon file {path} contains no entries")]
    Empty { path: PathBuf },
}

/// Errors from a single decomposition request.
#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("Decomposition exceeded the node budget of {limit} nodes")]
    ResourceExceeded { limit: usize },

    #[error("Term is {len} characters long, maximum is {max}")]
    TermTooLong { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_error_malformed_row_carries_line() {
        let err = LexiconError::MalformedRow {
            path: PathBuf::from("/data/word_lists.csv"),
            line: 7,
            found: 2,
        };
        match &err {
            LexiconError::MalformedRow { line, found, .. } => {
                assert_eq!(*line, 7);
                assert_eq!(*found, 2);
            }
            _ => panic!("Expected MalformedRow"),
        }
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("word_lists.csv"));
    }

    #[test]
    fn lexicon_error_unknown_category_lists_codes() {
        let err = LexiconError::UnknownCategory("verb".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'verb'"));
        assert!(msg.contains("wr, suf, pre, ba, pos"));
    }

    #[test]
    fn decompose_error_resource_exceeded_carries_limit() {
        let err = DecomposeError::ResourceExceeded { limit: 500 };
        match &err {
            DecomposeError::ResourceExceeded { limit } => assert_eq!(*limit, 500),
            _ => panic!("Expected ResourceExceeded"),
        }
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn decompose_error_variants_are_distinct() {
        let budget = DecomposeError::ResourceExceeded { limit: 1 };
        let length = DecomposeError::TermTooLong { len: 90, max: 64 };
        assert!(matches!(budget, DecomposeError::ResourceExceeded { .. }));
        assert!(!matches!(length, DecomposeError::ResourceExceeded { .. }));
        assert!(length.to_string().contains("90"));
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&LexiconError::UnknownCategory("x".into()));
        assert_std_error(&DecomposeError::ResourceExceeded { limit: 5 });
    }
}
