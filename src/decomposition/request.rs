//! One decomposition request, from lexicon and term to forest.

use serde::Serialize;
use tracing::{debug, info_span};

use super::config::DecompositionConfig;
use super::forest::{ForestBuilder, ParseForest};
use super::occurrence::{Occurrence, OccurrenceIndex, find_occurrences_with};
use crate::errors::DecomposeError;
use crate::lexicon::LexiconEntry;

/// Everything produced for a single term.
#[derive(Debug, Clone, Serialize)]
pub struct Decomposition<'a> {
    pub term: String,
    /// Occurrences in lexicon order.
    pub occurrences: Vec<Occurrence<'a>>,
    #[serde(skip)]
    pub index: OccurrenceIndex<'a>,
    pub forest: ParseForest<'a>,
}

impl Decomposition<'_> {
    /// True when no lexicon entry occurs in the term.
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }
}

/// Index `term` against `lexicon` and build its forest within the limits of `config`.
pub fn decompose<'a>(
    lexicon: &'a [LexiconEntry],
    term: &str,
    config: &DecompositionConfig,
) -> Result<Decomposition<'a>, DecomposeError> {
    let _span = info_span!("decompose", term).entered();
    config.check_term(term)?;

    let (index, occurrences) = find_occurrences_with(lexicon, term, config.match_policy);
    let forest = ForestBuilder::new(&index)
        .with_max_nodes(config.max_nodes)
        .build()?;

    let nodes = forest.node_count();
    let decompositions = forest.leaf_count();
    debug!(nodes, decompositions, "decomposition complete");

    Ok(Decomposition {
        term: term.to_string(),
        occurrences,
        index,
        forest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::config::MatchPolicy;
    use crate::lexicon::Category;

    fn medical() -> Vec<LexiconEntry> {
        vec![
            LexiconEntry::new("derm-", "skin", "Greek", Some(Category::WordRoot)),
            LexiconEntry::new("-itis", "inflammation", "Greek", Some(Category::Suffix)),
            LexiconEntry::new("-osis", "condition", "Greek", Some(Category::Suffix)),
        ]
    }

    #[test]
    fn test_decompose_dermatitis() {
        let lexicon = medical();
        let result = decompose(&lexicon, "dermatitis", &DecompositionConfig::default()).unwrap();
        assert!(!result.is_empty());
        assert_eq!(result.occurrences.len(), 2);
        assert_eq!(result.index.first_position(), Some(0));
        assert_eq!(result.forest.len(), 1);
        assert_eq!(result.forest.leaf_count(), 1);
    }

    #[test]
    fn test_decompose_no_coverage_is_not_an_error() {
        let lexicon = medical();
        let result = decompose(&lexicon, "xylophone", &DecompositionConfig::default()).unwrap();
        assert!(result.is_empty());
        assert!(result.occurrences.is_empty());
    }

    #[test]
    fn test_decompose_rejects_long_term() {
        let lexicon = medical();
        let config = DecompositionConfig::default().set_max_term_chars(5);
        let err = decompose(&lexicon, "dermatitis", &config).unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::TermTooLong { len: 10, max: 5 }
        ));
    }

    #[test]
    fn test_decompose_applies_node_budget() {
        let lexicon: Vec<LexiconEntry> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| LexiconEntry::new(s, "", "", None))
            .collect();
        let config = DecompositionConfig::default().set_max_nodes(3);
        let err = decompose(&lexicon, "abcde", &config).unwrap_err();
        assert!(matches!(err, DecomposeError::ResourceExceeded { .. }));
        assert!(err.to_string().contains("node budget of 3"));
    }

    #[test]
    fn test_decompose_every_position_policy() {
        let lexicon = vec![
            LexiconEntry::new("a", "", "", None),
            LexiconEntry::new("n", "", "", None),
        ];
        let config = DecompositionConfig::default().set_match_policy(MatchPolicy::EveryPosition);
        let result = decompose(&lexicon, "banana", &config).unwrap();
        assert_eq!(result.occurrences.len(), 5);
        assert_eq!(result.index.first_position(), Some(1));
    }

    #[test]
    fn test_decomposition_serializes_forest() {
        let lexicon = medical();
        let result = decompose(&lexicon, "dermatitis", &DecompositionConfig::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["term"], "dermatitis");
        assert_eq!(json["occurrences"][1]["entry"]["surface"], "itis");
        let root = &json["forest"]["trees"][0]["root"];
        assert_eq!(root["occurrence"]["start"], 0);
        assert_eq!(
            root["children"][0]["occurrence"]["entry"]["gloss"],
            "inflammation"
        );
        assert!(json.get("index").is_none());
    }
}
