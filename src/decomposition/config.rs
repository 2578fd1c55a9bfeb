//! Configuration for decomposition requests.

use serde::{Deserialize, Serialize};

use crate::errors::DecomposeError;

/// Default cap on the number of nodes a single forest may contain.
pub const DEFAULT_MAX_NODES: usize = 100_000;

/// Default cap on term length, in characters.
pub const DEFAULT_MAX_TERM_CHARS: usize = 64;

/// How many positions are recorded for an entry that occurs more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Only the lowest start position.
    #[default]
    #[serde(rename = "first")]
    FirstOnly,
    /// Every start position, overlapping matches included.
    #[serde(rename = "every")]
    EveryPosition,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::FirstOnly => write!(f, "first"),
            MatchPolicy::EveryPosition => write!(f, "every"),
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(MatchPolicy::FirstOnly),
            "every" => Ok(MatchPolicy::EveryPosition),
            _ => anyhow::bail!("Invalid match policy '{}'. Valid values: first, every", s),
        }
    }
}

/// Limits and matching behaviour for one decomposition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecompositionConfig {
    /// Which occurrence positions are recorded per entry.
    pub match_policy: MatchPolicy,
    /// Maximum nodes in the forest. `None` means unbounded.
    pub max_nodes: Option<usize>,
    /// Maximum term length in characters. `None` means unbounded.
    pub max_term_chars: Option<usize>,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::FirstOnly,
            max_nodes: Some(DEFAULT_MAX_NODES),
            max_term_chars: Some(DEFAULT_MAX_TERM_CHARS),
        }
    }
}

impl DecompositionConfig {
    /// No limits and first-position matching.
    pub fn unbounded() -> Self {
        Self {
            match_policy: MatchPolicy::FirstOnly,
            max_nodes: None,
            max_term_chars: None,
        }
    }

    pub fn set_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }

    /// Set the node budget. Zero removes the limit.
    pub fn set_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = (max > 0).then_some(max);
        self
    }

    /// Set the term length limit. Zero removes the limit.
    pub fn set_max_term_chars(mut self, max: usize) -> Self {
        self.max_term_chars = (max > 0).then_some(max);
        self
    }

    /// Reject terms longer than the configured limit.
    pub fn check_term(&self, term: &str) -> Result<(), DecomposeError> {
        if let Some(max) = self.max_term_chars {
            let len = term.chars().count();
            if len > max {
                return Err(DecomposeError::TermTooLong { len, max });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecompositionConfig::default();
        assert_eq!(config.match_policy, MatchPolicy::FirstOnly);
        assert_eq!(config.max_nodes, Some(DEFAULT_MAX_NODES));
        assert_eq!(config.max_term_chars, Some(DEFAULT_MAX_TERM_CHARS));
    }

    #[test]
    fn test_unbounded_config() {
        let config = DecompositionConfig::unbounded();
        assert_eq!(config.max_nodes, None);
        assert!(config.check_term(&"a".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DecompositionConfig::default()
            .set_match_policy(MatchPolicy::EveryPosition)
            .set_max_nodes(50)
            .set_max_term_chars(0);
        assert_eq!(config.match_policy, MatchPolicy::EveryPosition);
        assert_eq!(config.max_nodes, Some(50));
        assert_eq!(config.max_term_chars, None);
    }

    #[test]
    fn test_check_term_counts_characters() {
        let config = DecompositionConfig::default().set_max_term_chars(4);
        assert!(config.check_term("derm").is_ok());
        assert!(config.check_term("ñañá").is_ok());
        let err = config.check_term("dermis").unwrap_err();
        assert!(matches!(
            err,
            DecomposeError::TermTooLong { len: 6, max: 4 }
        ));
    }

    #[test]
    fn test_match_policy_from_str() {
        assert_eq!(
            "first".parse::<MatchPolicy>().unwrap(),
            MatchPolicy::FirstOnly
        );
        assert_eq!(
            "EVERY".parse::<MatchPolicy>().unwrap(),
            MatchPolicy::EveryPosition
        );
        let err = "all".parse::<MatchPolicy>().unwrap_err();
        assert!(err.to_string().contains("Invalid match policy"));
    }

    #[test]
    fn test_match_policy_display_round_trips() {
        for policy in [MatchPolicy::FirstOnly, MatchPolicy::EveryPosition] {
            assert_eq!(policy.to_string().parse::<MatchPolicy>().unwrap(), policy);
        }
    }
}
