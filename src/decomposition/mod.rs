//! Term decomposition against the lexicon.
//!
//! This module finds every way a term can be read as a left-to-right
//! sequence of lexicon entries:
//!
//! - **Occurrence index**: where each entry first appears in the term
//! - **Forest building**: breadth-first expansion of those occurrences into
//!   decomposition trees, one per occurrence at the earliest position
//! - **Rendering**: an indented outline of each tree
//!
//! Gaps between matched units are allowed and nothing checks that the whole
//! term is covered.
//!
//! ## Example
//!
//! ```
//! use wordroot::decomposition::{build_forest, find_occurrences, outline};
//! use wordroot::lexicon::LexiconEntry;
//!
//! let lexicon = vec![
//!     LexiconEntry::new("derm-", "skin", "Greek", None),
//!     LexiconEntry::new("-itis", "inflammation", "Greek", None),
//! ];
//! let (index, _) = find_occurrences(&lexicon, "dermatitis");
//! let forest = build_forest(&index, "dermatitis");
//!
//! assert_eq!(outline(&forest.trees[0]), "derm\n\titis\n");
//! ```

mod config;
mod forest;
mod occurrence;
mod render;
mod request;

pub use config::{DEFAULT_MAX_NODES, DEFAULT_MAX_TERM_CHARS, DecompositionConfig, MatchPolicy};
pub use forest::{ForestBuilder, ParseForest, ParseNode, ParseTree, PreOrder, build_forest};
pub use occurrence::{Occurrence, OccurrenceIndex, find_occurrences, find_occurrences_with};
pub use render::{RenderedLine, outline, render};
pub use request::{Decomposition, decompose};
