//! Forest builder: every left-to-right decomposition reachable from the
//! earliest occurrence.
//!
//! A node's children are all occurrences at every occupied position from the
//! first one at or after the node's end through the end of the term. Each
//! child subtree is expanded on its own, so a later position reached from two
//! parents is expanded twice and the subtrees are duplicated, never shared.
//!
//! The number of nodes can grow exponentially with the number of overlapping
//! occurrences. [`build_forest`] applies no limit; use [`ForestBuilder`] with a
//! node budget for input you do not control.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::{debug, warn};

use super::occurrence::{Occurrence, OccurrenceIndex};
use crate::errors::DecomposeError;

/// One occurrence in a decomposition, with the decompositions that can follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode<'a> {
    pub occurrence: Occurrence<'a>,
    pub children: Vec<ParseNode<'a>>,
}

impl<'a> ParseNode<'a> {
    pub fn new(occurrence: Occurrence<'a>) -> Self {
        Self {
            occurrence,
            children: Vec::new(),
        }
    }

    pub fn surface(&self) -> &'a str {
        self.occurrence.surface()
    }

    pub fn start(&self) -> usize {
        self.occurrence.start
    }

    pub fn end(&self) -> usize {
        self.occurrence.end()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of leaves, i.e. complete decompositions through this node.
    pub fn leaf_count(&self) -> usize {
        self.iter().filter(|node| node.is_leaf()).count()
    }

    /// Longest root-to-leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Pre-order traversal of this subtree.
    pub fn iter(&self) -> PreOrder<'_, 'a> {
        PreOrder { stack: vec![self] }
    }
}

/// Pre-order iterator over a subtree: node before children, children in order.
pub struct PreOrder<'n, 'a> {
    stack: Vec<&'n ParseNode<'a>>,
}

impl<'n, 'a> Iterator for PreOrder<'n, 'a> {
    type Item = &'n ParseNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A single decomposition tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTree<'a> {
    pub root: ParseNode<'a>,
}

impl<'a> ParseTree<'a> {
    pub fn new(root: ParseNode<'a>) -> Self {
        Self { root }
    }
}

/// All decomposition trees rooted at the earliest occupied position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseForest<'a> {
    pub trees: Vec<ParseTree<'a>>,
}

impl<'a> ParseForest<'a> {
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseTree<'a>> {
        self.trees.iter()
    }

    pub fn node_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.root.node_count()).sum()
    }

    /// Number of complete decompositions across all trees.
    pub fn leaf_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.root.leaf_count()).sum()
    }

    pub fn max_depth(&self) -> usize {
        self.trees
            .iter()
            .map(|tree| tree.root.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<'f, 'a> IntoIterator for &'f ParseForest<'a> {
    type Item = &'f ParseTree<'a>;
    type IntoIter = std::slice::Iter<'f, ParseTree<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.iter()
    }
}

/// Build the complete forest for `term` with no node limit.
///
/// An empty index yields an empty forest. Subtrees are never shared, so the
/// node count can grow exponentially with the number of occupied positions;
/// use [`ForestBuilder::with_max_nodes`] for untrusted input.
pub fn build_forest<'a>(index: &OccurrenceIndex<'a>, term: &str) -> ParseForest<'a> {
    debug_assert_eq!(
        index.term_len(),
        term.chars().count(),
        "occurrence index was built for a different term"
    );
    match ForestBuilder::new(index).build() {
        Ok(forest) => forest,
        Err(err) => unreachable!("forest builder without a node budget failed: {err}"),
    }
}

/// Breadth-first forest expansion with an optional node budget.
///
/// Positions are bounded by the term length recorded in the index.
pub struct ForestBuilder<'i, 'a> {
    index: &'i OccurrenceIndex<'a>,
    max_nodes: Option<usize>,
}

/// Arena slot used while expanding; children refer to later slots.
struct Slot<'a> {
    occurrence: Occurrence<'a>,
    children: Vec<usize>,
}

impl<'i, 'a> ForestBuilder<'i, 'a> {
    pub fn new(index: &'i OccurrenceIndex<'a>) -> Self {
        Self {
            index,
            max_nodes: None,
        }
    }

    /// Fail with `ResourceExceeded` once more than `max_nodes` nodes would exist.
    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn build(&self) -> Result<ParseForest<'a>, DecomposeError> {
        let Some(first) = self.index.first_position() else {
            debug!("occurrence index is empty, no decomposition");
            return Ok(ParseForest::default());
        };

        let mut arena: Vec<Slot<'a>> = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut roots = Vec::new();

        for occurrence in self.index.at(first) {
            let id = self.alloc(&mut arena, *occurrence)?;
            roots.push(id);
            queue.push_back(id);
        }

        while let Some(id) = queue.pop_front() {
            let end = arena[id].occurrence.end();
            let Some(next) = self.index.next_position(end) else {
                continue;
            };

            for (_, occurrences) in self.index.positions_from(next) {
                for occurrence in occurrences {
                    let child = self.alloc(&mut arena, *occurrence)?;
                    arena[id].children.push(child);
                    queue.push_back(child);
                }
            }
        }

        debug!(roots = roots.len(), nodes = arena.len(), "expanded forest");
        Ok(ParseForest {
            trees: assemble(arena, &roots),
        })
    }

    fn alloc(
        &self,
        arena: &mut Vec<Slot<'a>>,
        occurrence: Occurrence<'a>,
    ) -> Result<usize, DecomposeError> {
        if let Some(limit) = self.max_nodes
            && arena.len() >= limit
        {
            warn!(limit, "decomposition node budget exhausted");
            return Err(DecomposeError::ResourceExceeded { limit });
        }
        arena.push(Slot {
            occurrence,
            children: Vec::new(),
        });
        Ok(arena.len() - 1)
    }
}

/// Turn the arena into owned trees. Every child slot sits after its parent,
/// so walking backwards finishes each subtree before its parent needs it.
fn assemble<'a>(arena: Vec<Slot<'a>>, roots: &[usize]) -> Vec<ParseTree<'a>> {
    let mut built: Vec<Option<ParseNode<'a>>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (id, slot) in arena.into_iter().enumerate().rev() {
        let children = slot
            .children
            .iter()
            .filter_map(|child| built[*child].take())
            .collect();
        built[id] = Some(ParseNode {
            occurrence: slot.occurrence,
            children,
        });
    }

    roots
        .iter()
        .filter_map(|root| built[*root].take())
        .map(ParseTree::new)
        .collect()
}
