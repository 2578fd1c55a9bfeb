//! Indented outline view of a decomposition tree.

use serde::Serialize;

use super::forest::{ParseNode, ParseTree};

/// One line of an outline: a surface form at its depth below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedLine<'a> {
    pub depth: usize,
    pub surface: &'a str,
}

/// Pre-order lines for `tree`, root at depth 0, children in stored order.
pub fn render<'a>(tree: &ParseTree<'a>) -> Vec<RenderedLine<'a>> {
    let mut lines = Vec::new();
    let mut stack: Vec<(&ParseNode<'a>, usize)> = vec![(&tree.root, 0)];
    while let Some((node, depth)) = stack.pop() {
        lines.push(RenderedLine {
            depth,
            surface: node.surface(),
        });
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    lines
}

/// The outline as text: one line per node, one tab per depth level.
pub fn outline(tree: &ParseTree<'_>) -> String {
    render(tree)
        .iter()
        .map(|line| format!("{}{}\n", "\t".repeat(line.depth), line.surface))
        .collect()
}

impl std::fmt::Display for ParseTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&outline(self))
    }
}
