//! Text rendering of lexicon listings and decomposition results.

use console::style;

use super::icons::TREE;
use crate::decomposition::{Decomposition, outline};
use crate::lexicon::LexiconEntry;

/// Width long definitions are wrapped to.
const WRAP_WIDTH: usize = 76;

/// One lexicon entry as a block of labelled lines. `number` is 1-based.
pub fn format_entry(number: usize, entry: &LexiconEntry) -> String {
    let definition = textwrap::fill(
        &format!("Definition: {}", entry.gloss),
        textwrap::Options::new(WRAP_WIDTH).subsequent_indent("            "),
    );
    format!(
        "Term {}: {}\n{}\nGreek/Latin: {}\nPOS: {}\n",
        number,
        entry.surface,
        definition,
        entry.origin,
        entry.category_label()
    )
}

/// Print every entry, separated by blank lines.
pub fn display_entries(entries: &[LexiconEntry]) {
    if entries.is_empty() {
        println!("No lexicon entries match.");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{}", format_entry(i + 1, entry));
    }
    println!("{}", style(format!("{} entries", entries.len())).dim());
}

/// Print category labels, one per line.
pub fn display_categories(labels: &[String]) {
    if labels.is_empty() {
        println!("No categories found.");
        return;
    }
    for label in labels {
        println!("{}", label);
    }
}

/// The occurrence report followed by each tree's outline.
pub fn format_decomposition(result: &Decomposition<'_>) -> String {
    let mut out = format!("TERM: {}\n", result.term);

    if result.is_empty() {
        out.push_str(&format!(
            "No decomposition: no lexicon entry occurs in '{}'.\n",
            result.term
        ));
        return out;
    }

    for occurrence in &result.occurrences {
        out.push_str(&format!(
            "    {} - {}\n",
            occurrence.surface(),
            occurrence.entry.gloss
        ));
    }
    out.push('\n');

    for tree in &result.forest {
        out.push_str(&outline(tree));
        out.push('\n');
    }

    let trees = result.forest.len();
    let paths = result.forest.leaf_count();
    out.push_str(&format!(
        "{} {}, {} {}\n",
        trees,
        if trees == 1 { "tree" } else { "trees" },
        paths,
        if paths == 1 { "decomposition" } else { "decompositions" }
    ));
    out
}

/// Print a decomposition result.
pub fn display_decomposition(result: &Decomposition<'_>) {
    println!("{}{}", TREE, style("Decomposition").bold());
    print!("{}", format_decomposition(result));
}

/// Report for a term when the lexicon filters kept no entries at all.
pub fn format_filtered_out(term: &str) -> String {
    let mut out = format!("TERM: {}\n", term);
    out.push_str("No decomposition: the filters left no lexicon entries.\n");
    out
}

/// Print the notice for a filtered-out lexicon.
pub fn display_filtered_out(term: &str) {
    println!("{}{}", TREE, style("Decomposition").bold());
    print!("{}", format_filtered_out(term));
}
