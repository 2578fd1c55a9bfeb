//! Occurrence index: where each lexicon entry is found inside a term.
//!
//! Positions are character offsets into the term. Matching is
//! case-insensitive and done one character at a time, so an offset always
//! refers to the original term even when lowercasing would change its length.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::config::MatchPolicy;
use crate::lexicon::LexiconEntry;

/// A lexicon entry found at a start position in the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence<'a> {
    pub entry: &'a LexiconEntry,
    pub start: usize,
}

impl<'a> Occurrence<'a> {
    pub fn new(entry: &'a LexiconEntry, start: usize) -> Self {
        Self { entry, start }
    }

    pub fn surface(&self) -> &'a str {
        &self.entry.surface
    }

    /// Length of the surface form in characters.
    pub fn len(&self) -> usize {
        self.entry.surface.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.surface.is_empty()
    }

    /// First position after the matched span.
    pub fn end(&self) -> usize {
        self.start + self.len()
    }
}

/// Occurrences grouped by start position, positions in ascending order.
///
/// Within a position, occurrences keep the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceIndex<'a> {
    positions: BTreeMap<usize, Vec<Occurrence<'a>>>,
    term_len: usize,
}

impl<'a> OccurrenceIndex<'a> {
    /// Create an empty index for a term of `term_len` characters.
    pub fn new(term_len: usize) -> Self {
        Self {
            positions: BTreeMap::new(),
            term_len,
        }
    }

    /// Record an occurrence. Positions outside the term are ignored.
    pub fn insert(&mut self, occurrence: Occurrence<'a>) {
        if occurrence.start >= self.term_len {
            return;
        }
        self.positions
            .entry(occurrence.start)
            .or_default()
            .push(occurrence);
    }

    /// True when no occurrence was recorded.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total number of occurrences across all positions.
    pub fn len(&self) -> usize {
        self.positions.values().map(Vec::len).sum()
    }

    /// Length in characters of the term this index was built for.
    pub fn term_len(&self) -> usize {
        self.term_len
    }

    /// Smallest occupied position.
    pub fn first_position(&self) -> Option<usize> {
        self.positions.keys().next().copied()
    }

    /// Occupied positions in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.keys().copied()
    }

    /// Occurrences starting at `position`. An unoccupied position yields an
    /// empty slice; nothing is inserted.
    pub fn at(&self, position: usize) -> &[Occurrence<'a>] {
        self.positions.get(&position).map_or(&[], Vec::as_slice)
    }

    /// Smallest occupied position at or after `from`, within the term.
    pub fn next_position(&self, from: usize) -> Option<usize> {
        if from >= self.term_len {
            return None;
        }
        self.positions
            .range(from..self.term_len)
            .next()
            .map(|(p, _)| *p)
    }

    /// Every occupied position from `from` through the end of the term,
    /// with its occurrences.
    pub fn positions_from(
        &self,
        from: usize,
    ) -> impl Iterator<Item = (usize, &[Occurrence<'a>])> + '_ {
        let upper = self.term_len.max(from);
        self.positions
            .range(from..upper)
            .map(|(p, occurrences)| (*p, occurrences.as_slice()))
    }
}

/// Find every lexicon entry inside `term`, recording the first position of each.
///
/// Returns the index and a flat list of the occurrences in lexicon order.
/// Entries that do not occur are left out.
pub fn find_occurrences<'a>(
    lexicon: &'a [LexiconEntry],
    term: &str,
) -> (OccurrenceIndex<'a>, Vec<Occurrence<'a>>) {
    find_occurrences_with(lexicon, term, MatchPolicy::FirstOnly)
}

/// Like [`find_occurrences`], with a choice of how many positions per entry
/// are recorded.
pub fn find_occurrences_with<'a>(
    lexicon: &'a [LexiconEntry],
    term: &str,
    policy: MatchPolicy,
) -> (OccurrenceIndex<'a>, Vec<Occurrence<'a>>) {
    let term_chars: Vec<char> = term.chars().collect();
    let mut index = OccurrenceIndex::new(term_chars.len());
    let mut found = Vec::new();

    for entry in lexicon {
        let surface: Vec<char> = entry.surface.chars().collect();
        if surface.is_empty() {
            debug!(gloss = %entry.gloss, "skipping entry with empty surface form");
            continue;
        }

        let mut from = 0;
        while let Some(start) = find_from(&term_chars, &surface, from) {
            let occurrence = Occurrence::new(entry, start);
            index.insert(occurrence);
            found.push(occurrence);
            if policy == MatchPolicy::FirstOnly {
                break;
            }
            from = start + 1;
        }
    }

    debug!(term, occurrences = found.len(), "built occurrence index");
    (index, found)
}

/// Lowest start at or after `from` where `needle` matches `haystack`.
fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&start| {
        needle
            .iter()
            .zip(&haystack[start..])
            .all(|(a, b)| chars_eq_ignore_case(*a, *b))
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Category;

    fn medical() -> Vec<LexiconEntry> {
        vec![
            LexiconEntry::new("derm-", "skin", "Greek", Some(Category::WordRoot)),
            LexiconEntry::new("-itis", "inflammation", "Greek", Some(Category::Suffix)),
            LexiconEntry::new("-osis", "condition", "Greek", Some(Category::Suffix)),
        ]
    }

    fn surfaces_at<'a>(index: &OccurrenceIndex<'a>, pos: usize) -> Vec<&'a str> {
        index.at(pos).iter().map(|o| o.surface()).collect()
    }

    #[test]
    fn test_dermatitis_index() {
        let lexicon = medical();
        let (index, found) = find_occurrences(&lexicon, "dermatitis");

        assert_eq!(index.positions().collect::<Vec<_>>(), vec![0, 6]);
        assert_eq!(surfaces_at(&index, 0), vec!["derm"]);
        assert_eq!(surfaces_at(&index, 6), vec!["itis"]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.term_len(), 10);

        let flat: Vec<_> = found.iter().map(|o| (o.surface(), o.start)).collect();
        assert_eq!(flat, vec![("derm", 0), ("itis", 6)]);
    }

    #[test]
    fn test_no_match_is_empty_index() {
        let lexicon = medical();
        let (index, found) = find_occurrences(&lexicon, "xylophone");
        assert!(index.is_empty());
        assert!(found.is_empty());
        assert_eq!(index.first_position(), None);
    }

    #[test]
    fn test_match_is_case_insensitive_both_ways() {
        let lexicon = vec![LexiconEntry::new("Derm-", "skin", "Greek", None)];
        let (index, _) = find_occurrences(&lexicon, "HYPODERMIC");
        assert_eq!(index.positions().collect::<Vec<_>>(), vec![4]);
        assert_eq!(index.at(4)[0].end(), 8);
    }

    #[test]
    fn test_first_position_only_by_default() {
        let lexicon = vec![LexiconEntry::new("a", "x", "Latin", None)];
        let (index, found) = find_occurrences(&lexicon, "banana");
        assert_eq!(found.len(), 1);
        assert_eq!(index.positions().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_every_position_policy_records_overlapping_matches() {
        let lexicon = vec![LexiconEntry::new("ana", "x", "Greek", None)];
        let (index, found) = find_occurrences_with(&lexicon, "banana", MatchPolicy::EveryPosition);
        assert_eq!(found.len(), 2);
        assert_eq!(index.positions().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_overlapping_entries_recorded_independently() {
        let lexicon = vec![
            LexiconEntry::new("cardi-", "heart", "Greek", None),
            LexiconEntry::new("card-", "heart", "Latin", None),
            LexiconEntry::new("-ology", "study of", "Greek", None),
        ];
        let (index, _) = find_occurrences(&lexicon, "cardiology");
        assert_eq!(surfaces_at(&index, 0), vec!["cardi", "card"]);
        assert_eq!(surfaces_at(&index, 5), vec!["ology"]);
    }

    #[test]
    fn test_every_recorded_surface_matches_term_at_start() {
        let lexicon = vec![
            LexiconEntry::new("gastr-", "stomach", "Greek", None),
            LexiconEntry::new("enter-", "intestine", "Greek", None),
            LexiconEntry::new("-itis", "inflammation", "Greek", None),
            LexiconEntry::new("o", "combining vowel", "", None),
        ];
        let term = "GastroEnteritis";
        let chars: Vec<char> = term.chars().collect();
        let (index, found) = find_occurrences(&lexicon, term);
        assert_eq!(found.len(), 4);
        for occurrence in &found {
            let slice: String = chars[occurrence.start..occurrence.end()].iter().collect();
            assert_eq!(slice.to_lowercase(), occurrence.surface().to_lowercase());
            assert!(index.at(occurrence.start).contains(occurrence));
        }
    }

    #[test]
    fn test_positions_are_character_offsets() {
        let lexicon = vec![LexiconEntry::new("itis", "inflammation", "Greek", None)];
        let (index, _) = find_occurrences(&lexicon, "çéitis");
        assert_eq!(index.first_position(), Some(2));
        assert_eq!(index.term_len(), 6);
    }

    #[test]
    fn test_empty_surface_is_skipped() {
        let lexicon = vec![LexiconEntry::new("-", "nothing", "", None)];
        let (index, found) = find_occurrences(&lexicon, "derm");
        assert!(index.is_empty());
        assert!(found.is_empty());
    }

    #[test]
    fn test_surface_longer_than_term() {
        let lexicon = vec![LexiconEntry::new("dermatitis", "x", "", None)];
        let (index, _) = find_occurrences(&lexicon, "derm");
        assert!(index.is_empty());
    }

    #[test]
    fn test_unoccupied_position_is_empty_slice() {
        let lexicon = medical();
        let (index, _) = find_occurrences(&lexicon, "dermatitis");
        assert!(index.at(3).is_empty());
        assert!(index.at(99).is_empty());
        assert_eq!(index.positions().count(), 2);
    }

    #[test]
    fn test_next_position_and_positions_from() {
        let lexicon = medical();
        let (index, _) = find_occurrences(&lexicon, "dermatitis");
        assert_eq!(index.next_position(0), Some(0));
        assert_eq!(index.next_position(4), Some(6));
        assert_eq!(index.next_position(7), None);
        assert_eq!(index.next_position(10), None);
        let from: Vec<usize> = index.positions_from(1).map(|(p, _)| p).collect();
        assert_eq!(from, vec![6]);
        assert_eq!(index.positions_from(42).count(), 0);
    }

    #[test]
    fn test_insert_outside_term_is_ignored() {
        let entry = LexiconEntry::new("x", "", "", None);
        let mut index = OccurrenceIndex::new(3);
        index.insert(Occurrence::new(&entry, 3));
        assert!(index.is_empty());
        index.insert(Occurrence::new(&entry, 2));
        assert_eq!(index.len(), 1);
    }
}
