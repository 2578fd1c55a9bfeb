//! CSV loading for the lexicon.
//!
//! The file layout is one header row followed by one entry per row:
//!
//! ```text
//! Term,Definition,Greek/Latin,POS
//! derm-,skin,Greek,Word Root
//! -itis,inflammation,Greek,Suffix
//! ```
//!
//! The header row is skipped whatever it contains. Extra columns are ignored.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::entry::{Category, LexiconEntry};
use crate::errors::LexiconError;

/// Number of columns every row must provide.
const REQUIRED_COLUMNS: usize = 4;

/// Load a lexicon from a CSV file.
pub fn load_lexicon(path: &Path) -> Result<Vec<LexiconEntry>, LexiconError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LexiconError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let entries = read_entries(reader, path)?;
    debug!(path = %path.display(), entries = entries.len(), "loaded lexicon");
    Ok(entries)
}

/// Load a lexicon from any reader. `source` names the input in errors.
pub fn load_lexicon_from_reader<R: Read>(
    rdr: R,
    source: &Path,
) -> Result<Vec<LexiconEntry>, LexiconError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);
    read_entries(reader, source)
}

fn read_entries<R: Read>(
    mut reader: csv::Reader<R>,
    source: &Path,
) -> Result<Vec<LexiconEntry>, LexiconError> {
    let mut entries = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1, so the n-th record sits on line n + 2 unless csv knows better.
        let fallback_line = idx as u64 + 2;
        let record = result.map_err(|source_err| LexiconError::Read {
            path: source.to_path_buf(),
            line: source_err.position().map_or(fallback_line, |p| p.line()),
            source: source_err,
        })?;
        let line = record.position().map_or(fallback_line, |p| p.line());

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        if record.len() < REQUIRED_COLUMNS {
            return Err(LexiconError::MalformedRow {
                path: source.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        let category = Category::from_label(&record[3]);
        if let Some(Category::Other(label)) = &category {
            warn!(line, label = %label, "unrecognized category, keeping as-is");
        }

        let entry = LexiconEntry::new(&record[0], record[1].trim(), record[2].trim(), category);
        if entry.surface.is_empty() {
            warn!(line, "skipping row with empty term");
            continue;
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(LexiconError::Empty {
            path: PathBuf::from(source),
        });
    }

    Ok(entries)
}
