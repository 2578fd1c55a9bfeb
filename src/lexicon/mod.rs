//! The morphological lexicon: entries, CSV loading, and filtering.
//!
//! | Submodule | What it owns                                        |
//! |-----------|-----------------------------------------------------|
//! | `entry`   | `LexiconEntry`, `Category`                          |
//! | `loader`  | `load_lexicon()` from a CSV file                    |
//! | `filter`  | `LexiconFilter` criteria, `categories()`            |

mod entry;
mod filter;
mod loader;

pub use entry::{Category, LexiconEntry, normalize_surface};
pub use filter::{LexiconFilter, categories};
pub use loader::{load_lexicon, load_lexicon_from_reader};
