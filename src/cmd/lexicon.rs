//! Lexicon listing commands: `wordroot list` and `wordroot categories`.

use anyhow::{Context, Result};
use tracing::debug;

use wordroot::lexicon::{LexiconEntry, LexiconFilter, categories, load_lexicon};
use wordroot::ui::{display_categories, display_entries};
use wordroot::wordroot_config::{OutputFormat, WordrootConfig};

/// Load the configured lexicon and narrow it with `filter`.
pub fn load_filtered(config: &WordrootConfig, filter: &LexiconFilter) -> Result<Vec<LexiconEntry>> {
    let path = config.lexicon_path();
    let entries = load_lexicon(&path).context("Failed to load lexicon")?;
    let narrowed = filter.apply(&entries);
    debug!(total = entries.len(), kept = narrowed.len(), "filtered");
    Ok(narrowed)
}

pub fn cmd_list(config: &WordrootConfig, filter: &LexiconFilter) -> Result<()> {
    let entries = load_filtered(config, filter)?;

    match config.output_format() {
        OutputFormat::Text => display_entries(&entries),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize lexicon entries")?;
            println!("{}", json);
        }
    }
    Ok(())
}

pub fn cmd_categories(config: &WordrootConfig) -> Result<()> {
    let entries = load_filtered(config, &LexiconFilter::default())?;
    let labels = categories(&entries);

    match config.output_format() {
        OutputFormat::Text => display_categories(&labels),
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&labels).context("Failed to serialize categories")?;
            println!("{}", json);
        }
    }
    Ok(())
}
