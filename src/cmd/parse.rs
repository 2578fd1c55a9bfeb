//! Term decomposition command: `wordroot parse`.

use anyhow::{Context, Result};
use tracing::warn;

use super::lexicon::load_filtered;
use wordroot::decomposition::{MatchPolicy, decompose};
use wordroot::lexicon::LexiconFilter;
use wordroot::ui::{display_decomposition, display_filtered_out};
use wordroot::wordroot_config::{OutputFormat, WordrootConfig};

pub fn cmd_parse(
    config: &WordrootConfig,
    term: &str,
    filter: &LexiconFilter,
    every_position: bool,
    max_nodes: Option<usize>,
) -> Result<()> {
    let entries = load_filtered(config, filter)?;
    // An empty lexicon file is rejected at load time, so only the filters get here.
    let filtered_out = entries.is_empty();
    if filtered_out {
        warn!("lexicon filters left no entries");
    }

    let mut settings = config.decomposition();
    if every_position {
        settings = settings.set_match_policy(MatchPolicy::EveryPosition);
    }
    if let Some(max) = max_nodes {
        settings = settings.set_max_nodes(max);
    }

    let result = decompose(&entries, term, &settings)
        .with_context(|| format!("Failed to decompose '{}'", term))?;

    match config.output_format() {
        OutputFormat::Text if filtered_out => display_filtered_out(term),
        OutputFormat::Text => display_decomposition(&result),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .context("Failed to serialize decomposition")?;
            println!("{}", json);
        }
    }
    Ok(())
}
