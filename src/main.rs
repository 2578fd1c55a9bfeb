use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wordroot::lexicon::{Category, LexiconFilter};
use wordroot::wordroot_config::{OutputFormat, WordrootConfig};

mod cmd;

#[derive(Parser)]
#[command(name = "wordroot")]
#[command(version, about = "Look up word roots and decompose terms into them")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Lexicon CSV file. Overrides WORDROOT_LEXICON and wordroot.toml.
    #[arg(short = 'f', long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Output format. Overrides wordroot.toml.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Lexicon narrowing flags shared by `list` and `parse`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only entries beginning with PREFIX
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Only entries containing SUBSTRING
    #[arg(short, long, value_name = "SUBSTRING")]
    pub contains: Option<String>,

    /// Only entries whose definition contains MEANING
    #[arg(short, long)]
    pub meaning: Option<String>,

    /// Only entries of this category: wr, suf, pre, ba, pos
    #[arg(long = "category", visible_alias = "pos")]
    pub category: Option<Category>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> LexiconFilter {
        LexiconFilter {
            prefix: self.prefix.clone(),
            contains: self.contains.clone(),
            meaning: self.meaning.clone(),
            category: self.category.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List lexicon entries, optionally narrowed
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the categories present in the lexicon
    Categories,
    /// Find every decomposition of TERM into lexicon entries
    Parse {
        /// The term to decompose
        term: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Record every position an entry occurs at, not only the first
        #[arg(long)]
        every_position: bool,

        /// Node budget for the forest (0 = unlimited). Overrides wordroot.toml.
        #[arg(long)]
        max_nodes: Option<usize>,
    },
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default wordroot.toml file
    Init,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "wordroot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    if let Commands::Config { command } = &cli.command {
        return cmd::cmd_config(&project_dir, command.clone());
    }

    let config = WordrootConfig::with_cli_args(project_dir, cli.lexicon.clone(), cli.format)?;

    match &cli.command {
        Commands::List { filter } => cmd::cmd_list(&config, &filter.to_filter())?,
        Commands::Categories => cmd::cmd_categories(&config)?,
        Commands::Parse {
            term,
            filter,
            every_position,
            max_nodes,
        } => cmd::cmd_parse(
            &config,
            term,
            &filter.to_filter(),
            *every_position,
            *max_nodes,
        )?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
