//! Configuration for wordroot, read from `.wordroot/wordroot.toml`.
//!
//! Settings are layered: file → environment → CLI. A missing file means
//! defaults throughout.
//!
//! # Configuration File Format
//!
//! ```toml
//! [lexicon]
//! path = "word_lists.csv"
//!
//! [decomposition]
//! match_policy = "first"    # or "every"
//! max_nodes = 100000        # 0 = unlimited
//! max_term_chars = 64       # 0 = unlimited
//!
//! [output]
//! format = "text"           # or "json"
//! ```
//!
//! The lexicon path may also come from `WORDROOT_LEXICON`. A relative path
//! is resolved against the project directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::decomposition::{
    DEFAULT_MAX_NODES, DEFAULT_MAX_TERM_CHARS, DecompositionConfig, MatchPolicy,
};

/// Name of the per-project configuration directory.
pub const CONFIG_DIR: &str = ".wordroot";

/// Name of the configuration file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "wordroot.toml";

/// Environment variable overriding the lexicon path.
pub const LEXICON_ENV: &str = "WORDROOT_LEXICON";

/// Lexicon file used when nothing else names one.
pub const DEFAULT_LEXICON_FILE: &str = "word_lists.csv";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Lexicon source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSection {
    /// Path to the lexicon CSV file
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Decomposition limits and matching behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionSection {
    /// Which occurrence positions are recorded per entry
    #[serde(default)]
    pub match_policy: MatchPolicy,
    /// Node budget per forest (0 = unlimited)
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    /// Longest accepted term in characters (0 = unlimited)
    #[serde(default = "default_max_term_chars")]
    pub max_term_chars: usize,
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

fn default_max_term_chars() -> usize {
    DEFAULT_MAX_TERM_CHARS
}

impl Default for DecompositionSection {
    fn default() -> Self {
        Self {
            match_policy: MatchPolicy::default(),
            max_nodes: default_max_nodes(),
            max_term_chars: default_max_term_chars(),
        }
    }
}

impl DecompositionSection {
    /// Convert to the runtime decomposition configuration.
    pub fn to_decomposition_config(&self) -> DecompositionConfig {
        DecompositionConfig::default()
            .set_match_policy(self.match_policy)
            .set_max_nodes(self.max_nodes)
            .set_max_term_chars(self.max_term_chars)
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// The complete wordroot.toml configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordrootToml {
    #[serde(default)]
    pub lexicon: LexiconSection,
    #[serde(default)]
    pub decomposition: DecompositionSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl WordrootToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse wordroot.toml")
    }

    /// Load from `<config_dir>/wordroot.toml`, or defaults if the file doesn't exist.
    pub fn load_or_default(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize wordroot.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Lexicon path from the environment or the file, before resolution.
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        std::env::var_os(LEXICON_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| self.lexicon.path.clone())
    }

    /// Validate the configuration and return any warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(path) = &self.lexicon.path
            && path.as_os_str().is_empty()
        {
            warnings.push("Empty [lexicon] path: using the default lexicon file".to_string());
        }

        if self.decomposition.max_nodes == 0 {
            warnings.push(
                "max_nodes = 0 disables the node budget: overlapping entries can make \
                 decomposition time and memory grow exponentially"
                    .to_string(),
            );
        }

        if self.decomposition.max_term_chars == 0 {
            warnings.push("max_term_chars = 0 accepts terms of any length".to_string());
        }

        warnings
    }
}

/// Configuration combining wordroot.toml with environment and CLI settings.
#[derive(Debug, Clone)]
pub struct WordrootConfig {
    /// Path to the project directory
    pub project_dir: PathBuf,
    /// Path to the .wordroot directory
    pub config_dir: PathBuf,
    /// Parsed wordroot.toml configuration
    pub toml: WordrootToml,
    /// CLI override: lexicon path
    pub cli_lexicon: Option<PathBuf>,
    /// CLI override: output format
    pub cli_format: Option<OutputFormat>,
}

impl WordrootConfig {
    /// Create a WordrootConfig from a project directory.
    pub fn new(project_dir: PathBuf) -> Result<Self> {
        let project_dir = project_dir
            .canonicalize()
            .context("Failed to resolve project directory")?;
        let config_dir = project_dir.join(CONFIG_DIR);
        let toml = WordrootToml::load_or_default(&config_dir)?;

        Ok(Self {
            project_dir,
            config_dir,
            toml,
            cli_lexicon: None,
            cli_format: None,
        })
    }

    /// Create WordrootConfig with CLI overrides.
    pub fn with_cli_args(
        project_dir: PathBuf,
        lexicon: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut config = Self::new(project_dir)?;
        config.cli_lexicon = lexicon;
        config.cli_format = format;
        Ok(config)
    }

    /// Path to wordroot.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Lexicon path (CLI → env → file → default), relative paths resolved
    /// against the project directory.
    pub fn lexicon_path(&self) -> PathBuf {
        let path = self
            .cli_lexicon
            .clone()
            .or_else(|| self.toml.lexicon_path())
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEXICON_FILE));

        if path.is_absolute() {
            path
        } else {
            self.project_dir.join(path)
        }
    }

    /// Output format (CLI → file → default).
    pub fn output_format(&self) -> OutputFormat {
        self.cli_format.unwrap_or(self.toml.output.format)
    }

    /// Decomposition settings from the file.
    pub fn decomposition(&self) -> DecompositionConfig {
        self.toml.decomposition.to_decomposition_config()
    }

    /// Validate configuration and return warnings.
    pub fn validate(&self) -> Vec<String> {
        self.toml.validate()
    }
}

/// Path to the configuration directory for a project.
pub fn get_config_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_DIR)
}
