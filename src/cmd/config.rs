//! Configuration view and validation commands: `wordroot config`.

use anyhow::Result;

use super::super::ConfigCommands;

pub fn cmd_config(project_dir: &std::path::Path, command: Option<ConfigCommands>) -> Result<()> {
    use wordroot::ui::icons::{CHECK, WARN};
    use wordroot::wordroot_config::{WordrootConfig, WordrootToml, get_config_dir};

    let config_dir = get_config_dir(project_dir);
    let config_path = config_dir.join(wordroot::wordroot_config::CONFIG_FILE);

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Wordroot Configuration");
            println!("======================");
            println!();

            let toml = if config_path.exists() {
                println!("Config file: {}", config_path.display());
                WordrootToml::load(&config_path)?
            } else {
                println!("No wordroot.toml found at {}", config_path.display());
                println!("Using default configuration.");
                WordrootToml::default()
            };
            println!();

            println!("[lexicon]");
            match &toml.lexicon.path {
                Some(path) => println!("  path = \"{}\"", path.display()),
                None => println!("  path = (default)"),
            }
            println!();

            println!("[decomposition]");
            println!("  match_policy = \"{}\"", toml.decomposition.match_policy);
            println!("  max_nodes = {}", toml.decomposition.max_nodes);
            println!("  max_term_chars = {}", toml.decomposition.max_term_chars);
            println!();

            println!("[output]");
            println!("  format = \"{}\"", toml.output.format);
            println!();

            // Effective values include the environment override
            let config = WordrootConfig::new(project_dir.to_path_buf())?;
            println!("Effective values (with env overrides):");
            println!("  lexicon = \"{}\"", config.lexicon_path().display());
            println!();

            if !config_path.exists() {
                println!("Run 'wordroot config init' to create a wordroot.toml file.");
                println!();
            }
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !config_path.exists() {
                println!("No wordroot.toml found. Using defaults (valid).");
                return Ok(());
            }

            let toml = WordrootToml::load(&config_path)?;
            let warnings = toml.validate();

            if warnings.is_empty() {
                println!("{}Configuration is valid.", CHECK);
            } else {
                println!("{}Configuration warnings:", WARN);
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if config_path.exists() {
                println!("wordroot.toml already exists at {}", config_path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            if !config_dir.exists() {
                std::fs::create_dir_all(&config_dir)?;
            }

            let toml = WordrootToml::default();
            toml.save(&config_path)?;

            println!("Created wordroot.toml at {}", config_path.display());
            println!();
            println!("You can now customize:");
            println!("  - [lexicon] path");
            println!("  - [decomposition] match_policy, max_nodes, max_term_chars");
            println!("  - [output] format");
            println!();
        }
    }

    Ok(())
}
