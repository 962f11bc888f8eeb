use crate::config::toml_config::TomlConfig;
use crate::config::GameRules;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "lotto")]
#[command(about = "Buy lottery tickets, enter the draw and see what you won")]
pub struct CliConfig {
    /// Path to a TOML rules file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed the ticket machine for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Print the run summary as JSON after the statistics")]
    pub json: bool,

    /// Print the effective rules and exit without playing
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then command-line overrides.
    pub fn load_rules(&self) -> Result<GameRules> {
        let mut rules = match &self.config {
            Some(path) => {
                tracing::info!("Loading rules from {}", path.display());
                TomlConfig::from_file(path)?.to_rules()
            }
            None => GameRules::default(),
        };

        if let Some(seed) = self.seed {
            tracing::debug!("Seed overridden to {}", seed);
            rules.seed = Some(seed);
        }

        rules.validate()?;
        Ok(rules)
    }
}
