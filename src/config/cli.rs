use crate::config::toml_config::ViewerConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokébuild catalog from the terminal")]
pub struct CliConfig {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long, help = "Number of entries fetched for the list view")]
    pub limit: Option<usize>,

    #[arg(long, help = "Log file used while the terminal UI is running")]
    pub log_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Interactive terminal viewer (default)
    Browse,
    /// Print the catalog list
    List,
    /// Print one entry by pokédex number
    Show { pokedex_id: u32 },
    /// Search an entry by name (or number)
    Search { name: String },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Browse)
    }

    /// Loads the file configuration (or defaults) and applies flag overrides on top.
    pub fn resolve(&self) -> Result<ViewerConfig> {
        let mut config = match &self.config {
            Some(path) => ViewerConfig::from_file(path)?,
            None => ViewerConfig::default(),
        };

        if let Some(base_url) = &self.api_base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            config.api.list_limit = limit;
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = log_file.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
