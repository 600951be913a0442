pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, LoadPolicy};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use toml_config::{TomlConfig, DEFAULT_DATABASE_PATH};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fleet")]
#[command(about = "Track a small fleet of rental cars")]
pub struct CliConfig {
    /// Path to the CSV database (overrides the config file)
    #[arg(long)]
    pub database: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Reject duplicate plates when loading the database
    #[arg(long)]
    pub strict_load: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the config file with command line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_path: String,
    pub load_policy: LoadPolicy,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            load_policy: LoadPolicy::default(),
            log_level: None,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            database_path: file.database_path().to_string(),
            load_policy: file.load_policy(),
            log_level: file.log_level().map(str::to_string),
            verbose: false,
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Self::from_toml(&file)
            }
            None => Self::default(),
        };

        // 命令列參數優先於配置檔
        if let Some(database) = &cli.database {
            settings.database_path = database.clone();
        }
        if cli.strict_load {
            settings.load_policy = LoadPolicy::RejectDuplicates;
        }
        settings.verbose = cli.verbose;

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn database_path(&self) -> &str {
        &self.database_path
    }

    fn load_policy(&self) -> LoadPolicy {
        self.load_policy
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("database", &self.database_path)
    }
}
