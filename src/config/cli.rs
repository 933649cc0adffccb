use crate::config::env::EnvConfig;
use crate::config::toml_config::{LogFormat, TomlConfig};
use crate::config::DirectorySettings;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "address-lookup")]
#[command(about = "Look up provinces, districts and wards from an address directory")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the address directory (overrides file and environment)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format for lists
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List all provinces
    Provinces,
    /// List the districts of a province
    Districts { province_code: String },
    /// List every ward of a province
    Wards { province_code: String },
    /// Free-text address search
    Search { query: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Tsv,
}

impl CliConfig {
    /// Merge defaults, the config file, the environment and explicit flags,
    /// later sources winning.
    pub fn resolve_settings(
        &self,
        file: Option<&TomlConfig>,
        env: &EnvConfig,
    ) -> DirectorySettings {
        let base = file.map(TomlConfig::settings).unwrap_or_default();
        base.overlay(env.base_url.as_deref(), env.timeout_seconds)
            .overlay(self.base_url.as_deref(), self.timeout)
    }

    pub fn verbose(&self, file: Option<&TomlConfig>) -> bool {
        self.verbose || file.is_some_and(TomlConfig::verbose)
    }

    pub fn log_format(&self, file: Option<&TomlConfig>) -> LogFormat {
        if self.json_logs {
            LogFormat::Json
        } else {
            file.map_or(LogFormat::Compact, TomlConfig::log_format)
        }
    }
}
