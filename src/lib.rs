pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{env::EnvConfig, toml_config::TomlConfig, DirectorySettings};
pub use crate::core::{
    client::AddressClient, service::LookupService, AddressDirectory, Code, District, Province,
    SearchResults, Ward,
};
pub use crate::utils::error::{AddressError, Result};
