#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

use crate::core::client::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_timeout, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Effective directory settings after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl DirectorySettings {
    /// Values that are present replace the current ones.
    pub fn overlay(mut self, base_url: Option<&str>, timeout_seconds: Option<u64>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url.to_string();
        }
        if timeout_seconds.is_some() {
            self.timeout_seconds = timeout_seconds;
        }
        self
    }
}

impl ConfigProvider for DirectorySettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for DirectorySettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_timeout("timeout_seconds", self.timeout_seconds)?;
        Ok(())
    }
}
