use crate::utils::error::{AddressError, Result};

pub const BASE_URL_VAR: &str = "ADDRESS_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "ADDRESS_API_TIMEOUT_SECONDS";

/// Directory settings taken from the process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl EnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty());

        let timeout_seconds = match lookup(TIMEOUT_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|e| {
                    AddressError::InvalidConfigValue {
                        field: TIMEOUT_VAR.to_string(),
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?)
            }
            _ => None,
        };

        Ok(Self {
            base_url,
            timeout_seconds,
        })
    }
}
