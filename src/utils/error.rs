use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("Failed to parse upstream payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Upstream,
    Payload,
    Input,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AddressError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AddressError::Network(_) => ErrorCategory::Transport,
            AddressError::Upstream { .. } => ErrorCategory::Upstream,
            AddressError::Parse(_) => ErrorCategory::Payload,
            AddressError::InvalidInput { .. } => ErrorCategory::Input,
            AddressError::Io(_)
            | AddressError::Config { .. }
            | AddressError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AddressError::InvalidInput { .. } => ErrorSeverity::Low,
            AddressError::Upstream { .. } => ErrorSeverity::Medium,
            AddressError::Network(_) => ErrorSeverity::High,
            AddressError::Parse(_)
            | AddressError::Io(_)
            | AddressError::Config { .. }
            | AddressError::InvalidConfigValue { .. } => ErrorSeverity::Critical,
        }
    }

    /// HTTP status carried by an upstream failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            AddressError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, AddressError::Network(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, AddressError::Upstream { .. })
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AddressError::Network(e) if e.is_timeout() => {
                "The directory service did not answer in time; raise the timeout or try again later"
                    .to_string()
            }
            AddressError::Network(_) => {
                "Check network connectivity and that the base URL points at a reachable host"
                    .to_string()
            }
            AddressError::Upstream { status, .. } if *status == 404 => {
                "Check that the province code exists in the directory".to_string()
            }
            AddressError::Upstream { status, .. } if *status >= 500 => {
                "The directory service is failing; try again later".to_string()
            }
            AddressError::Upstream { .. } => {
                "Check the request parameters and the configured base URL".to_string()
            }
            AddressError::Parse(_) => {
                "The base URL may not point at a compatible address directory".to_string()
            }
            AddressError::InvalidInput { field, .. } => {
                format!("Provide a non-empty value for {}", field)
            }
            AddressError::Io(_) => "Check the file path and its permissions".to_string(),
            AddressError::Config { .. } => "Review the configuration file".to_string(),
            AddressError::InvalidConfigValue { field, .. } => {
                format!("Correct the value of {}", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AddressError::Network(_) => "Could not reach the address directory".to_string(),
            AddressError::Upstream { status, .. } => {
                format!("The address directory rejected the request (HTTP {})", status)
            }
            AddressError::Parse(_) => {
                "The address directory returned data in an unexpected format".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
