use thiserror::Error;

use crate::sites::SiteError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
    #[error("invalid duration '{0}': {1}")]
    Duration(String, String),
    #[error("ground sites: {0}")]
    Sites(#[from] SiteError),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
