//! Process-wide indicator defaults and environment detection.
//!
//! The defaults are installed at most once, usually at start-up:
//! ```ignore
//! use remote_helpers::config::{configure, RemoteIndicatorConfig};
//!
//! configure(RemoteIndicatorConfig::new("spinner.gif", "spinner"))?;
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{RemoteError, RemoteResult};

pub const DEFAULT_IMAGE: &str = "indicator.gif";
pub const DEFAULT_ID: &str = "indicator";

/// Environment variable naming the running environment
pub const ENVIRONMENT_VAR: &str = "REMOTE_HELPERS_ENV";

static GLOBAL_CONFIG: OnceLock<RemoteIndicatorConfig> = OnceLock::new();

/// Default values used by the indicator decorator and the indicator markup helper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteIndicatorConfig {
    /// Image shown by the indicator markup helper
    pub default_image: String,
    /// DOM id given to the indicator element
    pub default_id: String,
}

impl Default for RemoteIndicatorConfig {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
            default_id: DEFAULT_ID.to_string(),
        }
    }
}

impl RemoteIndicatorConfig {
    pub fn new(default_image: impl Into<String>, default_id: impl Into<String>) -> Self {
        Self {
            default_image: default_image.into(),
            default_id: default_id.into(),
        }
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(yaml: &str) -> RemoteResult<Self> {
        let config: RemoteIndicatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> RemoteResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> RemoteResult<()> {
        if self.default_image.trim().is_empty() {
            return Err(RemoteError::InvalidConfig {
                field: "default_image".to_string(),
                reason: "must be a non-empty image reference".to_string(),
            });
        }
        validate_dom_id(&self.default_id).map_err(|reason| RemoteError::InvalidConfig {
            field: "default_id".to_string(),
            reason,
        })
    }
}

/// Check that `id` can be used as an HTML element id
pub fn validate_dom_id(id: &str) -> Result<(), String> {
    static DOM_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = DOM_ID_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_:.\-]*$").unwrap());

    if re.is_match(id) {
        Ok(())
    } else {
        Err(format!(
            "'{}' must start with a letter and contain only letters, digits, '-', '_', ':' or '.'",
            id
        ))
    }
}

/// Install the process-wide defaults. Fails if they were already installed or read.
pub fn configure(config: RemoteIndicatorConfig) -> RemoteResult<()> {
    config.validate()?;
    let image = config.default_image.clone();
    let id = config.default_id.clone();
    match GLOBAL_CONFIG.set(config) {
        Ok(()) => {
            tracing::info!(default_image = %image, default_id = %id, "remote indicator configured");
            Ok(())
        }
        Err(_) => {
            tracing::warn!("remote indicator configuration already set; ignoring new values");
            Err(RemoteError::ConfigAlreadySet)
        }
    }
}

/// The process-wide defaults, falling back to the built-in values
pub fn config() -> &'static RemoteIndicatorConfig {
    GLOBAL_CONFIG.get_or_init(RemoteIndicatorConfig::default)
}

/// The environment the helpers run in. Only development changes generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Test,
    #[default]
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> RemoteResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(RemoteError::UnknownEnvironment {
                value: value.to_string(),
            }),
        }
    }

    /// Read the environment from `REMOTE_HELPERS_ENV`; unset means production
    pub fn from_env() -> RemoteResult<Self> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Environment::default()),
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteIndicatorConfig::default();
        assert_eq!(config.default_image, "indicator.gif");
        assert_eq!(config.default_id, "indicator");
    }

    #[test]
    fn test_from_yaml_partial_override() {
        let config = RemoteIndicatorConfig::from_yaml_str("default_id: spinner\n").unwrap();
        assert_eq!(config.default_id, "spinner");
        assert_eq!(config.default_image, "indicator.gif");
    }

    #[test]
    fn test_from_yaml_rejects_bad_id() {
        let result = RemoteIndicatorConfig::from_yaml_str("default_id: \"my spinner\"\n");
        assert!(matches!(result, Err(RemoteError::InvalidConfig { ref field, .. }) if field == "default_id"));
    }

    #[test]
    fn test_from_yaml_rejects_empty_image() {
        let result = RemoteIndicatorConfig::from_yaml_str("default_image: \"\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_dom_id() {
        assert!(validate_dom_id("indicator").is_ok());
        assert!(validate_dom_id("link-42").is_ok());
        assert!(validate_dom_id("").is_err());
        assert!(validate_dom_id("42").is_err());
        assert!(validate_dom_id("a'b").is_err());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("development").unwrap(), Environment::Development);
        assert_eq!(Environment::parse(" Production ").unwrap(), Environment::Production);
        assert_eq!(Environment::parse("test").unwrap(), Environment::Test);
        assert!(Environment::parse("staging").is_err());
        assert!(Environment::Development.is_development());
        assert!(!Environment::Test.is_development());
    }
}
