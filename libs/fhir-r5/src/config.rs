//! Model configuration
//!
//! Controls the optional checks run when builders validate. A configuration
//! is handed to each builder with `model_config(..)` and applies to the whole
//! tree that builder checks. Validation itself is switched per builder with
//! `validating(false)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid model configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Switches for the checks that are not structural
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Check reference targets against each element's allowed resource types
    pub check_reference_types: bool,

    /// Reject control characters (other than TAB, CR and LF) in string values
    pub check_control_chars: bool,
}

impl ModelConfig {
    pub const DEFAULT: ModelConfig = ModelConfig {
        check_reference_types: true,
        check_control_chars: true,
    };

    /// Load configuration from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_all_checks() {
        let config = ModelConfig::default();
        assert!(config.check_reference_types);
        assert!(config.check_control_chars);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = ModelConfig::from_yaml("check_reference_types: false\n").unwrap();
        assert!(!config.check_reference_types);
        assert!(config.check_control_chars);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ModelConfig {
            check_reference_types: false,
            check_control_chars: false,
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(ModelConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_yaml_rejects_wrong_types() {
        assert!(ModelConfig::from_yaml("check_control_chars: maybe").is_err());
    }
}
