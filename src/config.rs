//! YAML configuration file support for screening runs.
//!
//! One file carries every knob the screener exposes: canonicalization,
//! prefix boost, scoring weights and search policy. Every section is
//! optional and falls back to the library defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # SDN screening configuration
//! version: "1.0"
//! name: "nightly batch"
//!
//! canonical:
//!   fold_diacritics: false
//!
//! similarity:
//!   prefix_scale: 0.1
//!   max_prefix_len: 4
//!
//! weights:
//!   last_name: 0.50
//!   first_name: 0.35
//!   middle_name: 0.15
//!   dob_bonus: 20.0
//!
//! search:
//!   threshold: 85
//!   match_aliases: false
//!   max_results: 25
//!   parallel_threshold: 512
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::{MatchConfig, ScoringWeights, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use similarity::SimilarityConfig;
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a screening run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ScreenConfig {
    /// Configuration format version
    #[serde(default = "default_config_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Field canonicalization
    #[serde(default)]
    pub canonical: NormalizeConfig,

    /// Prefix boost applied to name and address similarity
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Field weights and signal bonuses
    #[serde(default)]
    pub weights: ScoringWeights,

    /// Threshold and result policy
    #[serde(default)]
    pub search: SearchYamlConfig,
}

impl ScreenConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ScreenConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.similarity
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("similarity: {err}")))?;
        self.weights
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("weights: {err}")))?;
        self.search.validate()?;

        Ok(())
    }

    /// Assemble the matcher configuration this file describes.
    pub fn into_match_config(self) -> Result<MatchConfig, ConfigLoadError> {
        let cfg = MatchConfig {
            weights: self.weights,
            similarity: self.similarity,
            normalize: self.canonical,
            threshold: self.search.threshold,
            match_aliases: self.search.match_aliases,
            max_results: self.search.max_results,
            parallel_threshold: self.search.parallel_threshold,
        };
        cfg.validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        Ok(cfg)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            name: None,
            canonical: NormalizeConfig::default(),
            similarity: SimilarityConfig::default(),
            weights: ScoringWeights::default(),
            search: SearchYamlConfig::default(),
        }
    }
}

/// Search policy YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u32,

    #[serde(default)]
    pub match_aliases: bool,

    #[serde(default)]
    pub max_results: Option<usize>,

    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl SearchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.threshold > 100 {
            return Err(ConfigLoadError::Validation(format!(
                "search.threshold must be <= 100, got {}",
                self.threshold
            )));
        }
        if self.max_results == Some(0) {
            return Err(ConfigLoadError::Validation(
                "search.max_results must be >= 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigLoadError::Validation(
                "search.parallel_threshold must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            match_aliases: false,
            max_results: None,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_config_version() -> String {
    "1.0".to_string()
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_parallel_threshold() -> usize {
    512
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
canonical:
  fold_diacritics: true
search:
  threshold: 75
  match_aliases: true
"#;

        let config = ScreenConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert!(config.canonical.fold_diacritics);
        assert_eq!(config.search.threshold, 75);
        assert!(config.search.match_aliases);
        assert_eq!(config.similarity, SimilarityConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
search:
  max_results: 10
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = ScreenConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.search.max_results, Some(10));
    }

    #[test]
    fn test_default_config() {
        let config = ScreenConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.search.threshold, DEFAULT_THRESHOLD);
        assert_eq!(config.into_match_config().unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ScreenConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_partial_weights_keep_other_defaults() {
        let yaml = r#"
weights:
  dob_bonus: 25.0
"#;
        let config = ScreenConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.weights.dob_bonus, 25.0);
        assert_eq!(config.weights.last_name, ScoringWeights::default().last_name);
    }

    #[test]
    fn test_unsupported_version() {
        let result = ScreenConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
search:
  threshold: 101
"#;
        let result = ScreenConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("search.threshold"));
    }

    #[test]
    fn test_similarity_validation() {
        let yaml = r#"
similarity:
  prefix_scale: 0.5
"#;
        let result = ScreenConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.contains("prefix_scale")));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let yaml = r#"
weights:
  city: -1.0
"#;
        let result = ScreenConfig::from_yaml(yaml);
        assert!(matches!(result, Err(ConfigLoadError::Validation(msg)) if msg.contains("weights")));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = ScreenConfig::from_yaml("search: [unterminated");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ScreenConfig::from_file("/nonexistent/sdnscreen.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_full_yaml_into_match_config() {
        let yaml = r#"
version: "1.0"
name: "production"

canonical:
  fold_diacritics: true

similarity:
  prefix_scale: 0.2
  max_prefix_len: 3

weights:
  last_name: 0.6
  first_name: 0.3
  middle_name: 0.1
  country: 40.0
  city: 25.0
  state: 20.0
  street: 15.0
  name: 0.6
  dob_bonus: 20.0
  address: 0.15
  identifier_bonus: 5.0

search:
  threshold: 80
  match_aliases: true
  max_results: 50
  parallel_threshold: 1024
"#;

        let cfg = ScreenConfig::from_yaml(yaml)
            .unwrap()
            .into_match_config()
            .unwrap();
        assert!(cfg.normalize.fold_diacritics);
        assert_eq!(cfg.similarity.prefix_scale, 0.2);
        assert_eq!(cfg.similarity.max_prefix_len, 3);
        assert_eq!(cfg.weights.last_name, 0.6);
        assert_eq!(cfg.threshold, 80);
        assert!(cfg.match_aliases);
        assert_eq!(cfg.max_results, Some(50));
        assert_eq!(cfg.parallel_threshold, 1024);
    }
}
