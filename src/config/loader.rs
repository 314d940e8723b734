//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading assessment
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AssessmentConfig, NarrativeConfig, RecommendationConfig};

/// Loads and provides access to assessment configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory. The
/// engine also works without files via [`AssessmentConfig::default`], which
/// embeds the canonical tables; the shipped `config/talent` directory
/// mirrors those defaults.
///
/// # Directory Structure
///
/// ```text
/// config/talent/
/// ├── narratives.yaml       # Narrative templates per category
/// └── recommendations.yaml  # Recommendation catalogs and list caps
/// ```
///
/// # Example
///
/// ```no_run
/// use talent_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/talent").unwrap();
/// let narrative = &loader.config().narratives.high_potential.text;
/// println!("High Potential narrative: {}", narrative);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AssessmentConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/talent")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let narratives_path = path.join("narratives.yaml");
        let narratives = Self::load_yaml::<NarrativeConfig>(&narratives_path)?;

        let recommendations_path = path.join("recommendations.yaml");
        let recommendations = Self::load_yaml::<RecommendationConfig>(&recommendations_path)?;

        Ok(Self {
            config: AssessmentConfig {
                narratives,
                recommendations,
            },
        })
    }

    /// Creates a loader around the embedded default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: AssessmentConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying assessment configuration.
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/talent"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_shipped_config_matches_embedded_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.config(), AssessmentConfig::default());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("narratives.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_with_defaults_needs_no_files() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.config().recommendations.limits.category_only, 3);
        assert_eq!(loader.config().recommendations.limits.with_skill, 4);
    }

    #[test]
    fn test_parse_error_reports_path() {
        // A directory entry that exists but is not valid YAML for the schema
        let dir = std::env::temp_dir().join("talent_engine_bad_config");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("narratives.yaml"), "high_potential: 7\n").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("narratives.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
