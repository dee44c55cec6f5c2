//! Configuration for placement
//!
//! ```toml
//! default_scale = 1.5
//! id_strategy = "counter"
//! id_prefix = "shape"
//! max_id_attempts = 8
//! history_limit = 50
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::ids::{IdStrategy, DEFAULT_MAX_ATTEMPTS};
use crate::scene::Scene;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Placement settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementConfig {
    /// Scale used when the caller does not give one
    pub default_scale: f64,
    /// How identifiers are generated
    pub id_strategy: IdStrategy,
    /// Prefix for counter-based identifiers
    pub id_prefix: String,
    /// Bound on identifier collision retries
    pub max_id_attempts: u32,
    /// Undo checkpoints kept by an in-memory scene (at least 1)
    pub history_limit: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            default_scale: 1.0,
            id_strategy: IdStrategy::Uuid,
            id_prefix: "el".to_string(),
            max_id_attempts: DEFAULT_MAX_ATTEMPTS,
            history_limit: Scene::DEFAULT_HISTORY,
        }
    }
}

impl PlacementConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_default_scale(mut self, scale: f64) -> Self {
        self.default_scale = scale;
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = attempts;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// An empty scene honoring the configured history limit
    pub fn new_scene(&self) -> Scene {
        Scene::with_history_limit(self.history_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.default_scale, 1.0);
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert_eq!(config.id_prefix, "el");
        assert_eq!(config.max_id_attempts, 8);
        assert_eq!(config.history_limit, 100);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::new()
            .with_default_scale(2.0)
            .with_id_strategy(IdStrategy::Counter)
            .with_id_prefix("shape");

        assert_eq!(config.default_scale, 2.0);
        assert_eq!(config.id_strategy, IdStrategy::Counter);
        assert_eq!(config.id_prefix, "shape");
    }

    #[test]
    fn test_from_str_partial() {
        let config = PlacementConfig::from_str(
            r#"
            id_strategy = "counter"
            history_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Counter);
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.default_scale, 1.0);
        assert_eq!(config.new_scene().undo_count(), 0);
    }

    #[test]
    fn test_from_str_rejects_unknown_key() {
        let result = PlacementConfig::from_str("colour = \"red\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_missing_file() {
        let result = PlacementConfig::from_file(Path::new("/nonexistent/shapes.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_zero_history_limit_still_records_placement() {
        let config = PlacementConfig::from_str("history_limit = 0").unwrap();
        let mut scene = config.new_scene();
        crate::place_shape(&mut scene, "Car", crate::Point::new(0.0, 0.0)).unwrap();
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.undo_count(), 1);
    }
}
