use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::engine::TUBE_CAPACITY;
use crate::error::ConfigError;

/// Search bounds for the breadth-first solver.
///
/// Both bounds only limit how much of the state space is explored. Hitting
/// either one is a normal "no solution found" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Longest solution (in moves) the solver will look for. Nodes whose path
    /// already has this many moves are not expanded.
    pub max_depth: usize,
    /// Number of node expansions after which the search gives up.
    pub max_expansions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_depth: 40,
            max_expansions: 200_000,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Validation("max_depth must be > 0".into()));
        }
        if self.max_expansions == 0 {
            return Err(ConfigError::Validation("max_expansions must be > 0".into()));
        }
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
///
/// ```toml
/// tube_capacity = 4
/// palette = "colors.json"
///
/// [solver]
/// max_depth = 40
/// max_expansions = 200000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub solver: SolverConfig,
    /// Capacity used when reading board files.
    pub tube_capacity: usize,
    /// Optional palette JSON file for colored output.
    pub palette: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            solver: SolverConfig::default(),
            tube_capacity: TUBE_CAPACITY,
            palette: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;
        if self.tube_capacity == 0 {
            return Err(ConfigError::Validation("tube_capacity must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tube_capacity, TUBE_CAPACITY);
        assert!(config.palette.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("[solver]\nmax_depth = 12\n").unwrap();
        assert_eq!(config.solver.max_depth, 12);
        assert_eq!(
            config.solver.max_expansions,
            SolverConfig::default().max_expansions
        );
        assert_eq!(config.tube_capacity, TUBE_CAPACITY);
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            tube_capacity = 3
            palette = "colors.json"

            [solver]
            max_depth = 20
            max_expansions = 500
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.tube_capacity, 3);
        assert_eq!(config.palette, Some(PathBuf::from("colors.json")));
        assert_eq!(
            config.solver,
            SolverConfig {
                max_depth: 20,
                max_expansions: 500
            }
        );
    }

    #[test]
    fn test_validation_rejects_zero_bounds() {
        let err = AppConfig::from_toml("[solver]\nmax_expansions = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        let err = AppConfig::from_toml("tube_capacity = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml("tube_capacity = \"four\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("/nonexistent/solver.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
