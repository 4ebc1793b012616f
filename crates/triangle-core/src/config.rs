use crate::errors::CompilationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How hard the optimiser tries. Passes declare the lowest level they run at.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum OptimizationLevel {
    /// No passes at all
    O0,
    #[default]
    O1,
    O2,
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizationLevel::O0 => "O0",
            OptimizationLevel::O1 => "O1",
            OptimizationLevel::O2 => "O2",
        };
        f.write_str(name)
    }
}

impl FromStr for OptimizationLevel {
    type Err = CompilationError;

    /// Accepts `O1`, `o1` and plain `1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim_start_matches(['O', 'o']);
        match digits {
            "0" => Ok(OptimizationLevel::O0),
            "1" => Ok(OptimizationLevel::O1),
            "2" => Ok(OptimizationLevel::O2),
            _ => Err(CompilationError::ConfigError(format!(
                "unknown optimization level '{}' (expected O0, O1 or O2)",
                s
            ))),
        }
    }
}

/// Optimiser configuration, as read from `triangle.yaml` or `triangle.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Optimization level (default: O1)
    #[serde(default)]
    pub optimization_level: OptimizationLevel,

    /// Run loop-invariant hoisting (default: true)
    #[serde(default = "default_true")]
    pub hoist_loop_invariants: bool,

    /// Pretty-print diagnostics (default: true)
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            optimization_level: OptimizationLevel::O1,
            hoist_loop_invariants: true,
            pretty: true,
        }
    }
}

/// Settings given on the command line; `None` leaves the file value alone
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub optimization_level: Option<OptimizationLevel>,
    pub hoist_loop_invariants: Option<bool>,
    pub pretty: Option<bool>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl OptimizerConfig {
    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file
    pub fn from_file(path: &Path) -> Result<Self, CompilationError> {
        let content = std::fs::read_to_string(path)?;
        if is_yaml(path) {
            serde_yaml::from_str(&content)
                .map_err(|e| CompilationError::ConfigError(format!("{}: {}", path.display(), e)))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| CompilationError::ConfigError(format!("{}: {}", path.display(), e)))
        }
    }

    /// Write the default configuration to `path`, in the format its extension names
    pub fn init_file(path: &Path) -> Result<(), CompilationError> {
        let config = OptimizerConfig::default();
        let text = if is_yaml(path) {
            serde_yaml::to_string(&config)
                .map_err(|e| CompilationError::ConfigError(e.to_string()))?
        } else {
            serde_json::to_string_pretty(&config)
                .map_err(|e| CompilationError::ConfigError(e.to_string()))?
        };
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn merge_with_cli(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.optimization_level {
            self.optimization_level = level;
        }
        if let Some(hoist) = overrides.hoist_loop_invariants {
            self.hoist_loop_invariants = hoist;
        }
        if let Some(pretty) = overrides.pretty {
            self.pretty = pretty;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OptimizerConfig::default();
        assert_eq!(config.optimization_level, OptimizationLevel::O1);
        assert!(config.hoist_loop_invariants);
        assert!(config.pretty);
    }

    #[test]
    fn test_default_level_is_o1() {
        assert_eq!(OptimizationLevel::default(), OptimizationLevel::O1);
        let config: OptimizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.optimization_level, OptimizationLevel::O1);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(OptimizationLevel::O0 < OptimizationLevel::O1);
        assert!(OptimizationLevel::O1 < OptimizationLevel::O2);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("O2".parse::<OptimizationLevel>().unwrap(), OptimizationLevel::O2);
        assert_eq!("o0".parse::<OptimizationLevel>().unwrap(), OptimizationLevel::O0);
        assert_eq!("1".parse::<OptimizationLevel>().unwrap(), OptimizationLevel::O1);
        assert!("O9".parse::<OptimizationLevel>().is_err());
        assert!("".parse::<OptimizationLevel>().is_err());
    }

    #[test]
    fn test_serialize_config() {
        let json = serde_json::to_string(&OptimizerConfig::default()).unwrap();
        assert!(json.contains("\"optimizationLevel\":\"O1\""));
        assert!(json.contains("hoistLoopInvariants"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let json = r#"{ "optimizationLevel": "O0" }"#;
        let config: OptimizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.optimization_level, OptimizationLevel::O0);
        assert!(config.hoist_loop_invariants);
    }

    #[test]
    fn test_merge_only_touches_given_fields() {
        let mut config = OptimizerConfig {
            optimization_level: OptimizationLevel::O2,
            hoist_loop_invariants: true,
            pretty: false,
        };
        config.merge_with_cli(CliOverrides {
            hoist_loop_invariants: Some(false),
            ..CliOverrides::default()
        });
        assert_eq!(config.optimization_level, OptimizationLevel::O2);
        assert!(!config.hoist_loop_invariants);
        assert!(!config.pretty);
    }
}
