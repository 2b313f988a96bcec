//! Solve configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Configuration for a branch-and-cut run.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveConfig {
    /// Wall-clock budget in seconds. `None` means no limit. The budget is
    /// checked between solver invocations; exceeding it surfaces the best
    /// incumbent found so far, explicitly not claimed optimal.
    #[serde(default)]
    pub time_budget_secs: Option<u64>,

    /// Threshold above which a variable value counts as a selected edge when
    /// reading an integer-feasible assignment.
    #[serde(default = "default_integrality_threshold")]
    pub integrality_threshold: f64,
}

fn default_integrality_threshold() -> f64 {
    0.5
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            time_budget_secs: None,
            integrality_threshold: default_integrality_threshold(),
        }
    }
}

impl SolveConfig {
    /// Load from a TOML file and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: SolveConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(self.integrality_threshold > 0.0 && self.integrality_threshold < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "integrality_threshold",
                reason: format!("must be in (0, 1), got {}", self.integrality_threshold),
            }
            .into());
        }
        Ok(())
    }

    /// The wall-clock budget as a duration, if one is configured.
    pub fn time_budget(&self) -> Option<Duration> {
        self.time_budget_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_have_no_time_budget() {
        let config = SolveConfig::default();
        assert_eq!(config.time_budget(), None);
        assert_eq!(config.integrality_threshold, 0.5);
    }

    #[test]
    fn loads_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "time_budget_secs = 30").unwrap();

        let config = SolveConfig::load(file.path()).unwrap();
        assert_eq!(config.time_budget(), Some(Duration::from_secs(30)));
        // Unspecified fields fall back to defaults.
        assert_eq!(config.integrality_threshold, 0.5);
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "integrality_threshold = 1.5").unwrap();

        let err = SolveConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("integrality_threshold"));
    }
}
