//! Quiz configuration
//!
//! Product policy that is not part of the quiz rules themselves: which question
//! counts are offered and where the result bands start. Loaded from JSON, every
//! field falls back to its default.

mod band;

pub use band::*;

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question counts offered below the total, e.g. `[5, 10, 20]`
    #[serde(default = "default_count_thresholds")]
    pub count_thresholds: Vec<usize>,
    #[serde(default)]
    pub bands: BandThresholds,
}

fn default_count_thresholds() -> Vec<usize> {
    vec![5, 10, 20]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            count_thresholds: default_count_thresholds(),
            bands: BandThresholds::default(),
        }
    }
}

impl QuizConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count_thresholds.contains(&0) {
            return Err(QuizError::InvalidConfig(
                "count thresholds must be positive".to_string(),
            ));
        }
        if self.bands.pass > 100 {
            return Err(QuizError::InvalidConfig(format!(
                "pass threshold {} exceeds 100",
                self.bands.pass
            )));
        }
        if self.bands.warn > self.bands.pass {
            return Err(QuizError::InvalidConfig(format!(
                "warn threshold {} above pass threshold {}",
                self.bands.warn, self.bands.pass
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.count_thresholds, vec![5, 10, 20]);
        assert_eq!(config.bands.pass, 80);
        assert_eq!(config.bands.warn, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(QuizConfig::from_json("{}").unwrap(), QuizConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = QuizConfig::from_json(r#"{"count_thresholds": [3, 6], "bands": {"pass": 90}}"#)
            .unwrap();
        assert_eq!(config.count_thresholds, vec![3, 6]);
        assert_eq!(config.bands.pass, 90);
        assert_eq!(config.bands.warn, 50);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            QuizConfig::from_json(r#"{"count_thresholds": [0, 5]}"#),
            Err(QuizError::InvalidConfig(_))
        ));
        assert!(matches!(
            QuizConfig::from_json(r#"{"bands": {"pass": 40, "warn": 60}}"#),
            Err(QuizError::InvalidConfig(_))
        ));
        assert!(matches!(
            QuizConfig::from_json(r#"{"bands": {"pass": 120}}"#),
            Err(QuizError::InvalidConfig(_))
        ));
        assert!(matches!(
            QuizConfig::from_json("[1, 2]"),
            Err(QuizError::Deserialization(_))
        ));
    }
}
