//! AHP engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{AhpEngine, CONSISTENCY_THRESHOLD};

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// CR below which a matrix counts as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Also check each criterion's alternative matrix
    #[serde(default = "default_check_alternative_consistency")]
    pub check_alternative_consistency: bool,
}

impl EngineConfig {
    /// Build an engine with these settings
    pub fn build_engine(&self) -> AhpEngine {
        AhpEngine::new()
            .with_threshold(self.consistency_threshold)
            .check_alternative_consistency(self.check_alternative_consistency)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(t));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            check_alternative_consistency: default_check_alternative_consistency(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_check_alternative_consistency() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.consistency_threshold, 0.10);
        assert!(config.check_alternative_consistency);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_rejects_zero_threshold() {
        let config = EngineConfig {
            consistency_threshold: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidConsistencyThreshold(0.0))
        );
    }

    #[test]
    fn test_engine_config_rejects_threshold_above_one() {
        let config = EngineConfig {
            consistency_threshold: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_engine_config_rejects_nan_threshold() {
        let config = EngineConfig {
            consistency_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_engine_applies_settings() {
        let config = EngineConfig {
            consistency_threshold: 0.2,
            check_alternative_consistency: false,
        };
        let engine = config.build_engine();
        assert_eq!(engine.checker().threshold(), 0.2);
        assert_eq!(
            engine,
            AhpEngine::new()
                .with_threshold(0.2)
                .check_alternative_consistency(false)
        );
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{ "consistency_threshold": 0.05 }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.consistency_threshold, 0.05);
        assert!(config.check_alternative_consistency);
    }
}
