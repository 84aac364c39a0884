//! Effect engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::impact::EffectThresholds;

/// Noise floor and magnitude-class boundaries.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_noise_floor")]
    pub noise_floor: f64,

    #[serde(default = "default_minor_below")]
    pub minor_below: f64,

    #[serde(default = "default_moderate_below")]
    pub moderate_below: f64,

    #[serde(default = "default_major_below")]
    pub major_below: f64,
}

impl EngineConfig {
    pub fn thresholds(&self) -> EffectThresholds {
        EffectThresholds {
            noise_floor: self.noise_floor,
            minor_below: self.minor_below,
            moderate_below: self.moderate_below,
            major_below: self.major_below,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = 0.0 <= self.noise_floor
            && self.noise_floor < self.minor_below
            && self.minor_below < self.moderate_below
            && self.moderate_below < self.major_below
            && self.major_below <= 1.0;
        if !ordered {
            return Err(ValidationError::InvalidThresholds);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            noise_floor: default_noise_floor(),
            minor_below: default_minor_below(),
            moderate_below: default_moderate_below(),
            major_below: default_major_below(),
        }
    }
}

fn default_noise_floor() -> f64 {
    EffectThresholds::DEFAULT.noise_floor
}

fn default_minor_below() -> f64 {
    EffectThresholds::DEFAULT.minor_below
}

fn default_moderate_below() -> f64 {
    EffectThresholds::DEFAULT.moderate_below
}

fn default_major_below() -> f64 {
    EffectThresholds::DEFAULT.major_below
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_effect_thresholds() {
        let config = EngineConfig::default();
        assert_eq!(config.thresholds(), EffectThresholds::DEFAULT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unordered_thresholds() {
        let config = EngineConfig { minor_below: 0.4, ..Default::default() };
        assert_eq!(config.validate(), Err(ValidationError::InvalidThresholds));

        let config = EngineConfig { noise_floor: -0.1, ..Default::default() };
        assert!(config.validate().is_err());

        let config = EngineConfig { major_below: 1.5, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
