//! Generative provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::{GenerationPrompt, GenerationPurpose};

/// Sampling parameters for one kind of generation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingConfig {
    const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self { temperature, max_tokens }
    }

    fn validate(&self, purpose: GenerationPurpose) -> Result<(), ValidationError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidSampling {
                purpose: purpose.to_string(),
                reason: "temperature must lie in [0, 2]",
            });
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidSampling {
                purpose: purpose.to_string(),
                reason: "max_tokens must be greater than zero",
            });
        }
        Ok(())
    }
}

/// Provider timeout and per-purpose sampling defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Upper bound on every provider call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_options")]
    pub options: SamplingConfig,

    #[serde(default = "default_risk_assessment")]
    pub risk_assessment: SamplingConfig,

    #[serde(default = "default_cost_benefit")]
    pub cost_benefit: SamplingConfig,

    #[serde(default = "default_recommendation")]
    pub recommendation: SamplingConfig,

    #[serde(default = "default_background")]
    pub background: SamplingConfig,

    #[serde(default = "default_speech_impact")]
    pub speech_impact: SamplingConfig,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn sampling(&self, purpose: GenerationPurpose) -> SamplingConfig {
        match purpose {
            GenerationPurpose::Options => self.options,
            GenerationPurpose::RiskAssessment => self.risk_assessment,
            GenerationPurpose::CostBenefit => self.cost_benefit,
            GenerationPurpose::Recommendation => self.recommendation,
            GenerationPurpose::Background => self.background,
            GenerationPurpose::SpeechImpact => self.speech_impact,
        }
    }

    /// A prompt carrying the configured sampling for its purpose.
    pub fn prompt(&self, purpose: GenerationPurpose, text: impl Into<String>) -> GenerationPrompt {
        let sampling = self.sampling(purpose);
        GenerationPrompt::new(purpose, text).with_sampling(sampling.temperature, sampling.max_tokens)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        for purpose in [
            GenerationPurpose::Options,
            GenerationPurpose::RiskAssessment,
            GenerationPurpose::CostBenefit,
            GenerationPurpose::Recommendation,
            GenerationPurpose::Background,
            GenerationPurpose::SpeechImpact,
        ] {
            self.sampling(purpose).validate(purpose)?;
        }
        Ok(())
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            options: default_options(),
            risk_assessment: default_risk_assessment(),
            cost_benefit: default_cost_benefit(),
            recommendation: default_recommendation(),
            background: default_background(),
            speech_impact: default_speech_impact(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_options() -> SamplingConfig {
    SamplingConfig::new(0.4, 2000)
}

fn default_risk_assessment() -> SamplingConfig {
    SamplingConfig::new(0.2, 1500)
}

fn default_cost_benefit() -> SamplingConfig {
    SamplingConfig::new(0.2, 1200)
}

fn default_recommendation() -> SamplingConfig {
    SamplingConfig::new(0.3, 1000)
}

fn default_background() -> SamplingConfig {
    SamplingConfig::new(0.3, 600)
}

fn default_speech_impact() -> SamplingConfig {
    SamplingConfig::new(0.2, 800)
}
