//! Content provider port - interface to the generative-content provider.
//!
//! The engine hands the provider a prompt plus sampling parameters and gets
//! back raw text. Retry policy belongs to the provider; the engine bounds
//! each call with its own timeout and falls back deterministically.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a generation request is for. Selects sampling defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPurpose {
    Options,
    RiskAssessment,
    CostBenefit,
    Recommendation,
    Background,
    SpeechImpact,
}

impl GenerationPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationPurpose::Options => "options",
            GenerationPurpose::RiskAssessment => "risk_assessment",
            GenerationPurpose::CostBenefit => "cost_benefit",
            GenerationPurpose::Recommendation => "recommendation",
            GenerationPurpose::Background => "background",
            GenerationPurpose::SpeechImpact => "speech_impact",
        }
    }
}

impl fmt::Display for GenerationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt plus sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPrompt {
    pub purpose: GenerationPurpose,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationPrompt {
    pub fn new(purpose: GenerationPurpose, prompt: impl Into<String>) -> Self {
        Self {
            purpose,
            prompt: prompt.into(),
            temperature: 0.3,
            max_tokens: 1000,
        }
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }
}

/// Raw provider output.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub content: String,
    pub model: String,
}

/// Port for the generative-content provider.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Generates text for the prompt.
    ///
    /// # Errors
    ///
    /// Any [`ProviderError`]; callers substitute a deterministic fallback.
    async fn generate(&self, prompt: GenerationPrompt) -> Result<GeneratedContent, ProviderError>;
}

/// Generative provider failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("provider unavailable: {0}")]
    Unavailable(String),

    #[error("provider returned malformed content: {0}")]
    Malformed(String),

    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    #[error("network error: {0}")]
    Network(String),
}

impl ProviderError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Result of an external-call boundary that always yields a value.
///
/// The caller decides whether a fallback is acceptable or should be
/// propagated as a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome<T> {
    Generated(T),
    Fallback { value: T, reason: String },
}

impl<T> ProviderOutcome<T> {
    pub fn fallback(value: T, reason: impl fmt::Display) -> Self {
        Self::Fallback { value, reason: reason.to_string() }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ProviderOutcome::Fallback { .. })
    }

    pub fn value(&self) -> &T {
        match self {
            ProviderOutcome::Generated(value) | ProviderOutcome::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            ProviderOutcome::Generated(value) | ProviderOutcome::Fallback { value, .. } => value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProviderOutcome<U> {
        match self {
            ProviderOutcome::Generated(value) => ProviderOutcome::Generated(f(value)),
            ProviderOutcome::Fallback { value, reason } => ProviderOutcome::Fallback { value: f(value), reason },
        }
    }
}
