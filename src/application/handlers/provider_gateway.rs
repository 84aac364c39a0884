//! Bounded calls to the content provider with deterministic fallbacks.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::domain::normalize::{extract_json, Normalized, ValidationDefault};
use crate::ports::{ContentProvider, GenerationPurpose, ProviderError, ProviderOutcome};

/// A provider outcome plus the repairs the normalizer made to it.
#[derive(Debug, Clone)]
pub struct NormalizedOutcome<T> {
    pub outcome: ProviderOutcome<T>,
    pub defaults: Vec<ValidationDefault>,
}

/// Wraps a [`ContentProvider`] with the configured timeout and sampling.
///
/// Every call is bounded by `timeout_ms`; a timeout, provider error or
/// malformed payload never propagates. The caller's fallback is used
/// instead and the failure is logged at `warn`.
#[derive(Clone)]
pub struct ProviderGateway {
    provider: Arc<dyn ContentProvider>,
    config: ProviderConfig,
}

impl ProviderGateway {
    pub fn new(provider: Arc<dyn ContentProvider>, config: ProviderConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// This gateway bounded by `timeout_ms` when given, else unchanged.
    pub fn with_timeout(&self, timeout_ms: Option<u64>) -> Self {
        let mut gateway = self.clone();
        if let Some(timeout_ms) = timeout_ms {
            gateway.config.timeout_ms = timeout_ms;
        }
        gateway
    }

    /// Raw text for `purpose`, bounded by the configured timeout.
    pub async fn generate_text(&self, purpose: GenerationPurpose, prompt: String) -> Result<String, ProviderError> {
        let timeout = self.config.timeout();
        let request = self.config.prompt(purpose, prompt);

        match tokio::time::timeout(timeout, self.provider.generate(request)).await {
            Ok(Ok(generated)) if generated.content.trim().is_empty() => {
                Err(ProviderError::malformed("provider returned empty content"))
            }
            Ok(Ok(generated)) => {
                debug!(purpose = %purpose, model = %generated.model, "Provider content received");
                Ok(generated.content)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ProviderError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }),
        }
    }

    /// The JSON value embedded in the provider's reply.
    pub async fn generate_json(&self, purpose: GenerationPurpose, prompt: String) -> Result<Value, ProviderError> {
        let text = self.generate_text(purpose, prompt).await?;
        extract_json(&text).map_err(|e| ProviderError::malformed(e.to_string()))
    }

    /// Plain text, or `fallback` on any failure.
    pub async fn text_or(
        &self,
        purpose: GenerationPurpose,
        prompt: String,
        fallback: impl FnOnce() -> String,
    ) -> ProviderOutcome<String> {
        match self.generate_text(purpose, prompt).await {
            Ok(text) => ProviderOutcome::Generated(text.trim().to_string()),
            Err(e) => Self::fall_back(purpose, e, fallback),
        }
    }

    /// A normalized record, or `fallback` on any failure.
    pub async fn normalized_or<T>(
        &self,
        purpose: GenerationPurpose,
        prompt: String,
        normalize: impl FnOnce(&Value) -> Normalized<T>,
        fallback: impl FnOnce() -> T,
    ) -> NormalizedOutcome<T> {
        match self.generate_json(purpose, prompt).await {
            Ok(payload) => {
                let normalized = normalize(&payload);
                NormalizedOutcome {
                    outcome: ProviderOutcome::Generated(normalized.value),
                    defaults: normalized.defaults,
                }
            }
            Err(e) => NormalizedOutcome {
                outcome: Self::fall_back(purpose, e, fallback),
                defaults: Vec::new(),
            },
        }
    }

    fn fall_back<T>(purpose: GenerationPurpose, error: ProviderError, fallback: impl FnOnce() -> T) -> ProviderOutcome<T> {
        warn!(purpose = %purpose, error = %error, "Provider failure, using deterministic fallback");
        ProviderOutcome::fallback(fallback(), error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockContentProvider;
    use crate::domain::impact::ImpactVector;
    use crate::domain::normalize::ContentNormalizer;
    use std::time::Duration;

    fn gateway(provider: MockContentProvider, timeout_ms: u64) -> ProviderGateway {
        let config = ProviderConfig { timeout_ms, ..Default::default() };
        ProviderGateway::new(Arc::new(provider), config)
    }

    #[tokio::test]
    async fn fenced_payload_is_normalized() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::SpeechImpact, "```json\n{\"morale\": 3}\n```");
        let result = gateway(provider, 1000)
            .normalized_or(GenerationPurpose::SpeechImpact, "p".into(), ContentNormalizer::impact, ImpactVector::default)
            .await;
        assert!(!result.outcome.is_fallback());
        assert_eq!(result.outcome.value().morale.value(), 1.0);
        assert!(!result.defaults.is_empty());
    }

    #[tokio::test]
    async fn slow_provider_times_out_to_fallback() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::Background, "late")
            .with_delay(Duration::from_millis(200));
        let outcome = gateway(provider, 20)
            .text_or(GenerationPurpose::Background, "p".into(), || "fallback".to_string())
            .await;
        assert_eq!(
            outcome,
            ProviderOutcome::Fallback {
                value: "fallback".to_string(),
                reason: "provider call timed out after 20ms".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn caller_timeout_overrides_config() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::Background, "on time")
            .with_delay(Duration::from_millis(100));
        let gw = gateway(provider, 5);

        let outcome = gw
            .with_timeout(Some(2_000))
            .text_or(GenerationPurpose::Background, "p".into(), || "fallback".to_string())
            .await;
        assert_eq!(outcome, ProviderOutcome::Generated("on time".to_string()));

        assert_eq!(gw.with_timeout(None).config().timeout_ms, 5);
    }

    #[tokio::test]
    async fn prose_without_json_is_malformed() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::Options, "I cannot help with that.");
        let err = gateway(provider, 1000)
            .generate_json(GenerationPurpose::Options, "p".into())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Malformed(_)));
    }

    #[tokio::test]
    async fn sampling_follows_purpose() {
        let provider = MockContentProvider::new();
        let gw = gateway(provider.clone(), 1000);
        let _ = gw.generate_text(GenerationPurpose::RiskAssessment, "p".into()).await;
        let call = &provider.calls()[0];
        assert_eq!(call.temperature, 0.2);
        assert_eq!(call.max_tokens, 1500);
    }
}
