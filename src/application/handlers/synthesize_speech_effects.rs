//! SynthesizeSpeechEffectsHandler - Command handler turning a delivered
//! speech into simulation effects.
//!
//! The impact vector comes from the caller when it already has one, or
//! from the provider otherwise. Either way it is normalized, modulated by
//! the delivery mode, synthesized into effects and submitted to the
//! ledger. Entries left over from an earlier run of the same speech whose
//! dimension now falls under the noise floor are cancelled.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::effect_dispatcher::{BatchReport, EffectDispatcher};
use super::prompts;
use super::provider_gateway::ProviderGateway;
use crate::config::ProviderConfig;
use crate::domain::foundation::{DeliveryMode, DomainError, SpeechType, Timestamp, UrgencyLevel};
use crate::domain::impact::{
    default_speech_impact, speech_priority, DeliveryModulator, EffectSource, EffectSynthesizer,
    EffectThresholds, ImpactVector, KnobSet, LedgerKey, SimulationEffect,
};
use crate::domain::normalize::{ContentNormalizer, ValidationDefault};
use crate::ports::{ContentProvider, EffectLedger, GenerationPurpose, ProviderOutcome};

/// Command to synthesize the effects of one speech.
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechEffectsCommand {
    pub speech_id: String,
    pub speech_type: SpeechType,
    pub delivery_mode: DeliveryMode,
    pub content: String,
    pub audience: Option<String>,
    /// Impact payload already produced upstream. Skips the provider.
    pub impact: Option<Value>,
    /// Provider timeout for this call; the configured one when `None`.
    pub timeout_ms: Option<u64>,
}

impl SynthesizeSpeechEffectsCommand {
    pub fn new(speech_id: impl Into<String>, speech_type: SpeechType, delivery_mode: DeliveryMode) -> Self {
        Self {
            speech_id: speech_id.into(),
            speech_type,
            delivery_mode,
            content: String::new(),
            audience: None,
            impact: None,
            timeout_ms: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_impact(mut self, impact: Value) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Result of a synthesis run.
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechEffectsResult {
    /// The impact vector used; a caller-supplied payload counts as generated.
    pub impact: ProviderOutcome<ImpactVector>,
    pub validation_defaults: Vec<ValidationDefault>,
    pub effects: Vec<SimulationEffect>,
    pub suppressed: Vec<String>,
    /// Earlier entries of this speech cancelled because their parameter
    /// is now suppressed.
    pub withdrawn: usize,
    pub priority: UrgencyLevel,
    pub report: BatchReport,
}

/// Handler for synthesizing speech effects.
pub struct SynthesizeSpeechEffectsHandler {
    gateway: ProviderGateway,
    modulator: DeliveryModulator,
    synthesizer: EffectSynthesizer,
    dispatcher: EffectDispatcher,
}

impl SynthesizeSpeechEffectsHandler {
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        ledger: Arc<dyn EffectLedger>,
        config: ProviderConfig,
        thresholds: EffectThresholds,
        knobs: KnobSet,
    ) -> Self {
        Self {
            gateway: ProviderGateway::new(provider, config),
            modulator: DeliveryModulator::new(knobs),
            synthesizer: EffectSynthesizer::new(thresholds),
            dispatcher: EffectDispatcher::new(ledger),
        }
    }

    pub async fn handle(
        &self,
        cmd: SynthesizeSpeechEffectsCommand,
    ) -> Result<SynthesizeSpeechEffectsResult, DomainError> {
        if cmd.speech_id.trim().is_empty() {
            return Err(DomainError::validation("speech_id", "Speech id cannot be empty"));
        }

        let (impact, validation_defaults) = match &cmd.impact {
            Some(payload) => {
                let normalized = ContentNormalizer::impact(payload);
                (ProviderOutcome::Generated(normalized.value), normalized.defaults)
            }
            None => {
                let prompt = prompts::speech_impact(
                    cmd.speech_type,
                    cmd.delivery_mode,
                    cmd.audience.as_deref(),
                    &cmd.content,
                );
                let result = self
                    .gateway
                    .with_timeout(cmd.timeout_ms)
                    .normalized_or(GenerationPurpose::SpeechImpact, prompt, ContentNormalizer::impact, || {
                        default_speech_impact(cmd.speech_type)
                    })
                    .await;
                (result.outcome, result.defaults)
            }
        };

        let context = self.modulator.context(cmd.delivery_mode);
        let output = self.synthesizer.synthesize(
            impact.value(),
            &context,
            EffectSource::Speech,
            &cmd.speech_id,
            Timestamp::now(),
        );
        let priority = speech_priority(cmd.speech_type, impact.value());
        let report = self.dispatcher.dispatch(&output.effects).await;

        let stale: Vec<LedgerKey> = output
            .suppressed
            .iter()
            .map(|parameter| LedgerKey {
                source: EffectSource::Speech,
                source_id: cmd.speech_id.clone(),
                parameter: parameter.clone(),
            })
            .collect();
        let withdrawn = self.dispatcher.withdraw(&stale).await;

        info!(
            speech_id = %cmd.speech_id,
            speech_type = %cmd.speech_type,
            delivery_mode = %cmd.delivery_mode,
            priority = %priority,
            fallback = impact.is_fallback(),
            emitted = output.effects.len(),
            suppressed = output.suppressed.len(),
            withdrawn,
            dropped = report.dropped.len(),
            "Speech effects synthesized"
        );

        Ok(SynthesizeSpeechEffectsResult {
            impact,
            validation_defaults,
            effects: output.effects,
            suppressed: output.suppressed,
            withdrawn,
            priority,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEffectLedger, MockContentProvider};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::impact::{EffectOp, EffectStatus, Magnitude, TargetSystem};
    use serde_json::json;

    fn handler(provider: MockContentProvider, ledger: InMemoryEffectLedger) -> SynthesizeSpeechEffectsHandler {
        SynthesizeSpeechEffectsHandler::new(
            Arc::new(provider),
            Arc::new(ledger),
            ProviderConfig::default(),
            EffectThresholds::default(),
            KnobSet::default(),
        )
    }

    #[tokio::test]
    async fn supplied_payload_skips_provider() {
        let provider = MockContentProvider::new();
        let ledger = InMemoryEffectLedger::new();
        let cmd = SynthesizeSpeechEffectsCommand::new("speech-1", SpeechType::PolicyAnnouncement, DeliveryMode::Teleprompter)
            .with_impact(json!({"morale": 0.4, "approval": 0.2, "economicConfidence": 0.01}));

        let result = handler(provider.clone(), ledger.clone()).handle(cmd).await.unwrap();

        assert_eq!(provider.call_count(), 0);
        assert!(!result.impact.is_fallback());
        assert_eq!(result.effects.len(), 2);
        let morale = &result.effects[0];
        assert_eq!(morale.system, TargetSystem::Population);
        assert_eq!(morale.op, EffectOp::Increase);
        assert!((morale.value - 0.48).abs() < 1e-9);
        assert_eq!(morale.duration_ticks, Some(6));
        assert_eq!(morale.magnitude, Magnitude::Major);
        assert!(result.suppressed.contains(&"confidence".to_string()));
        assert_eq!(result.priority, UrgencyLevel::Critical);
        assert_eq!(result.report.inserted(), 2);
        assert_eq!(ledger.len().await, 2);
    }

    #[tokio::test]
    async fn provider_failure_uses_speech_type_defaults() {
        let ledger = InMemoryEffectLedger::new();
        let cmd = SynthesizeSpeechEffectsCommand::new("speech-2", SpeechType::VictorySpeech, DeliveryMode::Avatar)
            .with_content("We have prevailed.");

        let result = handler(MockContentProvider::new(), ledger.clone()).handle(cmd).await.unwrap();

        assert!(result.impact.is_fallback());
        assert_eq!(result.impact.value().morale.value(), 0.15);
        // morale .15 and approval .1 clear the .05 noise floor
        let params: Vec<&str> = result.effects.iter().map(|e| e.parameter.as_str()).collect();
        assert_eq!(params, vec!["morale", "leader_approval"]);
        assert_eq!(result.priority, UrgencyLevel::Important);

        assert!(ledger.get(&result.effects[0].ledger_key()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn resubmitting_a_speech_updates_in_place() {
        let ledger = InMemoryEffectLedger::new();
        let handler = handler(MockContentProvider::new(), ledger.clone());
        let cmd = SynthesizeSpeechEffectsCommand::new("speech-3", SpeechType::Rally, DeliveryMode::OffTheCuff)
            .with_impact(json!({"morale": -0.3}));

        handler.handle(cmd.clone()).await.unwrap();
        let second = handler.handle(cmd).await.unwrap();

        assert_eq!(second.report.updated(), 1);
        assert_eq!(second.effects[0].op, EffectOp::Decrease);
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn dimension_falling_under_noise_floor_is_withdrawn() {
        let ledger = InMemoryEffectLedger::new();
        let handler = handler(MockContentProvider::new(), ledger.clone());
        let first = SynthesizeSpeechEffectsCommand::new("speech-5", SpeechType::Rally, DeliveryMode::Avatar)
            .with_impact(json!({"morale": 0.3, "approval": 0.2}));
        let approval = handler.handle(first).await.unwrap().effects[1].ledger_key();

        let second = SynthesizeSpeechEffectsCommand::new("speech-5", SpeechType::Rally, DeliveryMode::Avatar)
            .with_impact(json!({"morale": 0.3, "approval": 0.02}));
        let result = handler.handle(second).await.unwrap();

        assert_eq!(result.withdrawn, 1);
        assert_eq!(result.report.updated(), 1);
        let entry = ledger.get(&approval).await.unwrap().unwrap();
        assert_eq!(entry.status, EffectStatus::Cancelled);
        let pending = ledger.query_pending(1).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].effect.parameter, "morale");
    }

    #[tokio::test]
    async fn command_timeout_bounds_the_provider_call() {
        let provider = MockContentProvider::new()
            .with_response(GenerationPurpose::SpeechImpact, r#"{"morale": 0.4}"#)
            .with_delay(std::time::Duration::from_millis(300));
        let cmd = SynthesizeSpeechEffectsCommand::new("speech-6", SpeechType::CrisisAddress, DeliveryMode::Avatar)
            .with_timeout_ms(10);

        let result = handler(provider, InMemoryEffectLedger::new()).handle(cmd).await.unwrap();

        assert!(result.impact.is_fallback());
        assert_eq!(result.impact.value(), &default_speech_impact(SpeechType::CrisisAddress));
    }

    #[tokio::test]
    async fn ledger_failure_drops_only_that_effect() {
        let ledger = InMemoryEffectLedger::new().with_failing_parameter("leader_approval");
        let cmd = SynthesizeSpeechEffectsCommand::new("speech-4", SpeechType::Rally, DeliveryMode::Avatar)
            .with_impact(json!({"morale": 0.2, "approval": 0.2}));

        let result = handler(MockContentProvider::new(), ledger.clone()).handle(cmd).await.unwrap();

        assert_eq!(result.effects.len(), 2);
        assert_eq!(result.report.dropped.len(), 1);
        assert_eq!(result.report.dropped[0].key.parameter, "leader_approval");
        assert_eq!(ledger.len().await, 1);
    }

    #[tokio::test]
    async fn empty_speech_id_is_rejected() {
        let cmd = SynthesizeSpeechEffectsCommand::new(" ", SpeechType::Rally, DeliveryMode::Avatar);
        let err = handler(MockContentProvider::new(), InMemoryEffectLedger::new())
            .handle(cmd)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
