//! GenerateDecisionHandler - Command handler for decision support generation.
//!
//! Runs the provider for background, options, risk, cost-benefit and a
//! recommendation, normalizes every payload, assembles a scheduled and
//! prioritized `PendingDecision`, and persists it.
//!
//! Each provider step has a deterministic fallback, so a slow or broken
//! provider degrades the analysis but never fails the command.

use futures::join;
use std::sync::Arc;
use tracing::{error, info};

use super::prompts;
use super::provider_gateway::{NormalizedOutcome, ProviderGateway};
use crate::config::ProviderConfig;
use crate::domain::decision::{
    fallbacks, DecisionAnalysis, DecisionOption, GenerationRequest, PendingDecision,
};
use crate::domain::foundation::{DecisionId, DomainError, Timestamp};
use crate::domain::normalize::{ContentNormalizer, ValidationDefault};
use crate::ports::{ContentProvider, DecisionRepository, GenerationPurpose, ProviderOutcome};

/// Command to generate decision support.
#[derive(Debug, Clone)]
pub struct GenerateDecisionCommand {
    pub request: GenerationRequest,
    /// Bound on each provider call; the configured timeout when `None`.
    pub timeout_ms: Option<u64>,
}

impl GenerateDecisionCommand {
    pub fn new(request: GenerationRequest) -> Self {
        Self { request, timeout_ms: None }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// A provider step that used its deterministic fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackNotice {
    pub purpose: GenerationPurpose,
    pub reason: String,
}

/// Result of successful generation.
#[derive(Debug, Clone)]
pub struct GenerateDecisionResult {
    pub decision: PendingDecision,
    pub fallbacks: Vec<FallbackNotice>,
    pub validation_defaults: Vec<ValidationDefault>,
}

impl GenerateDecisionResult {
    pub fn used_fallback(&self, purpose: GenerationPurpose) -> bool {
        self.fallbacks.iter().any(|f| f.purpose == purpose)
    }
}

#[derive(Default)]
struct Collected {
    fallbacks: Vec<FallbackNotice>,
    defaults: Vec<ValidationDefault>,
}

impl Collected {
    fn take<T>(&mut self, purpose: GenerationPurpose, outcome: ProviderOutcome<T>) -> T {
        match outcome {
            ProviderOutcome::Generated(value) => value,
            ProviderOutcome::Fallback { value, reason } => {
                self.fallbacks.push(FallbackNotice { purpose, reason });
                value
            }
        }
    }

    fn take_normalized<T>(&mut self, purpose: GenerationPurpose, result: NormalizedOutcome<T>) -> T {
        self.defaults.extend(result.defaults);
        self.take(purpose, result.outcome)
    }
}

/// Handler for generating decision support.
pub struct GenerateDecisionHandler {
    gateway: ProviderGateway,
    repository: Arc<dyn DecisionRepository>,
}

impl GenerateDecisionHandler {
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        repository: Arc<dyn DecisionRepository>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            gateway: ProviderGateway::new(provider, config),
            repository,
        }
    }

    pub async fn handle(&self, cmd: GenerateDecisionCommand) -> Result<GenerateDecisionResult, DomainError> {
        let request = cmd.request;
        request.validate()?;
        let gateway = self.gateway.with_timeout(cmd.timeout_ms);

        let mut collected = Collected::default();

        // 1. Background and options are independent of each other
        let (background, options) = join!(
            gateway.text_or(
                GenerationPurpose::Background,
                prompts::background(&request),
                || fallbacks::default_background(&request.title),
            ),
            Self::options(&gateway, &request),
        );
        let background = collected.take(GenerationPurpose::Background, background);
        let mut options = collected.take_normalized(GenerationPurpose::Options, options);
        options.truncate(usize::from(request.max_options));

        // 2. Risk and cost-benefit both read the options
        let (risk, cost_benefit) = join!(
            gateway.normalized_or(
                GenerationPurpose::RiskAssessment,
                prompts::risk_assessment(&request, &options),
                ContentNormalizer::risk_assessment,
                fallbacks::default_risk_assessment,
            ),
            gateway.normalized_or(
                GenerationPurpose::CostBenefit,
                prompts::cost_benefit(&request, &options),
                ContentNormalizer::cost_benefit,
                fallbacks::default_cost_benefit,
            ),
        );
        let risk_assessment = collected.take_normalized(GenerationPurpose::RiskAssessment, risk);
        let cost_benefit_analysis = collected.take_normalized(GenerationPurpose::CostBenefit, cost_benefit);

        // 3. Recommendation must name one of the surviving options
        let recommendation = gateway
            .normalized_or(
                GenerationPurpose::Recommendation,
                prompts::recommendation(&request, &options, &risk_assessment, &cost_benefit_analysis),
                |payload| ContentNormalizer::recommendation(payload, &options),
                || fallbacks::default_recommendation(&options),
            )
            .await;
        let recommendation = collected.take_normalized(GenerationPurpose::Recommendation, recommendation);

        // 4. Assemble and persist
        let analysis = DecisionAnalysis {
            background,
            options,
            risk_assessment,
            cost_benefit_analysis,
            recommendation,
        };
        let decision = PendingDecision::assemble(DecisionId::new(), &request, analysis, Timestamp::now())?;

        if let Err(e) = self.repository.save(&decision).await {
            error!(decision_id = %decision.id, error = %e, "Failed to persist generated decision");
            return Err(DomainError::generation_unavailable());
        }

        info!(
            decision_id = %decision.id,
            category = %decision.category,
            priority = decision.priority,
            options = decision.options.len(),
            fallbacks = collected.fallbacks.len(),
            defaults = collected.defaults.len(),
            "Decision support generated"
        );

        Ok(GenerateDecisionResult {
            decision,
            fallbacks: collected.fallbacks,
            validation_defaults: collected.defaults,
        })
    }

    /// Options from the provider; an empty list counts as a failure.
    async fn options(gateway: &ProviderGateway, request: &GenerationRequest) -> NormalizedOutcome<Vec<DecisionOption>> {
        let mut result = gateway
            .normalized_or(
                GenerationPurpose::Options,
                prompts::options(request),
                ContentNormalizer::options,
                fallbacks::default_options,
            )
            .await;

        if let ProviderOutcome::Generated(options) = &result.outcome {
            if options.is_empty() {
                result.outcome = ProviderOutcome::fallback(
                    fallbacks::default_options(),
                    "provider payload contained no usable options",
                );
            }
        }
        result
    }
}
