//! Content normalizer - typed records out of arbitrary provider output.
//!
//! Never fails: every malformed field becomes a [`ValidationDefault`] and
//! a usable value. Normalizing the serialized form of a normalized record
//! yields the same record.

use serde_json::Value;
use std::collections::HashSet;

use super::fields::{DefaultLog, DefaultReason, Fields, ValidationDefault};
use crate::domain::decision::{
    fallbacks, BenefitItem, CostBenefitAnalysis, CostItem, DecisionOption, ExpectedOutcome,
    Recommendation, ResourceRequirement, RiskAssessment, RiskItem,
};
use crate::domain::foundation::{
    ConfidenceLevel, OptionId, OutcomeImpact, OutcomeTimeframe, RiskId, RiskLevel, UnitInterval,
};
use crate::domain::impact::{ImpactDimension, ImpactVector};

/// A normalized record plus the repairs made to produce it.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub defaults: Vec<ValidationDefault>,
}

impl<T> Normalized<T> {
    fn finish(value: T, log: DefaultLog) -> Self {
        Self { value, defaults: log.into_events() }
    }

    /// True when the payload needed no repairs.
    pub fn is_clean(&self) -> bool {
        self.defaults.is_empty()
    }
}

/// Stateless normalizer.
pub struct ContentNormalizer;

impl ContentNormalizer {
    /// Options from either a bare array or an object with an `options` array.
    pub fn options(payload: &Value) -> Normalized<Vec<DecisionOption>> {
        let mut log = DefaultLog::default();
        let items: Vec<(String, &Value)> = match payload {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| (format!("options[{}]", i), item))
                .collect(),
            _ => Fields::new(payload, "", &mut log).items("options", &mut log),
        };

        let mut seen = HashSet::new();
        let options = items
            .into_iter()
            .map(|(path, item)| {
                let mut option = Self::option_at(item, &path, &mut log);
                if !seen.insert(option.id.clone()) {
                    log.record(format!("{}.id", path), DefaultReason::DuplicateId);
                    option.id = OptionId::generate();
                    seen.insert(option.id.clone());
                }
                option
            })
            .collect();
        Normalized::finish(options, log)
    }

    pub fn option(payload: &Value) -> Normalized<DecisionOption> {
        let mut log = DefaultLog::default();
        let option = Self::option_at(payload, "option", &mut log);
        Normalized::finish(option, log)
    }

    fn option_at(payload: &Value, path: &str, log: &mut DefaultLog) -> DecisionOption {
        let f = Fields::new(payload, path, log);

        let id = match f.optional_text("id").and_then(|id| OptionId::new(id).ok()) {
            Some(id) => id,
            None => {
                log.record(format!("{}.id", path), DefaultReason::GeneratedId);
                OptionId::generate()
            }
        };

        let mut option = DecisionOption::new(id, f.text("title", "Decision Option", log), f.text("description", "", log));
        option.pros = f.strings("pros", log);
        option.cons = f.strings("cons", log);
        option.risks = f.strings("risks", log);
        option.opportunities = f.strings("opportunities", log);
        option.expected_outcomes = f
            .items("expectedOutcomes", log)
            .into_iter()
            .map(|(p, v)| Self::outcome_at(v, &p, log))
            .collect();
        option.resource_requirements = f
            .items("resourceRequirements", log)
            .into_iter()
            .map(|(p, v)| Self::requirement_at(v, &p, log))
            .collect();
        option.success_probability = f.unit("successProbability", 0.5, log);
        option.risk_level = f.unit("riskLevel", 0.3, log);
        option.cost_estimate = f.non_negative("costEstimate", 0.0, log);
        option.time_to_implement_days = f.non_negative("timeToImplement", 30.0, log);
        option.support_level = f
            .number_map("supportLevel", 0.0, 1.0, log)
            .into_iter()
            .map(|(k, v)| (k, UnitInterval::new(v)))
            .collect();
        option.opposition = f.strings("opposition", log);
        option.ai_reasoning = f.text("aiReasoning", "Option analysis completed", log);
        option
    }

    fn outcome_at(payload: &Value, path: &str, log: &mut DefaultLog) -> ExpectedOutcome {
        let f = Fields::new(payload, path, log);
        ExpectedOutcome {
            description: f.text("description", "", log),
            probability: f.unit("probability", 0.5, log),
            impact: f.label("impact", OutcomeImpact::from_label, OutcomeImpact::Medium, log),
            timeframe: f.label("timeframe", OutcomeTimeframe::from_label, OutcomeTimeframe::MediumTerm, log),
            metrics: f.strings("metrics", log),
        }
    }

    fn requirement_at(payload: &Value, path: &str, log: &mut DefaultLog) -> ResourceRequirement {
        let f = Fields::new(payload, path, log);
        ResourceRequirement {
            resource_type: f.text("type", "financial", log),
            description: f.text("description", "", log),
            quantity: f.non_negative("quantity", 0.0, log),
            unit: f.text("unit", "units", log),
            availability: f.unit("availability", 0.5, log),
            criticality: f.label("criticality", RiskLevel::from_label, RiskLevel::Medium, log),
        }
    }

    pub fn risk_assessment(payload: &Value) -> Normalized<RiskAssessment> {
        let mut log = DefaultLog::default();
        let f = Fields::new(payload, "riskAssessment", &mut log);

        let mut seen = HashSet::new();
        let risks = f
            .items("risks", &mut log)
            .into_iter()
            .map(|(path, item)| {
                let mut risk = Self::risk_at(item, &path, &mut log);
                if !seen.insert(risk.id.clone()) {
                    log.record(format!("{}.id", path), DefaultReason::DuplicateId);
                    risk.id = RiskId::generate();
                    seen.insert(risk.id.clone());
                }
                risk
            })
            .collect();

        let assessment = RiskAssessment {
            overall_risk: f.label("overallRisk", RiskLevel::from_label, RiskLevel::Medium, &mut log),
            risks,
            implementation: f.unit("implementation", 0.3, &mut log),
            financial: f.unit("financial", 0.3, &mut log),
            political: f.unit("political", 0.3, &mut log),
            operational: f.unit("operational", 0.3, &mut log),
            strategic: f.unit("strategic", 0.3, &mut log),
            mitigation_strategies: f.strings("mitigationStrategies", &mut log),
            contingency_plans: f.strings("contingencyPlans", &mut log),
            risk_indicators: f.strings("riskIndicators", &mut log),
            review_frequency: f.text("reviewFrequency", "monthly", &mut log),
        };
        Normalized::finish(assessment, log)
    }

    fn risk_at(payload: &Value, path: &str, log: &mut DefaultLog) -> RiskItem {
        let f = Fields::new(payload, path, log);
        let id = match f.optional_text("id").and_then(|id| RiskId::new(id).ok()) {
            Some(id) => id,
            None => {
                log.record(format!("{}.id", path), DefaultReason::GeneratedId);
                RiskId::generate()
            }
        };
        // riskScore in the payload is ignored; the item derives its own.
        let mut risk = RiskItem::new(
            id,
            f.text("description", "", log),
            f.text("category", "operational", log),
            f.unit("probability", 0.3, log),
            f.unit("impact", 0.5, log),
        );
        risk.mitigation = f.strings("mitigation", log);
        risk.contingency = f.strings("contingency", log);
        risk.status = f.text("status", "identified", log);
        risk
    }

    pub fn cost_benefit(payload: &Value) -> Normalized<CostBenefitAnalysis> {
        let mut log = DefaultLog::default();
        let f = Fields::new(payload, "costBenefitAnalysis", &mut log);

        let costs = f
            .items("costs", &mut log)
            .into_iter()
            .map(|(path, item)| {
                let c = Fields::new(item, path, &mut log);
                CostItem {
                    category: c.text("category", "Implementation", &mut log),
                    description: c.text("description", "", &mut log),
                    amount: c.non_negative("amount", 0.0, &mut log),
                    timeframe: c.text("timeframe", "12 months", &mut log),
                    certainty: c.unit("certainty", 0.8, &mut log),
                }
            })
            .collect();
        let benefits = f
            .items("benefits", &mut log)
            .into_iter()
            .map(|(path, item)| {
                let b = Fields::new(item, path, &mut log);
                BenefitItem {
                    category: b.text("category", "Operational", &mut log),
                    description: b.text("description", "", &mut log),
                    value: b.real("value", 0.0, &mut log),
                    timeframe: b.text("timeframe", "12 months", &mut log),
                    certainty: b.unit("certainty", 0.7, &mut log),
                    quantifiable: b.boolean("quantifiable", true, &mut log),
                }
            })
            .collect();

        let analysis = CostBenefitAnalysis {
            net_benefit: f.real("netBenefit", 0.0, &mut log),
            roi: f.real("roi", 0.0, &mut log),
            payback_period: f.non_negative("paybackPeriod", 12.0, &mut log),
            costs,
            benefits,
            break_even_point: f.non_negative("breakEvenPoint", 12.0, &mut log),
            sensitivity_analysis: f.json_map("sensitivityAnalysis", &mut log),
            assumptions: f.strings("assumptions", &mut log),
            confidence: f.label("confidence", ConfidenceLevel::from_label, ConfidenceLevel::Medium, &mut log),
            uncertainty_factors: f.strings("uncertaintyFactors", &mut log),
        };
        Normalized::finish(analysis, log)
    }

    /// A recommendation that must name one of `options`; an unknown or
    /// missing option id falls back to the highest-scored option.
    pub fn recommendation(payload: &Value, options: &[DecisionOption]) -> Normalized<Recommendation> {
        let mut log = DefaultLog::default();
        let f = Fields::new(payload, "recommendation", &mut log);
        let fallback = fallbacks::default_recommendation(options);

        let named = f
            .optional_text("optionId")
            .and_then(|id| OptionId::new(id).ok())
            .filter(|id| options.iter().any(|o| &o.id == id));
        let option_id = match named {
            Some(id) => id,
            None => {
                log.record("recommendation.optionId", DefaultReason::UnknownReference);
                fallback.option_id.clone()
            }
        };

        let recommendation = Recommendation {
            option_id,
            confidence: f.label("confidence", ConfidenceLevel::from_label, ConfidenceLevel::Medium, &mut log),
            reasoning: f.text("reasoning", "", &mut log),
            alternative_considerations: f.strings("alternativeConsiderations", &mut log),
            success_factors: f.strings("successFactors", &mut log),
            pitfalls: f.strings("pitfalls", &mut log),
        };
        Normalized::finish(recommendation, log)
    }

    /// An impact vector with every dimension clamped into `[-1, 1]`.
    pub fn impact(payload: &Value) -> Normalized<ImpactVector> {
        let mut log = DefaultLog::default();
        let f = Fields::new(payload, "impact", &mut log);

        let mut impact = ImpactVector::default();
        for dimension in ImpactDimension::all() {
            let value = f.signed(dimension.field_name(), &mut log);
            impact.set(*dimension, value.value());
        }
        for (policy, support) in f.number_map("policySupport", -1.0, 1.0, &mut log) {
            impact = impact.with_policy_support(policy, support);
        }
        impact.behavioral_changes = f.strings("behavioralChanges", &mut log);
        impact.economic_effects = f.strings("economicEffects", &mut log);
        impact.political_effects = f.strings("politicalEffects", &mut log);
        Normalized::finish(impact, log)
    }
}
