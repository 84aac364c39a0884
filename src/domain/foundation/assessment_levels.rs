//! Closed label sets used inside decision analyses.

use serde::{Deserialize, Serialize};

/// Overall risk rating of a decision's risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Contribution to decision priority (0..=4).
    pub fn priority_weight(&self) -> u8 {
        match self {
            RiskLevel::VeryLow => 0,
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
            RiskLevel::VeryHigh => 4,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "very_low" => Some(RiskLevel::VeryLow),
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "very_high" => Some(RiskLevel::VeryHigh),
            _ => None,
        }
    }
}

/// Confidence attached to a recommendation or cost-benefit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "very_low" => Some(ConfidenceLevel::VeryLow),
            "low" => Some(ConfidenceLevel::Low),
            "medium" => Some(ConfidenceLevel::Medium),
            "high" => Some(ConfidenceLevel::High),
            "very_high" => Some(ConfidenceLevel::VeryHigh),
            _ => None,
        }
    }
}

/// Qualitative impact of an expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeImpact {
    Low,
    #[default]
    Medium,
    High,
}

impl OutcomeImpact {
    /// Weight used by the cost-efficiency term of an option score.
    pub fn weight(&self) -> f64 {
        match self {
            OutcomeImpact::High => 1.0,
            OutcomeImpact::Medium => 0.5,
            OutcomeImpact::Low => 0.2,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "low" => Some(OutcomeImpact::Low),
            "medium" => Some(OutcomeImpact::Medium),
            "high" => Some(OutcomeImpact::High),
            _ => None,
        }
    }
}

/// When an expected outcome is anticipated to materialise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeTimeframe {
    Immediate,
    ShortTerm,
    #[default]
    MediumTerm,
    LongTerm,
}

impl OutcomeTimeframe {
    /// Ticks an implementation effect persists; `None` is instantaneous.
    pub fn effect_ticks(&self) -> Option<u32> {
        match self {
            OutcomeTimeframe::Immediate => None,
            OutcomeTimeframe::ShortTerm => Some(5),
            OutcomeTimeframe::MediumTerm => Some(15),
            OutcomeTimeframe::LongTerm => Some(30),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "immediate" => Some(OutcomeTimeframe::Immediate),
            "short_term" => Some(OutcomeTimeframe::ShortTerm),
            "medium_term" => Some(OutcomeTimeframe::MediumTerm),
            "long_term" => Some(OutcomeTimeframe::LongTerm),
            _ => None,
        }
    }
}

/// Lowercases and folds spaces and hyphens into underscores.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
