//! DecisionCategory enum and its per-category lookup tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten fixed policy areas a decision or urgent matter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionCategory {
    Economic,
    Military,
    Diplomatic,
    Social,
    Technological,
    Environmental,
    Legal,
    Security,
    Infrastructure,
    Cultural,
}

impl DecisionCategory {
    pub fn all() -> &'static [DecisionCategory] {
        &[
            DecisionCategory::Economic,
            DecisionCategory::Military,
            DecisionCategory::Diplomatic,
            DecisionCategory::Social,
            DecisionCategory::Technological,
            DecisionCategory::Environmental,
            DecisionCategory::Legal,
            DecisionCategory::Security,
            DecisionCategory::Infrastructure,
            DecisionCategory::Cultural,
        ]
    }

    /// Contribution to decision priority.
    pub fn priority_weight(&self) -> u8 {
        match self {
            DecisionCategory::Military | DecisionCategory::Security => 4,
            DecisionCategory::Economic | DecisionCategory::Diplomatic => 3,
            DecisionCategory::Social
            | DecisionCategory::Technological
            | DecisionCategory::Environmental
            | DecisionCategory::Legal
            | DecisionCategory::Infrastructure => 2,
            DecisionCategory::Cultural => 1,
        }
    }

    /// Multiplier applied to the urgency's base deadline.
    pub fn deadline_adjustment(&self) -> f64 {
        match self {
            DecisionCategory::Military | DecisionCategory::Security => 0.5,
            DecisionCategory::Economic => 0.7,
            DecisionCategory::Diplomatic => 1.2,
            DecisionCategory::Legal => 1.3,
            DecisionCategory::Social => 1.5,
            DecisionCategory::Environmental => 1.8,
            DecisionCategory::Technological => 2.0,
            DecisionCategory::Infrastructure => 2.5,
            DecisionCategory::Cultural => 3.0,
        }
    }

    /// Parses a free-form label such as `"Economic"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionCategory::Economic => "economic",
            DecisionCategory::Military => "military",
            DecisionCategory::Diplomatic => "diplomatic",
            DecisionCategory::Social => "social",
            DecisionCategory::Technological => "technological",
            DecisionCategory::Environmental => "environmental",
            DecisionCategory::Legal => "legal",
            DecisionCategory::Security => "security",
            DecisionCategory::Infrastructure => "infrastructure",
            DecisionCategory::Cultural => "cultural",
        }
    }
}

impl fmt::Display for DecisionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
