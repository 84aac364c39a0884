//! Inbound request for decision support.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionCategory, UnitInterval, UrgencyLevel, ValidationError};

/// Default number of options requested from the provider.
pub const DEFAULT_MAX_OPTIONS: u8 = 4;

/// Everything the upstream layer supplies when asking for decision support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: DecisionCategory,
    pub urgency: UrgencyLevel,
    /// Free-form simulation context forwarded to the provider.
    #[serde(default)]
    pub context: serde_json::Value,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default = "default_max_options")]
    pub max_options: u8,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub available_budget: Option<f64>,
    /// Current public approval of the leader, when the caller knows it.
    #[serde(default)]
    pub current_approval: Option<UnitInterval>,
}

fn default_max_options() -> u8 {
    DEFAULT_MAX_OPTIONS
}

impl GenerationRequest {
    pub fn new(title: impl Into<String>, category: DecisionCategory, urgency: UrgencyLevel) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            category,
            urgency,
            context: serde_json::Value::Null,
            constraints: Vec::new(),
            objectives: Vec::new(),
            max_options: DEFAULT_MAX_OPTIONS,
            audience: None,
            available_budget: None,
            current_approval: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if self.max_options == 0 {
            return Err(ValidationError::out_of_range("max_options", 1.0, 255.0, 0.0));
        }
        if let Some(budget) = self.available_budget {
            if budget.is_nan() || budget < 0.0 {
                return Err(ValidationError::out_of_range("available_budget", 0.0, f64::MAX, budget));
            }
        }
        Ok(())
    }
}
