//! Recommended option for a pending decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ConfidenceLevel, OptionId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub option_id: OptionId,
    pub confidence: ConfidenceLevel,
    pub reasoning: String,
    pub alternative_considerations: Vec<String>,
    pub success_factors: Vec<String>,
    pub pitfalls: Vec<String>,
}
