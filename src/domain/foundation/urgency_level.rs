//! UrgencyLevel enum, ordered from least to most pressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How pressing a decision, briefing or urgent matter is.
///
/// Variant order is significant: `Routine < Important < Urgent < Critical < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Routine,
    Important,
    Urgent,
    Critical,
    Emergency,
}

impl UrgencyLevel {
    /// Returns all urgency levels in ascending order.
    pub fn all() -> &'static [UrgencyLevel] {
        &[
            UrgencyLevel::Routine,
            UrgencyLevel::Important,
            UrgencyLevel::Urgent,
            UrgencyLevel::Critical,
            UrgencyLevel::Emergency,
        ]
    }

    /// Contribution to decision priority (1..=5).
    pub fn priority_weight(&self) -> u8 {
        match self {
            UrgencyLevel::Routine => 1,
            UrgencyLevel::Important => 2,
            UrgencyLevel::Urgent => 3,
            UrgencyLevel::Critical => 4,
            UrgencyLevel::Emergency => 5,
        }
    }

    /// Days allowed before a deadline, before category adjustment.
    pub fn base_deadline_days(&self) -> f64 {
        match self {
            UrgencyLevel::Emergency => 1.0,
            UrgencyLevel::Critical => 3.0,
            UrgencyLevel::Urgent => 7.0,
            UrgencyLevel::Important => 14.0,
            UrgencyLevel::Routine => 30.0,
        }
    }

    /// Levels at or above `Urgent` surface as urgent matters in a briefing.
    pub fn is_pressing(&self) -> bool {
        *self >= UrgencyLevel::Urgent
    }

    /// Parses a free-form label such as `"Critical"` or `"critical"`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "routine" => Some(UrgencyLevel::Routine),
            "important" => Some(UrgencyLevel::Important),
            "urgent" => Some(UrgencyLevel::Urgent),
            "critical" => Some(UrgencyLevel::Critical),
            "emergency" => Some(UrgencyLevel::Emergency),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Routine => "routine",
            UrgencyLevel::Important => "important",
            UrgencyLevel::Urgent => "urgent",
            UrgencyLevel::Critical => "critical",
            UrgencyLevel::Emergency => "emergency",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
