//! SimulationEffect and its vocabulary.
//!
//! An effect is created once by the synthesizer and never mutated. Its
//! lifecycle (`EffectStatus`) is tracked by the ledger alongside it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EffectId, StateMachine, Timestamp};

/// Simulation subsystem an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetSystem {
    Population,
    Politics,
    Economy,
    Military,
    Social,
    Policy,
    Diplomacy,
    Technology,
    Environment,
    Legal,
    Security,
    Infrastructure,
    Culture,
}

impl TargetSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetSystem::Population => "population",
            TargetSystem::Politics => "politics",
            TargetSystem::Economy => "economy",
            TargetSystem::Military => "military",
            TargetSystem::Social => "social",
            TargetSystem::Policy => "policy",
            TargetSystem::Diplomacy => "diplomacy",
            TargetSystem::Technology => "technology",
            TargetSystem::Environment => "environment",
            TargetSystem::Legal => "legal",
            TargetSystem::Security => "security",
            TargetSystem::Infrastructure => "infrastructure",
            TargetSystem::Culture => "culture",
        }
    }
}

impl fmt::Display for TargetSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the effect changes its target parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectOp {
    Increase,
    Decrease,
    Set,
    Multiply,
}

impl EffectOp {
    /// Direction for a signed impact.
    pub fn from_sign(value: f64) -> Self {
        if value > 0.0 {
            EffectOp::Increase
        } else {
            EffectOp::Decrease
        }
    }
}

/// Categorical bucket of an effect's strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Minor,
    Moderate,
    Major,
    Transformative,
}

/// What kind of artifact produced an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSource {
    Speech,
    Decision,
}

impl EffectSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectSource::Speech => "speech",
            EffectSource::Decision => "decision",
        }
    }
}

/// Tunable constants that gate and classify effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectThresholds {
    /// Impacts with absolute value at or below this emit nothing.
    pub noise_floor: f64,
    pub minor_below: f64,
    pub moderate_below: f64,
    pub major_below: f64,
}

impl EffectThresholds {
    pub const DEFAULT: Self = Self {
        noise_floor: 0.05,
        minor_below: 0.1,
        moderate_below: 0.3,
        major_below: 0.5,
    };

    /// Buckets an absolute impact value.
    pub fn classify(&self, value: f64) -> Magnitude {
        let abs = value.abs();
        if abs < self.minor_below {
            Magnitude::Minor
        } else if abs < self.moderate_below {
            Magnitude::Moderate
        } else if abs < self.major_below {
            Magnitude::Major
        } else {
            Magnitude::Transformative
        }
    }
}

impl Default for EffectThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Composite key under which the ledger stores an effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerKey {
    pub source: EffectSource,
    pub source_id: String,
    pub parameter: String,
}

impl fmt::Display for LedgerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source.as_str(), self.source_id, self.parameter)
    }
}

/// One scheduled mutation instruction for the simulation tick loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationEffect {
    pub id: EffectId,
    pub system: TargetSystem,
    pub parameter: String,
    pub op: EffectOp,
    /// Always non-negative; direction is carried by `op`.
    pub value: f64,
    /// `None` marks an instantaneous effect.
    pub duration_ticks: Option<u32>,
    pub magnitude: Magnitude,
    pub description: String,
    pub source: EffectSource,
    pub source_id: String,
    pub applied_at: Timestamp,
}

impl SimulationEffect {
    pub fn ledger_key(&self) -> LedgerKey {
        LedgerKey {
            source: self.source,
            source_id: self.source_id.clone(),
            parameter: self.parameter.clone(),
        }
    }

    pub fn is_instantaneous(&self) -> bool {
        self.duration_ticks.is_none()
    }
}

/// Ledger-side lifecycle of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectStatus {
    /// Submitted, not yet claimed by a tick.
    Pending,
    /// Claimed by a tick and still within its duration.
    Active,
    /// Duration elapsed (or applied once, if instantaneous).
    Completed,
    /// Source record was invalidated.
    Cancelled,
}

impl StateMachine for EffectStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EffectStatus::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Cancelled) | (Active, Completed) | (Active, Cancelled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EffectStatus::*;
        match self {
            Pending => vec![Active, Cancelled],
            Active => vec![Completed, Cancelled],
            Completed | Cancelled => vec![],
        }
    }
}
