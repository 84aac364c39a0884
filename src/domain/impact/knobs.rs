//! Tunable knobs and their per-concern composite factors.
//!
//! A `KnobSet` is an explicit value handed to whoever needs it; the engine
//! never reads knobs from shared mutable state.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::domain::foundation::UnitInterval;

/// The concern a knob contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnobGroup {
    BriefingQuality,
    DecisionSupport,
    CommunicationStyle,
    SpeechRhetoric,
    InformationProcessing,
    CrisisResponse,
}

impl KnobGroup {
    pub fn all() -> &'static [KnobGroup] {
        &[
            KnobGroup::BriefingQuality,
            KnobGroup::DecisionSupport,
            KnobGroup::CommunicationStyle,
            KnobGroup::SpeechRhetoric,
            KnobGroup::InformationProcessing,
            KnobGroup::CrisisResponse,
        ]
    }
}

/// Known knobs with their group and default value.
pub const DEFAULT_KNOBS: &[(&str, KnobGroup, f64)] = &[
    ("briefing_detail_comprehensiveness", KnobGroup::BriefingQuality, 0.8),
    ("information_synthesis_quality", KnobGroup::BriefingQuality, 0.8),
    ("strategic_context_emphasis", KnobGroup::BriefingQuality, 0.7),
    ("decision_support_sophistication", KnobGroup::DecisionSupport, 0.8),
    ("recommendation_confidence_level", KnobGroup::DecisionSupport, 0.7),
    ("risk_assessment_thoroughness", KnobGroup::DecisionSupport, 0.8),
    ("communication_formality_level", KnobGroup::CommunicationStyle, 0.7),
    ("leadership_voice_authenticity", KnobGroup::CommunicationStyle, 0.8),
    ("message_clarity_optimization", KnobGroup::CommunicationStyle, 0.9),
    ("speech_persuasiveness_factor", KnobGroup::SpeechRhetoric, 0.7),
    ("audience_adaptation_sensitivity", KnobGroup::SpeechRhetoric, 0.8),
    ("emotional_resonance_calibration", KnobGroup::SpeechRhetoric, 0.7),
    ("information_prioritization_accuracy", KnobGroup::InformationProcessing, 0.8),
    ("noise_filtering_effectiveness", KnobGroup::InformationProcessing, 0.8),
    ("real_time_update_responsiveness", KnobGroup::InformationProcessing, 0.7),
    ("crisis_communication_urgency", KnobGroup::CrisisResponse, 0.8),
    ("emergency_briefing_prioritization", KnobGroup::CrisisResponse, 0.9),
    ("stakeholder_notification_efficiency", KnobGroup::CrisisResponse, 0.8),
];

/// A named tunable scalar in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Knob {
    pub name: String,
    pub value: UnitInterval,
    pub group: KnobGroup,
}

/// Mean knob value per group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompositeFactors(BTreeMap<KnobGroup, UnitInterval>);

impl CompositeFactors {
    /// Returns the factor for a group; groups without knobs read as zero.
    pub fn get(&self, group: KnobGroup) -> UnitInterval {
        self.0.get(&group).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KnobGroup, &UnitInterval)> {
        self.0.iter()
    }
}

/// The full set of knobs supplied by the tuning layer.
#[derive(Debug, Clone, PartialEq)]
pub struct KnobSet {
    knobs: BTreeMap<String, Knob>,
}

impl KnobSet {
    /// Knob set populated with every default.
    pub fn defaults() -> Self {
        let knobs = DEFAULT_KNOBS
            .iter()
            .map(|(name, group, value)| {
                (
                    name.to_string(),
                    Knob {
                        name: name.to_string(),
                        value: UnitInterval::new(*value),
                        group: *group,
                    },
                )
            })
            .collect();
        Self { knobs }
    }

    /// Defaults with the given values applied. Values are clamped into
    /// `[0, 1]`; names that are not known knobs are skipped.
    pub fn with_overrides(overrides: &HashMap<String, f64>) -> Self {
        let mut set = Self::defaults();
        for (name, value) in overrides {
            match set.knobs.get_mut(name) {
                Some(knob) => knob.value = UnitInterval::new(*value),
                None => warn!(knob = %name, "Ignoring unknown knob"),
            }
        }
        set
    }

    pub fn get(&self, name: &str) -> Option<&Knob> {
        self.knobs.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Knob> {
        self.knobs.values()
    }

    /// Arithmetic mean of the knobs in a group.
    pub fn composite(&self, group: KnobGroup) -> UnitInterval {
        let values: Vec<f64> = self
            .knobs
            .values()
            .filter(|k| k.group == group)
            .map(|k| k.value.value())
            .collect();
        if values.is_empty() {
            return UnitInterval::ZERO;
        }
        UnitInterval::new(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Composite factor for every group.
    pub fn composites(&self) -> CompositeFactors {
        CompositeFactors(
            KnobGroup::all()
                .iter()
                .map(|g| (*g, self.composite(*g)))
                .collect(),
        )
    }
}

impl Default for KnobSet {
    fn default() -> Self {
        Self::defaults()
    }
}
