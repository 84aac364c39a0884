//! Speech-type dependent defaults: fallback impact and priority.

use super::impact_vector::{ImpactDimension, ImpactVector};
use crate::domain::foundation::{SpeechType, UrgencyLevel};

/// Impact assumed for a speech when no analysis is available.
pub fn default_speech_impact(speech_type: SpeechType) -> ImpactVector {
    let mut impact = ImpactVector::from_dimensions(0.05, 0.03, 0.02, 0.01, 0.01, 0.03);

    match speech_type {
        SpeechType::CrisisAddress => {
            impact.set(ImpactDimension::Morale, 0.1);
            impact.set(ImpactDimension::Approval, 0.05);
        }
        SpeechType::EconomicUpdate => impact.set(ImpactDimension::EconomicConfidence, 0.08),
        SpeechType::MilitaryBriefing => impact.set(ImpactDimension::MilitaryReadiness, 0.06),
        SpeechType::VictorySpeech => {
            impact.set(ImpactDimension::Morale, 0.15);
            impact.set(ImpactDimension::Approval, 0.1);
        }
        _ => {}
    }

    impact.behavioral_changes = vec!["Increased civic engagement".to_string()];
    impact.economic_effects = vec!["Minor confidence boost".to_string()];
    impact.political_effects = vec!["Slight approval increase".to_string()];
    impact
}

/// Priority of a speech given its type and expected impact.
pub fn speech_priority(speech_type: SpeechType, impact: &ImpactVector) -> UrgencyLevel {
    match speech_type {
        SpeechType::CrisisAddress => return UrgencyLevel::Critical,
        SpeechType::StateOfCivilization => return UrgencyLevel::Important,
        _ => {}
    }

    let max = impact.max_public_magnitude();
    if max > 0.3 {
        UrgencyLevel::Critical
    } else if max > 0.2 {
        UrgencyLevel::Urgent
    } else if max > 0.1 {
        UrgencyLevel::Important
    } else {
        UrgencyLevel::Routine
    }
}
