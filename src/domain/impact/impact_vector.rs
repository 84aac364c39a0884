//! ImpactVector - six-dimensional summary of a communication's effect.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::SignedUnit;

/// One of the six scalar dimensions of an [`ImpactVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactDimension {
    Morale,
    Approval,
    EconomicConfidence,
    MilitaryReadiness,
    DiplomaticStanding,
    SocialCohesion,
}

impl ImpactDimension {
    pub fn all() -> &'static [ImpactDimension] {
        &[
            ImpactDimension::Morale,
            ImpactDimension::Approval,
            ImpactDimension::EconomicConfidence,
            ImpactDimension::MilitaryReadiness,
            ImpactDimension::DiplomaticStanding,
            ImpactDimension::SocialCohesion,
        ]
    }

    /// Field name used in generated payloads.
    pub fn field_name(&self) -> &'static str {
        match self {
            ImpactDimension::Morale => "morale",
            ImpactDimension::Approval => "approval",
            ImpactDimension::EconomicConfidence => "economicConfidence",
            ImpactDimension::MilitaryReadiness => "militaryReadiness",
            ImpactDimension::DiplomaticStanding => "diplomaticStanding",
            ImpactDimension::SocialCohesion => "socialCohesion",
        }
    }
}

impl fmt::Display for ImpactDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Expected immediate effect of a speech or briefing on civilization mood.
///
/// Every dimension is a [`SignedUnit`], so values are clamped into
/// `[-1, 1]` whenever the vector is built or deserialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactVector {
    pub morale: SignedUnit,
    pub approval: SignedUnit,
    pub economic_confidence: SignedUnit,
    pub military_readiness: SignedUnit,
    pub diplomatic_standing: SignedUnit,
    pub social_cohesion: SignedUnit,
    pub policy_support: BTreeMap<String, SignedUnit>,
    pub behavioral_changes: Vec<String>,
    pub economic_effects: Vec<String>,
    pub political_effects: Vec<String>,
}

impl ImpactVector {
    /// Creates a vector from the six raw dimensions, clamping each.
    pub fn from_dimensions(
        morale: f64,
        approval: f64,
        economic_confidence: f64,
        military_readiness: f64,
        diplomatic_standing: f64,
        social_cohesion: f64,
    ) -> Self {
        Self {
            morale: SignedUnit::new(morale),
            approval: SignedUnit::new(approval),
            economic_confidence: SignedUnit::new(economic_confidence),
            military_readiness: SignedUnit::new(military_readiness),
            diplomatic_standing: SignedUnit::new(diplomatic_standing),
            social_cohesion: SignedUnit::new(social_cohesion),
            ..Self::default()
        }
    }

    /// Returns the value of a single dimension.
    pub fn get(&self, dimension: ImpactDimension) -> SignedUnit {
        match dimension {
            ImpactDimension::Morale => self.morale,
            ImpactDimension::Approval => self.approval,
            ImpactDimension::EconomicConfidence => self.economic_confidence,
            ImpactDimension::MilitaryReadiness => self.military_readiness,
            ImpactDimension::DiplomaticStanding => self.diplomatic_standing,
            ImpactDimension::SocialCohesion => self.social_cohesion,
        }
    }

    /// Sets a single dimension, clamping the value.
    pub fn set(&mut self, dimension: ImpactDimension, value: f64) {
        let value = SignedUnit::new(value);
        match dimension {
            ImpactDimension::Morale => self.morale = value,
            ImpactDimension::Approval => self.approval = value,
            ImpactDimension::EconomicConfidence => self.economic_confidence = value,
            ImpactDimension::MilitaryReadiness => self.military_readiness = value,
            ImpactDimension::DiplomaticStanding => self.diplomatic_standing = value,
            ImpactDimension::SocialCohesion => self.social_cohesion = value,
        }
    }

    /// Adds or replaces support for a named policy.
    pub fn with_policy_support(mut self, policy: impl Into<String>, support: f64) -> Self {
        self.policy_support.insert(policy.into(), SignedUnit::new(support));
        self
    }

    /// Largest absolute value among the publicly felt dimensions
    /// (morale, approval, economic confidence, social cohesion).
    pub fn max_public_magnitude(&self) -> f64 {
        [
            self.morale,
            self.approval,
            self.economic_confidence,
            self.social_cohesion,
        ]
        .iter()
        .map(|d| d.magnitude())
        .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dimensions_clamps_each_value() {
        let v = ImpactVector::from_dimensions(1.4, -2.0, 0.3, 0.0, 0.0, -0.2);
        assert_eq!(v.morale.value(), 1.0);
        assert_eq!(v.approval.value(), -1.0);
        assert_eq!(v.economic_confidence.value(), 0.3);
    }

    #[test]
    fn get_and_set_cover_every_dimension() {
        let mut v = ImpactVector::default();
        for (i, dim) in ImpactDimension::all().iter().enumerate() {
            v.set(*dim, 0.1 * (i as f64 + 1.0));
        }
        assert_eq!(v.get(ImpactDimension::Morale).value(), 0.1);
        assert!((v.get(ImpactDimension::SocialCohesion).value() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn deserializing_reclamps_upstream_values() {
        let v: ImpactVector = serde_json::from_str(
            r#"{"morale": 3.0, "approval": -0.4, "policySupport": {"tax_reform": -9}}"#,
        )
        .unwrap();
        assert_eq!(v.morale.value(), 1.0);
        assert_eq!(v.approval.value(), -0.4);
        assert_eq!(v.policy_support["tax_reform"].value(), -1.0);
        assert_eq!(v.social_cohesion.value(), 0.0);
    }

    #[test]
    fn max_public_magnitude_ignores_military_and_diplomacy() {
        let v = ImpactVector::from_dimensions(0.1, -0.25, 0.0, 0.9, 0.9, 0.05);
        assert_eq!(v.max_public_magnitude(), 0.25);
    }
}
