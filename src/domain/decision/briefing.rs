//! Briefing assessment - urgent matters and overall briefing priority.

use serde::{Deserialize, Serialize};

use super::scoring::{ImpactScorer, ThreatLevel};
use super::timeline::UrgentMatter;
use crate::domain::foundation::{DecisionCategory, Timestamp, UrgencyLevel};

/// One section of a briefing as the upstream layer reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingSection {
    pub title: String,
    pub urgency: UrgencyLevel,
    pub category: DecisionCategory,
    #[serde(default)]
    pub action_required: bool,
    /// Deadline fixed by the section itself, if any.
    #[serde(default)]
    pub deadline: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingAssessment {
    pub urgent_matters: Vec<UrgentMatter>,
    pub priority: UrgencyLevel,
}

impl BriefingAssessment {
    /// Surfaces every pressing section that needs action as an urgent
    /// matter, then ranks the briefing from those matters and `threat`.
    ///
    /// A section without its own deadline is scheduled like a decision of
    /// the same urgency and category.
    pub fn assess(sections: &[BriefingSection], threat: ThreatLevel, now: Timestamp) -> Self {
        let urgent_matters: Vec<UrgentMatter> = sections
            .iter()
            .filter(|section| section.action_required && section.urgency.is_pressing())
            .map(|section| {
                let title = format!("Urgent: {}", section.title);
                match section.deadline {
                    Some(deadline) => UrgentMatter::due(title, section.urgency, section.category, deadline, now),
                    None => UrgentMatter::scheduled(title, section.urgency, section.category, now),
                }
            })
            .collect();

        let levels: Vec<UrgencyLevel> = urgent_matters.iter().map(|m| m.urgency).collect();
        Self {
            priority: ImpactScorer::briefing_priority(&levels, threat),
            urgent_matters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(title: &str, urgency: UrgencyLevel, action_required: bool) -> BriefingSection {
        BriefingSection {
            title: title.to_string(),
            urgency,
            category: DecisionCategory::Security,
            action_required,
            deadline: None,
        }
    }

    #[test]
    fn only_pressing_sections_needing_action_surface() {
        let now = Timestamp::now();
        let sections = [
            section("Harvest report", UrgencyLevel::Important, true),
            section("Border raids", UrgencyLevel::Critical, true),
            section("Spy network", UrgencyLevel::Emergency, false),
        ];

        let assessment = BriefingAssessment::assess(&sections, ThreatLevel::Low, now);

        assert_eq!(assessment.urgent_matters.len(), 1);
        let matter = &assessment.urgent_matters[0];
        assert_eq!(matter.title, "Urgent: Border raids");
        // 3 days × 0.5
        assert_eq!(matter.deadline.duration_since(&now).num_hours(), 36);
        assert!(matter.escalation_date.is_some());
        assert_eq!(assessment.priority, UrgencyLevel::Critical);
    }

    #[test]
    fn section_deadline_is_kept() {
        let now = Timestamp::now();
        let mut raids = section("Border raids", UrgencyLevel::Urgent, true);
        raids.deadline = Some(now.plus_hours(5));

        let assessment = BriefingAssessment::assess(&[raids], ThreatLevel::Moderate, now);

        assert_eq!(assessment.urgent_matters[0].time_remaining, "5 hours");
        assert!(assessment.urgent_matters[0].escalation_date.is_none());
        assert_eq!(assessment.priority, UrgencyLevel::Urgent);
    }

    #[test]
    fn quiet_briefing_follows_threat_level() {
        let now = Timestamp::now();
        let calm = [section("Festival", UrgencyLevel::Routine, true)];
        assert_eq!(BriefingAssessment::assess(&calm, ThreatLevel::Moderate, now).priority, UrgencyLevel::Routine);
        assert_eq!(BriefingAssessment::assess(&calm, ThreatLevel::High, now).priority, UrgencyLevel::Urgent);
        assert_eq!(BriefingAssessment::assess(&[], ThreatLevel::Critical, now).priority, UrgencyLevel::Critical);
    }

    #[test]
    fn deserializes_with_defaults() {
        let section: BriefingSection = serde_json::from_str(
            r#"{"title": "Floods", "urgency": "emergency", "category": "environmental"}"#,
        )
        .unwrap();
        assert!(!section.action_required);
        assert_eq!(section.deadline, None);
    }
}
