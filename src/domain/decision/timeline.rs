//! Timeline scheduler - deadlines and escalation windows.
//!
//! ```text
//! deadlineDays = baseDays(urgency) × categoryAdjustment(category)
//! deadline     = now + deadlineDays
//! escalation   = now + 0.7 × deadlineDays   (not for routine)
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionCategory, Timestamp, UrgencyLevel};

/// Fraction of the deadline window after which a decision escalates.
pub const ESCALATION_FRACTION: f64 = 0.7;

/// Deadline and optional escalation point for a decision or matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub deadline_days: f64,
    pub deadline: Timestamp,
    pub escalation_date: Option<Timestamp>,
}

/// Stateless scheduler.
pub struct TimelineScheduler;

impl TimelineScheduler {
    pub fn deadline_days(urgency: UrgencyLevel, category: DecisionCategory) -> f64 {
        urgency.base_deadline_days() * category.deadline_adjustment()
    }

    /// Computes the timeline for a request created at `now`.
    pub fn schedule(urgency: UrgencyLevel, category: DecisionCategory, now: Timestamp) -> Timeline {
        let deadline_days = Self::deadline_days(urgency, category);
        let escalation_date = (urgency != UrgencyLevel::Routine)
            .then(|| now.plus_fractional_days(deadline_days * ESCALATION_FRACTION));

        Timeline {
            deadline_days,
            deadline: now.plus_fractional_days(deadline_days),
            escalation_date,
        }
    }

    /// Human-readable time left until `deadline`.
    pub fn time_remaining(deadline: Option<Timestamp>, now: Timestamp) -> String {
        let Some(deadline) = deadline else {
            return "No deadline set".to_string();
        };
        let left = deadline.duration_since(&now);
        if left.num_milliseconds() <= 0 {
            return "Overdue".to_string();
        }
        let hours = left.num_hours();
        let days = hours / 24;
        if days > 0 {
            format!("{} days", days)
        } else {
            format!("{} hours", hours)
        }
    }
}

/// A matter raised by a briefing that needs leader action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrgentMatter {
    pub title: String,
    pub urgency: UrgencyLevel,
    pub category: DecisionCategory,
    pub deadline: Timestamp,
    pub escalation_date: Option<Timestamp>,
    pub time_remaining: String,
}

impl UrgentMatter {
    /// Schedules a matter from its urgency and category.
    pub fn scheduled(
        title: impl Into<String>,
        urgency: UrgencyLevel,
        category: DecisionCategory,
        now: Timestamp,
    ) -> Self {
        let timeline = TimelineScheduler::schedule(urgency, category, now);
        Self {
            title: title.into(),
            urgency,
            category,
            deadline: timeline.deadline,
            escalation_date: timeline.escalation_date,
            time_remaining: TimelineScheduler::time_remaining(Some(timeline.deadline), now),
        }
    }

    /// A matter whose source already fixed its deadline; it never escalates.
    pub fn due(
        title: impl Into<String>,
        urgency: UrgencyLevel,
        category: DecisionCategory,
        deadline: Timestamp,
        now: Timestamp,
    ) -> Self {
        Self {
            title: title.into(),
            urgency,
            category,
            deadline,
            escalation_date: None,
            time_remaining: TimelineScheduler::time_remaining(Some(deadline), now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds_between(later: Timestamp, earlier: Timestamp) -> i64 {
        later.duration_since(&earlier).num_seconds()
    }

    #[test]
    fn critical_military_deadline() {
        let now = Timestamp::now();
        let timeline = TimelineScheduler::schedule(UrgencyLevel::Critical, DecisionCategory::Military, now);

        assert!((timeline.deadline_days - 1.5).abs() < 1e-12);
        assert_eq!(seconds_between(timeline.deadline, now), 129_600);
        let escalation = timeline.escalation_date.unwrap();
        // 1.05 days
        assert_eq!(seconds_between(escalation, now), 90_720);
    }

    #[test]
    fn routine_has_no_escalation() {
        let now = Timestamp::now();
        let timeline = TimelineScheduler::schedule(UrgencyLevel::Routine, DecisionCategory::Cultural, now);
        assert_eq!(timeline.deadline_days, 90.0);
        assert!(timeline.escalation_date.is_none());
    }

    #[test]
    fn time_remaining_formats() {
        let now = Timestamp::now();
        assert_eq!(TimelineScheduler::time_remaining(None, now), "No deadline set");
        assert_eq!(TimelineScheduler::time_remaining(Some(now), now), "Overdue");
        assert_eq!(TimelineScheduler::time_remaining(Some(now.plus_hours(-2)), now), "Overdue");
        assert_eq!(TimelineScheduler::time_remaining(Some(now.plus_hours(5)), now), "5 hours");
        assert_eq!(TimelineScheduler::time_remaining(Some(now.plus_hours(50)), now), "2 days");
    }

    #[test]
    fn urgent_matter_uses_timeline_formula() {
        let now = Timestamp::now();
        let matter = UrgentMatter::scheduled("Border incident", UrgencyLevel::Emergency, DecisionCategory::Security, now);
        // 1 day × 0.5 = 12 hours
        assert_eq!(seconds_between(matter.deadline, now), 43_200);
        assert_eq!(matter.time_remaining, "12 hours");
        assert!(matter.escalation_date.is_some());
    }

    #[test]
    fn matter_with_fixed_deadline_keeps_it() {
        let now = Timestamp::now();
        let matter = UrgentMatter::due("Unrest", UrgencyLevel::Urgent, DecisionCategory::Social, now.plus_hours(30), now);
        assert_eq!(seconds_between(matter.deadline, now), 108_000);
        assert_eq!(matter.time_remaining, "1 days");
        assert!(matter.escalation_date.is_none());
    }
}
