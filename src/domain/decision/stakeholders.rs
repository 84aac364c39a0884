//! Per-category stakeholders and decision constraints.

use super::request::GenerationRequest;
use crate::domain::foundation::{DecisionCategory, UrgencyLevel};

/// Budget below which a decision is flagged as resource constrained.
pub const LIMITED_BUDGET_THRESHOLD: f64 = 1_000_000.0;

/// Approval below which the leader lacks political capital.
pub const LOW_APPROVAL_THRESHOLD: f64 = 0.4;

pub fn stakeholders_for(category: DecisionCategory) -> &'static [&'static str] {
    match category {
        DecisionCategory::Economic => &["Economic Advisors", "Business Leaders", "Labor Representatives", "Central Bank"],
        DecisionCategory::Military => &["Military Command", "Defense Secretary", "Intelligence Chiefs", "Veterans Affairs"],
        DecisionCategory::Diplomatic => &["Foreign Ministry", "Ambassadors", "Trade Representatives", "Cultural Attachés"],
        DecisionCategory::Social => &["Social Affairs Ministry", "Community Leaders", "Education Department", "Health Services"],
        DecisionCategory::Technological => &["Science Advisors", "Research Directors", "Tech Industry Leaders", "Innovation Council"],
        DecisionCategory::Environmental => &["Environmental Agency", "Scientists", "Conservation Groups", "Resource Managers"],
        DecisionCategory::Legal => &["Justice Department", "Supreme Court", "Legal Advisors", "Law Enforcement"],
        DecisionCategory::Security => &["Security Council", "Intelligence Services", "Police Chiefs", "Emergency Services"],
        DecisionCategory::Infrastructure => &["Infrastructure Ministry", "Engineers", "Urban Planners", "Transportation"],
        DecisionCategory::Cultural => &["Cultural Ministry", "Artists", "Historians", "Religious Leaders"],
    }
}

pub fn category_constraints(category: DecisionCategory) -> &'static [&'static str] {
    match category {
        DecisionCategory::Military => &["International law compliance", "Civilian safety requirements"],
        DecisionCategory::Economic => &["Budget limitations", "Market stability concerns"],
        DecisionCategory::Diplomatic => &["Treaty obligations", "International relations"],
        DecisionCategory::Social => &["Constitutional rights", "Public opinion"],
        DecisionCategory::Technological => &["Technical feasibility", "Research timeline"],
        DecisionCategory::Environmental => &["Environmental regulations", "Sustainability requirements"],
        DecisionCategory::Legal => &["Constitutional limits", "Legal precedents"],
        DecisionCategory::Security => &["Civil liberties", "Oversight requirements"],
        DecisionCategory::Infrastructure => &["Engineering constraints", "Environmental impact"],
        DecisionCategory::Cultural => &["Cultural sensitivity", "Religious considerations"],
    }
}

/// Constraints for a decision, de-duplicated in first-seen order.
///
/// Caller constraints come first, then budget, approval and time
/// pressure, then the fixed constraints of the category. Unknown budget or
/// approval adds nothing.
pub fn identify_constraints(request: &GenerationRequest) -> Vec<String> {
    let mut constraints: Vec<String> = request.constraints.clone();

    if request.available_budget.is_some_and(|budget| budget < LIMITED_BUDGET_THRESHOLD) {
        constraints.push("Limited financial resources".to_string());
    }
    if request.current_approval.is_some_and(|approval| approval.value() < LOW_APPROVAL_THRESHOLD) {
        constraints.push("Low public approval limits political capital".to_string());
    }
    if matches!(request.urgency, UrgencyLevel::Critical | UrgencyLevel::Emergency) {
        constraints.push("Extremely limited time for implementation".to_string());
    }
    constraints.extend(category_constraints(request.category).iter().map(|c| c.to_string()));

    let mut seen = std::collections::HashSet::new();
    constraints.retain(|c| seen.insert(c.clone()));
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_four_stakeholders() {
        for category in DecisionCategory::all() {
            assert_eq!(stakeholders_for(*category).len(), 4);
            assert_eq!(category_constraints(*category).len(), 2);
        }
    }

    use crate::domain::foundation::UnitInterval;

    fn request(category: DecisionCategory, urgency: UrgencyLevel) -> GenerationRequest {
        GenerationRequest::new("Grain reserves", category, urgency)
    }

    #[test]
    fn constraints_combine_and_deduplicate() {
        let mut req = request(DecisionCategory::Economic, UrgencyLevel::Emergency);
        req.constraints = vec!["Budget limitations".to_string(), "Keep allies informed".to_string()];
        req.available_budget = Some(250_000.0);
        req.current_approval = Some(UnitInterval::new(0.25));

        assert_eq!(
            identify_constraints(&req),
            vec![
                "Budget limitations",
                "Keep allies informed",
                "Limited financial resources",
                "Low public approval limits political capital",
                "Extremely limited time for implementation",
                "Market stability concerns",
            ]
        );
    }

    #[test]
    fn approval_at_threshold_is_not_low() {
        let mut req = request(DecisionCategory::Social, UrgencyLevel::Routine);
        req.current_approval = Some(UnitInterval::new(LOW_APPROVAL_THRESHOLD));
        assert_eq!(identify_constraints(&req), vec!["Constitutional rights", "Public opinion"]);

        req.current_approval = Some(UnitInterval::new(0.39));
        assert_eq!(identify_constraints(&req)[0], "Low public approval limits political capital");
    }

    #[test]
    fn unknown_budget_and_approval_add_nothing() {
        let constraints = identify_constraints(&request(DecisionCategory::Cultural, UrgencyLevel::Routine));
        assert_eq!(constraints, vec!["Cultural sensitivity", "Religious considerations"]);
    }
}
