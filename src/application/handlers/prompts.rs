//! Prompt text for each generation purpose.
//!
//! Every structured prompt ends with the JSON shape the normalizer reads,
//! using the same camelCase field names.

use std::fmt::Write;

use crate::domain::decision::{CostBenefitAnalysis, DecisionOption, GenerationRequest, RiskAssessment};
use crate::domain::foundation::{DeliveryMode, SpeechType};

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "- none stated".to_string();
    }
    items.iter().map(|i| format!("- {}", i)).collect::<Vec<_>>().join("\n")
}

fn context_block(request: &GenerationRequest) -> String {
    if request.context.is_null() {
        return "No simulation context supplied.".to_string();
    }
    serde_json::to_string_pretty(&request.context).unwrap_or_else(|_| request.context.to_string())
}

fn option_summaries(options: &[DecisionOption]) -> String {
    let mut out = String::new();
    for (i, option) in options.iter().enumerate() {
        let _ = writeln!(
            out,
            "Option {} [{}]: {}\n- Success probability: {:.2}\n- Risk level: {:.2}\n- Cost: {:.0}\n- Implementation: {:.0} days\n- Score: {:.2}",
            i + 1,
            option.id,
            option.title,
            option.success_probability.value(),
            option.risk_level.value(),
            option.cost_estimate,
            option.time_to_implement_days,
            option.ai_score().value(),
        );
    }
    out
}

pub fn background(request: &GenerationRequest) -> String {
    format!(
        "Write background context for a leadership decision.\n\n\
         DECISION: {}\nDESCRIPTION: {}\nCATEGORY: {}\nURGENCY: {}\n\n\
         CURRENT SITUATION:\n{}\n\n\
         In two or three short paragraphs explain why the decision is needed now, \
         what led to it and which factors and stakeholder positions matter. \
         Reply with plain prose suitable for an executive briefing.",
        request.title,
        request.description,
        request.category,
        request.urgency.as_str(),
        context_block(request),
    )
}

pub fn options(request: &GenerationRequest) -> String {
    format!(
        "Generate {} distinct, viable options for this leadership decision.\n\n\
         DECISION: {}\nDESCRIPTION: {}\nCATEGORY: {}\nURGENCY: {}\n\n\
         CONTEXT:\n{}\n\nCONSTRAINTS:\n{}\n\nOBJECTIVES:\n{}\n\n\
         Reply with a JSON array; each element shaped as:\n\
         {{\"id\": \"option-1\", \"title\": \"\", \"description\": \"\", \"pros\": [], \"cons\": [], \
         \"risks\": [], \"opportunities\": [], \
         \"expectedOutcomes\": [{{\"description\": \"\", \"probability\": 0.5, \"impact\": \"low|medium|high\", \
         \"timeframe\": \"immediate|short_term|medium_term|long_term\", \"metrics\": []}}], \
         \"resourceRequirements\": [{{\"type\": \"\", \"description\": \"\", \"quantity\": 0, \"unit\": \"\", \
         \"availability\": 0.5, \"criticality\": \"very_low|low|medium|high|very_high\"}}], \
         \"successProbability\": 0.5, \"riskLevel\": 0.3, \"costEstimate\": 0, \"timeToImplement\": 30, \
         \"supportLevel\": {{\"group\": 0.5}}, \"opposition\": [], \"aiReasoning\": \"\"}}",
        request.max_options,
        request.title,
        request.description,
        request.category,
        request.urgency.as_str(),
        context_block(request),
        bullet_list(&request.constraints),
        bullet_list(&request.objectives),
    )
}

pub fn risk_assessment(request: &GenerationRequest, options: &[DecisionOption]) -> String {
    format!(
        "Assess the risks of these options for the decision \"{}\".\n\n\
         OPTIONS:\n{}\n\
         Rate implementation, financial, political, operational and strategic risk on a 0-1 scale, \
         list individual risks with probability and impact, and give mitigation strategies, \
         contingency plans and indicators to monitor.\n\n\
         Reply with JSON shaped as:\n\
         {{\"overallRisk\": \"very_low|low|medium|high|very_high\", \
         \"risks\": [{{\"id\": \"\", \"description\": \"\", \"category\": \"\", \"probability\": 0.3, \
         \"impact\": 0.5, \"mitigation\": [], \"contingency\": [], \"status\": \"identified\"}}], \
         \"implementation\": 0.3, \"financial\": 0.3, \"political\": 0.3, \"operational\": 0.3, \
         \"strategic\": 0.3, \"mitigationStrategies\": [], \"contingencyPlans\": [], \
         \"riskIndicators\": [], \"reviewFrequency\": \"monthly\"}}",
        request.title,
        option_summaries(options),
    )
}

pub fn cost_benefit(request: &GenerationRequest, options: &[DecisionOption]) -> String {
    let budget = request
        .available_budget
        .map(|b| format!("{:.0}", b))
        .unwrap_or_else(|| "to be determined".to_string());
    format!(
        "Run a cost-benefit analysis of these options for the decision \"{}\".\n\n\
         OPTIONS:\n{}\nAVAILABLE BUDGET: {}\n\n\
         For the option with the highest expected value, break down costs and benefits, \
         and give net benefit, ROI, payback period in months, break-even point, \
         sensitivity analysis, assumptions and uncertainty factors.\n\n\
         Reply with JSON shaped as:\n\
         {{\"netBenefit\": 0, \"roi\": 0, \"paybackPeriod\": 12, \
         \"costs\": [{{\"category\": \"\", \"description\": \"\", \"amount\": 0, \"timeframe\": \"\", \"certainty\": 0.8}}], \
         \"benefits\": [{{\"category\": \"\", \"description\": \"\", \"value\": 0, \"timeframe\": \"\", \
         \"certainty\": 0.7, \"quantifiable\": true}}], \
         \"breakEvenPoint\": 12, \"sensitivityAnalysis\": {{}}, \"assumptions\": [], \
         \"confidence\": \"very_low|low|medium|high|very_high\", \"uncertaintyFactors\": []}}",
        request.title,
        option_summaries(options),
        budget,
    )
}

pub fn recommendation(
    request: &GenerationRequest,
    options: &[DecisionOption],
    risk: &RiskAssessment,
    cost_benefit: &CostBenefitAnalysis,
) -> String {
    format!(
        "Recommend one option for the decision \"{}\".\n\n\
         OPTIONS:\n{}\n\
         RISK: overall {:?}, implementation {:.2}, financial {:.2}, political {:.2}\n\
         COST-BENEFIT: net benefit {:.0}, ROI {:.2}, payback {:.0} months\n\n\
         Reply with JSON shaped as:\n\
         {{\"optionId\": \"<one of the ids above>\", \"confidence\": \"very_low|low|medium|high|very_high\", \
         \"reasoning\": \"\", \"alternativeConsiderations\": [], \"successFactors\": [], \"pitfalls\": []}}",
        request.title,
        option_summaries(options),
        risk.overall_risk,
        risk.implementation.value(),
        risk.financial.value(),
        risk.political.value(),
        cost_benefit.net_benefit,
        cost_benefit.roi,
        cost_benefit.payback_period,
    )
}

pub fn speech_impact(
    speech_type: SpeechType,
    delivery_mode: DeliveryMode,
    audience: Option<&str>,
    content: &str,
) -> String {
    format!(
        "Estimate the immediate impact of this leader speech on the civilization.\n\n\
         SPEECH TYPE: {}\nDELIVERY: {}\nAUDIENCE: {}\n\nSPEECH:\n{}\n\n\
         Consider tone, public mood, the audience and the delivery: an avatar delivery feels \
         distant, a teleprompter delivery is polished, an off-the-cuff delivery is the most \
         authentic and has the strongest emotional effect.\n\n\
         Reply with JSON; every number lies in [-1, 1]:\n\
         {{\"morale\": 0.0, \"approval\": 0.0, \"economicConfidence\": 0.0, \"militaryReadiness\": 0.0, \
         \"diplomaticStanding\": 0.0, \"socialCohesion\": 0.0, \"policySupport\": {{\"policy\": 0.0}}, \
         \"behavioralChanges\": [], \"economicEffects\": [], \"politicalEffects\": []}}",
        speech_type,
        delivery_mode,
        audience.unwrap_or("general public"),
        content,
    )
}
