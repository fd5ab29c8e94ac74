use super::domain::{ActivityTypeConfig, ComplianceCriteria, CriteriaOverride, ScoringResult};

const ASSET_BACKED_POINTS: u16 = 3_000;
const REAL_ECONOMIC_VALUE_POINTS: u16 = 2_500;
const NOT_PROHIBITED_POINTS: u16 = 2_500;
const DOCUMENTATION_POINTS: u16 = 1_000;
const VALIDATOR_POINTS: u16 = 1_000;
const ISSUE_PENALTY: u16 = 500;

/// Minimum score for a compliant verdict.
pub(crate) const COMPLIANCE_THRESHOLD: u16 = 5_000;

pub(crate) fn build_criteria(
    policy: &ActivityTypeConfig,
    prohibited: bool,
    attested: &CriteriaOverride,
) -> ComplianceCriteria {
    ComplianceCriteria {
        asset_backed: attested.asset_backed.unwrap_or(false),
        real_economic_value: attested.real_economic_value.unwrap_or(false),
        prohibited_activity: prohibited,
        documentation_provided: attested
            .documentation_provided
            .unwrap_or(!policy.requires_documentation),
        verified_by_validators: attested
            .verified_by_validators
            .unwrap_or(!policy.requires_validation),
    }
}

pub(crate) fn prohibited_verdict(
    activity_type: &str,
    criteria: ComplianceCriteria,
) -> ScoringResult {
    ScoringResult {
        is_compliant: false,
        confidence: 100,
        criteria,
        issues: vec![format!(
            "Activity type '{activity_type}' is prohibited under Sharia principles"
        )],
        suggestions: vec![
            "Consider a Sharia-compliant alternative such as trade, mudarabah, or musharakah"
                .to_string(),
        ],
        score: 0,
    }
}

pub(crate) struct Findings {
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Findings {
    fn flag(&mut self, issue: String, suggestion: &str) {
        self.issues.push(issue);
        self.suggestions.push(suggestion.to_string());
    }
}

pub(crate) fn collect_findings(
    activity_type: &str,
    policy: &ActivityTypeConfig,
    criteria: &ComplianceCriteria,
) -> Findings {
    let mut findings = Findings {
        issues: Vec::new(),
        suggestions: Vec::new(),
    };

    if !policy.allowed {
        findings.flag(
            format!("Activity type '{activity_type}' is not recognized or not allowed"),
            "Use a recognized Sharia-compliant activity type or register it with the scorer",
        );
    }
    if !criteria.asset_backed {
        findings.flag(
            "Activity is not backed by tangible assets".to_string(),
            "Tie the activity to real, identifiable assets",
        );
    }
    if !criteria.real_economic_value {
        findings.flag(
            "Activity does not demonstrate real economic value".to_string(),
            "Describe the goods or services the activity contributes to the real economy",
        );
    }
    if policy.requires_documentation && !criteria.documentation_provided {
        findings.flag(
            "Required documentation has not been provided".to_string(),
            "Attach contracts and supporting documents for this activity type",
        );
    }
    if policy.requires_validation && !criteria.verified_by_validators {
        findings.flag(
            "Activity has not been verified by validators".to_string(),
            "Request verification from the validator network before proceeding",
        );
    }

    findings
}

pub(crate) fn criteria_score(criteria: &ComplianceCriteria, issue_count: usize) -> u16 {
    let earned = [
        (criteria.asset_backed, ASSET_BACKED_POINTS),
        (criteria.real_economic_value, REAL_ECONOMIC_VALUE_POINTS),
        (!criteria.prohibited_activity, NOT_PROHIBITED_POINTS),
        (criteria.documentation_provided, DOCUMENTATION_POINTS),
        (criteria.verified_by_validators, VALIDATOR_POINTS),
    ]
    .iter()
    .filter(|(met, _)| *met)
    .map(|(_, points)| u32::from(*points))
    .sum::<u32>();

    let penalty = u32::from(ISSUE_PENALTY).saturating_mul(issue_count as u32);
    earned.saturating_sub(penalty) as u16
}

pub(crate) fn criteria_confidence(criteria: &ComplianceCriteria) -> u8 {
    if criteria.prohibited_activity {
        return 100;
    }

    let confidence = [
        (criteria.asset_backed, 30u8),
        (criteria.real_economic_value, 25),
        (criteria.documentation_provided, 20),
        (criteria.verified_by_validators, 25),
    ]
    .iter()
    .filter(|(met, _)| *met)
    .map(|(_, weight)| *weight)
    .sum::<u8>();

    confidence.min(100)
}
