use crate::scoring::compliance::{ActivitySubmission, ComplianceScorer, CriteriaOverride};

pub(super) fn scorer() -> ComplianceScorer {
    ComplianceScorer::new()
}

pub(super) fn submission(activity_type: &str) -> ActivitySubmission {
    ActivitySubmission {
        id: format!("act-{activity_type}"),
        description: "Date palm harvest financing".to_string(),
        activity_type: activity_type.to_string(),
        capital_amount: 50_000,
        proposer: "agent-7".to_string(),
    }
}

pub(super) fn fully_attested() -> CriteriaOverride {
    CriteriaOverride {
        asset_backed: Some(true),
        real_economic_value: Some(true),
        documentation_provided: Some(true),
        verified_by_validators: Some(true),
    }
}
