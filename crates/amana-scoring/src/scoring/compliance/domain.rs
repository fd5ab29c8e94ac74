use serde::{Deserialize, Serialize};

/// Proposed economic activity submitted for a Sharia compliance verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySubmission {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub activity_type: String,
    pub capital_amount: u128,
    pub proposer: String,
}

/// The five checks applied to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceCriteria {
    pub asset_backed: bool,
    pub real_economic_value: bool,
    pub prohibited_activity: bool,
    pub documentation_provided: bool,
    pub verified_by_validators: bool,
}

/// Caller-supplied attestations. An absent field falls back to the activity-type policy
/// (documentation, validation) or to `false` (asset backing, economic value).
///
/// Prohibition is derived from the activity type alone and cannot be attested away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaOverride {
    pub asset_backed: Option<bool>,
    pub real_economic_value: Option<bool>,
    pub documentation_provided: Option<bool>,
    pub verified_by_validators: Option<bool>,
}

/// Verdict for a single submission, with the trail that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub is_compliant: bool,
    pub confidence: u8,
    pub criteria: ComplianceCriteria,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub score: u16,
}

/// Policy attached to an activity-type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTypeConfig {
    pub allowed: bool,
    pub requires_documentation: bool,
    pub requires_validation: bool,
    /// Informational only; not scored.
    #[serde(default)]
    pub additional_criteria: Vec<String>,
}

impl ActivityTypeConfig {
    /// Policy applied to tags that are neither built in nor registered.
    pub fn restrictive() -> Self {
        Self {
            allowed: false,
            requires_documentation: true,
            requires_validation: true,
            additional_criteria: Vec::new(),
        }
    }
}
