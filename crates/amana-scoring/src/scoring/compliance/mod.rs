//! Sharia compliance scoring for individual activity submissions.

mod domain;
mod policy;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    ActivitySubmission, ActivityTypeConfig, ComplianceCriteria, CriteriaOverride, ScoringResult,
};
pub use policy::{normalize_activity_type, PROHIBITED_ACTIVITIES};

use std::collections::BTreeMap;

use policy::{builtin_config, builtin_names, is_prohibited_tag};
use rules::{
    build_criteria, collect_findings, criteria_confidence, criteria_score, prohibited_verdict,
    COMPLIANCE_THRESHOLD,
};
use tracing::{debug, info};

/// Scores submissions against the built-in policy table and any registered overrides.
#[derive(Debug, Clone, Default)]
pub struct ComplianceScorer {
    overrides: BTreeMap<String, ActivityTypeConfig>,
}

impl ComplianceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one submission. Never fails: unknown types fall back to a restrictive policy.
    pub fn score(
        &self,
        submission: &ActivitySubmission,
        attested: Option<&CriteriaOverride>,
    ) -> ScoringResult {
        let activity_type = normalize_activity_type(&submission.activity_type);
        let policy = self.activity_config(&activity_type);
        let prohibited = is_prohibited_tag(&activity_type);
        let attested = attested.copied().unwrap_or_default();
        let criteria = build_criteria(&policy, prohibited, &attested);

        if criteria.prohibited_activity {
            debug!(
                activity_id = %submission.id,
                activity_type = %activity_type,
                "prohibited activity type short-circuits scoring"
            );
            return prohibited_verdict(&activity_type, criteria);
        }

        let findings = collect_findings(&activity_type, &policy, &criteria);
        let score = criteria_score(&criteria, findings.issues.len());
        let is_compliant = score >= COMPLIANCE_THRESHOLD && findings.issues.is_empty();
        let confidence = criteria_confidence(&criteria);

        debug!(
            activity_id = %submission.id,
            activity_type = %activity_type,
            score,
            confidence,
            issues = findings.issues.len(),
            is_compliant,
            "scored activity submission"
        );

        ScoringResult {
            is_compliant,
            confidence,
            criteria,
            issues: findings.issues,
            suggestions: findings.suggestions,
            score,
        }
    }

    /// Score each submission independently, preserving order.
    pub fn batch_score(&self, submissions: &[ActivitySubmission]) -> Vec<ScoringResult> {
        submissions
            .iter()
            .map(|submission| self.score(submission, None))
            .collect()
    }

    /// Register or replace the policy for an activity type on this instance.
    pub fn add_activity_type(&mut self, name: &str, config: ActivityTypeConfig) {
        let key = normalize_activity_type(name);
        info!(activity_type = %key, allowed = config.allowed, "registered activity type policy");
        self.overrides.insert(key, config);
    }

    /// Drop an instance-level policy; built-in entries are unaffected.
    pub fn remove_activity_type(&mut self, name: &str) -> Option<ActivityTypeConfig> {
        let key = normalize_activity_type(name);
        let removed = self.overrides.remove(&key);
        if removed.is_some() {
            info!(activity_type = %key, "removed activity type policy");
        }
        removed
    }

    /// Resolve the effective policy: override, then built-in, then restrictive default.
    pub fn activity_config(&self, activity_type: &str) -> ActivityTypeConfig {
        let key = normalize_activity_type(activity_type);
        self.overrides
            .get(&key)
            .cloned()
            .or_else(|| builtin_config(&key))
            .unwrap_or_else(ActivityTypeConfig::restrictive)
    }

    pub fn is_prohibited(&self, activity_type: &str) -> bool {
        is_prohibited_tag(&normalize_activity_type(activity_type))
    }

    pub fn prohibited_activities(&self) -> Vec<&'static str> {
        PROHIBITED_ACTIVITIES.to_vec()
    }

    /// Built-in tags followed by override keys. A key present in both appears twice.
    pub fn allowed_activity_types(&self) -> Vec<String> {
        builtin_names()
            .map(str::to_string)
            .chain(self.overrides.keys().cloned())
            .collect()
    }
}
