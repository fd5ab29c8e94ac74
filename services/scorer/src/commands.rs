//! Scorer invocations behind each subcommand. Each returns the value to print.

use amana_scoring::config::ScoringConfig;
use amana_scoring::error::AppError;
use amana_scoring::scoring::compliance::{
    ActivitySubmission, ActivityTypeConfig, ComplianceScorer, CriteriaOverride, ScoringResult,
};
use amana_scoring::scoring::hai::{ActivityData, HaiCalculator, HaiResult, HaiSnapshot, HaiTracker};
use amana_scoring::scoring::trust::{TrustScore, TrustScoreEngine, TrustScoreInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{HaiCalculateArgs, InputArgs};
use crate::infra::{read_json, read_one_or_many, OneOrMany};

/// One submission with optional attestations. Lists of bare submissions are
/// scored without attestations.
#[derive(Debug, Deserialize)]
struct ActivityRequest {
    submission: ActivitySubmission,
    #[serde(default)]
    criteria: Option<CriteriaOverride>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Scored<T> {
    Single(T),
    Batch(Vec<T>),
}

#[derive(Debug, Serialize)]
pub(crate) struct ActivityTypeListing {
    pub(crate) activity_type: String,
    #[serde(flatten)]
    pub(crate) config: ActivityTypeConfig,
}

#[derive(Debug, Deserialize)]
struct HaiRequest {
    activities: Vec<ActivityData>,
    #[serde(default)]
    total_activities: Option<u64>,
}

pub(crate) fn score_activities(args: &InputArgs) -> Result<Scored<ScoringResult>, AppError> {
    let scorer = ComplianceScorer::new();
    let scored = match read_one_or_many::<ActivityRequest, ActivitySubmission>(&args.input)? {
        OneOrMany::Many(submissions) => Scored::Batch(scorer.batch_score(&submissions)),
        OneOrMany::One(request) => {
            Scored::Single(scorer.score(&request.submission, request.criteria.as_ref()))
        }
    };
    Ok(scored)
}

pub(crate) fn activity_types() -> Vec<ActivityTypeListing> {
    let scorer = ComplianceScorer::new();
    scorer
        .allowed_activity_types()
        .into_iter()
        .map(|activity_type| ActivityTypeListing {
            config: scorer.activity_config(&activity_type),
            activity_type,
        })
        .collect()
}

pub(crate) fn prohibited_activities() -> Vec<&'static str> {
    ComplianceScorer::new().prohibited_activities()
}

pub(crate) fn calculate_hai(
    args: &HaiCalculateArgs,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<HaiResult, AppError> {
    let calculator = HaiCalculator::new(scoring.hai_weights)?;
    let request: HaiRequest = read_json(&args.input.input)?;
    let total = args
        .total
        .or(request.total_activities)
        .unwrap_or(request.activities.len() as u64);
    debug!(
        activities = request.activities.len(),
        total, "calculating HAI from input"
    );
    Ok(calculator.calculate_at(&request.activities, total, now))
}

pub(crate) fn track_hai(
    args: &InputArgs,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<HaiSnapshot, AppError> {
    let calculator = HaiCalculator::new(scoring.hai_weights)?;
    let request: HaiRequest = read_json(&args.input)?;
    let mut tracker = HaiTracker::new();
    for activity in &request.activities {
        tracker.track(activity);
    }
    Ok(tracker.snapshot_at(&calculator, now).clone())
}

pub(crate) fn calculate_trust(
    args: &InputArgs,
    scoring: &ScoringConfig,
    now: DateTime<Utc>,
) -> Result<Scored<TrustScore>, AppError> {
    let engine = TrustScoreEngine::new(scoring.trust)?;
    let scored = match read_one_or_many::<TrustScoreInput, TrustScoreInput>(&args.input)? {
        OneOrMany::Many(inputs) => Scored::Batch(engine.batch_calculate_at(&inputs, now)),
        OneOrMany::One(input) => Scored::Single(engine.calculate_at(&input, now)),
    };
    Ok(scored)
}
