//! Agent trust scoring: four weighted behavioural components, inactivity decay,
//! a confidence estimate, and a tier.
//!
//! Components are carried unrounded into the weighted sum; only the decayed
//! overall score is rounded. The tier is read from the decayed value before
//! rounding, so an agent sitting at 8999.6 is still `Gold`.

mod components;
mod domain;

pub use domain::{
    AgentData, GlobalMetrics, ScoreWeights, ScoreWeightsUpdate, TrustComponents, TrustScore,
    TrustScoreInput, TrustTier,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::scoring::basis_points::{Fixed, WeightsError};

pub const DEFAULT_DECAY_RATE: u32 = 10;
pub const DEFAULT_MIN_ACTIVITY_THRESHOLD: u64 = 3;

/// Construction-time settings for [`TrustScoreEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustEngineConfig {
    /// Merged over [`ScoreWeights::default`].
    pub weights: ScoreWeightsUpdate,
    /// Basis points removed per whole day since the last activity.
    pub decay_rate: u32,
    /// Completions required before the consistency bonus applies.
    pub min_activity_threshold: u64,
}

impl Default for TrustEngineConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeightsUpdate::default(),
            decay_rate: DEFAULT_DECAY_RATE,
            min_activity_threshold: DEFAULT_MIN_ACTIVITY_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrustScoreEngine {
    weights: ScoreWeights,
    decay_rate: u32,
    min_activity_threshold: u64,
}

impl Default for TrustScoreEngine {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            decay_rate: DEFAULT_DECAY_RATE,
            min_activity_threshold: DEFAULT_MIN_ACTIVITY_THRESHOLD,
        }
    }
}

impl TrustScoreEngine {
    pub fn new(config: TrustEngineConfig) -> Result<Self, WeightsError> {
        let weights = ScoreWeights::default().merged(&config.weights);
        weights.validate()?;
        Ok(Self {
            weights,
            decay_rate: config.decay_rate,
            min_activity_threshold: config.min_activity_threshold,
        })
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn decay_rate(&self) -> u32 {
        self.decay_rate
    }

    pub fn min_activity_threshold(&self) -> u64 {
        self.min_activity_threshold
    }

    /// Merge a partial update; rejected sets leave the current weights in place.
    pub fn update_weights(&mut self, update: ScoreWeightsUpdate) -> Result<(), WeightsError> {
        let merged = self.weights.merged(&update);
        if let Err(err) = merged.validate() {
            warn!(error = %err, "rejected trust score weight update");
            return Err(err);
        }
        self.weights = merged;
        info!(weights = ?self.weights, "updated trust score weights");
        Ok(())
    }

    pub fn calculate(&self, input: &TrustScoreInput) -> TrustScore {
        self.calculate_at(input, Utc::now())
    }

    /// Score `input` as of `now`; decay and tenure are measured against it.
    pub fn calculate_at(&self, input: &TrustScoreInput, now: DateTime<Utc>) -> TrustScore {
        let agent = &input.agent;
        let global = &input.global_metrics;

        let compliance = components::compliance(agent, global);
        let performance = components::performance(agent);
        let reliability = components::reliability(agent, self.min_activity_threshold);
        let reputation =
            components::reputation(agent, global, input.historical_scores.as_deref(), now);

        let overall = compliance.weighted(u32::from(self.weights.compliance))
            + performance.weighted(u32::from(self.weights.performance))
            + reliability.weighted(u32::from(self.weights.reliability))
            + reputation.weighted(u32::from(self.weights.reputation));

        let idle_days = components::whole_days(agent.last_activity, now);
        let decay = Fixed::from_bps(i64::from(self.decay_rate)).times(idle_days);
        let decayed = (overall - decay).max(Fixed::ZERO);

        let score = TrustScore {
            overall_score: decayed.to_bps(),
            confidence: components::confidence(agent, now),
            components: TrustComponents {
                compliance: compliance.to_bps(),
                performance: performance.to_bps(),
                reliability: reliability.to_bps(),
                reputation: reputation.to_bps(),
            },
            tier: TrustTier::from_fixed(decayed),
            timestamp: now,
        };

        debug!(
            agent_id = %agent.agent_id,
            overall = %overall,
            idle_days,
            overall_score = score.overall_score,
            confidence = score.confidence,
            tier = score.tier.label(),
            "computed trust score"
        );

        score
    }

    /// Score each input independently, preserving order.
    pub fn batch_calculate(&self, inputs: &[TrustScoreInput]) -> Vec<TrustScore> {
        let now = Utc::now();
        self.batch_calculate_at(inputs, now)
    }

    pub fn batch_calculate_at(
        &self,
        inputs: &[TrustScoreInput],
        now: DateTime<Utc>,
    ) -> Vec<TrustScore> {
        inputs
            .iter()
            .map(|input| self.calculate_at(input, now))
            .collect()
    }
}
