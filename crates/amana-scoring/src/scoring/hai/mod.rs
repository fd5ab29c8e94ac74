//! Halal Activity Index: a weighted, reserve-wide compliance index over tracked activities.

mod domain;
mod tally;
mod tracker;

pub use domain::{ActivityData, HaiComponents, HaiResult, HaiWeights, HaiWeightsUpdate};
pub use tracker::{HaiSnapshot, HaiTracker};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::scoring::basis_points::{round_div, Fixed, WeightsError};
use tally::ActivityTally;

/// Computes the index under a validated weight set.
#[derive(Debug, Clone, Default)]
pub struct HaiCalculator {
    weights: HaiWeights,
}

impl HaiCalculator {
    /// Build a calculator; `None` selects the default weights.
    pub fn new(weights: Option<HaiWeights>) -> Result<Self, WeightsError> {
        let weights = weights.unwrap_or_default();
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> HaiWeights {
        self.weights
    }

    /// Merge a partial update; the merged set must still sum to 10000 or nothing changes.
    pub fn update_weights(&mut self, update: HaiWeightsUpdate) -> Result<(), WeightsError> {
        let merged = self.weights.merged(&update);
        if let Err(err) = merged.validate() {
            warn!(error = %err, "rejected HAI weight update");
            return Err(err);
        }
        self.weights = merged;
        info!(weights = ?self.weights, "updated HAI weights");
        Ok(())
    }

    /// Index over `activities`, with count-based ratios taken against `total_activities`.
    ///
    /// The batch may be a page of a larger population; the caller owns the total.
    pub fn calculate(&self, activities: &[ActivityData], total_activities: u64) -> HaiResult {
        self.calculate_at(activities, total_activities, Utc::now())
    }

    pub fn calculate_at(
        &self,
        activities: &[ActivityData],
        total_activities: u64,
        now: DateTime<Utc>,
    ) -> HaiResult {
        if (activities.len() as u64) > total_activities {
            warn!(
                batch = activities.len(),
                total_activities, "activity batch exceeds the declared total"
            );
        }
        let tally = ActivityTally::from_activities(activities);
        self.score_tally(&tally, total_activities, now)
    }

    pub(crate) fn score_tally(
        &self,
        tally: &ActivityTally,
        total_activities: u64,
        now: DateTime<Utc>,
    ) -> HaiResult {
        if total_activities == 0 {
            return HaiResult::neutral(now);
        }

        let total = u128::from(total_activities);
        let compliance = Fixed::ratio(u128::from(tally.compliant), total);
        let asset_backing = Fixed::ratio(u128::from(tally.asset_backed), total);
        let economic_value = Fixed::ratio(u128::from(tally.economic_value), total);
        let validator_participation = tally.validator_participation();

        let weighted = compliance.weighted(u32::from(self.weights.compliance))
            + asset_backing.weighted(u32::from(self.weights.asset_backing))
            + economic_value.weighted(u32::from(self.weights.economic_value))
            + Fixed::from_bps(i64::from(validator_participation))
                .weighted(u32::from(self.weights.validator_participation));

        let score = weighted.to_bps();
        let percentage = round_div(u64::from(score), 100).min(100) as u8;
        let components = HaiComponents {
            compliance_score: compliance.round_u32(),
            asset_backing_score: asset_backing.round_u32(),
            economic_value_score: economic_value.round_u32(),
            validator_participation_score: validator_participation,
        };

        debug!(
            total_activities,
            score,
            weighted = %weighted,
            ?components,
            "computed halal activity index"
        );

        HaiResult {
            score,
            percentage,
            components,
            timestamp: now,
        }
    }
}
