use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::basis_points::{validate_weight_sum, WeightSet, WeightsError};

/// Compliance flags and validator turnout for one tracked activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityData {
    pub is_compliant: bool,
    pub is_asset_backed: bool,
    pub has_real_economic_value: bool,
    pub validator_count: u32,
    pub positive_votes: u32,
    pub timestamp: DateTime<Utc>,
}

/// Component weights in basis points; must sum to 10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaiWeights {
    pub compliance: u16,
    pub asset_backing: u16,
    pub economic_value: u16,
    pub validator_participation: u16,
}

impl Default for HaiWeights {
    fn default() -> Self {
        Self {
            compliance: 4_000,
            asset_backing: 2_500,
            economic_value: 2_000,
            validator_participation: 1_500,
        }
    }
}

impl HaiWeights {
    pub fn validate(&self) -> Result<(), WeightsError> {
        validate_weight_sum(
            WeightSet::Hai,
            [
                self.compliance,
                self.asset_backing,
                self.economic_value,
                self.validator_participation,
            ],
        )
    }

    pub fn merged(&self, update: &HaiWeightsUpdate) -> Self {
        Self {
            compliance: update.compliance.unwrap_or(self.compliance),
            asset_backing: update.asset_backing.unwrap_or(self.asset_backing),
            economic_value: update.economic_value.unwrap_or(self.economic_value),
            validator_participation: update
                .validator_participation
                .unwrap_or(self.validator_participation),
        }
    }
}

/// Partial weight change; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaiWeightsUpdate {
    pub compliance: Option<u16>,
    pub asset_backing: Option<u16>,
    pub economic_value: Option<u16>,
    pub validator_participation: Option<u16>,
}

/// Per-component scores behind an index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaiComponents {
    pub compliance_score: u32,
    pub asset_backing_score: u32,
    pub economic_value_score: u32,
    pub validator_participation_score: u32,
}

/// Reserve-wide Halal Activity Index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaiResult {
    pub score: u16,
    pub percentage: u8,
    pub components: HaiComponents,
    pub timestamp: DateTime<Utc>,
}

impl HaiResult {
    /// Baseline reported before any activity has been tracked.
    pub fn neutral(timestamp: DateTime<Utc>) -> Self {
        Self {
            score: 5_000,
            percentage: 50,
            components: HaiComponents {
                compliance_score: 5_000,
                asset_backing_score: 5_000,
                economic_value_score: 5_000,
                validator_participation_score: 8_000,
            },
            timestamp,
        }
    }
}
