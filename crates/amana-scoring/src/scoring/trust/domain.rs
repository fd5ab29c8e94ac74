use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::basis_points::{validate_weight_sum, Fixed, WeightSet, WeightsError, MAX_BPS};

/// Historical behaviour of one agent, as reported by the reputation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentData {
    pub agent_id: String,
    pub activities_completed: u64,
    pub activities_proposed: u64,
    pub successful_activities: u64,
    pub failed_activities: u64,
    pub total_capital_contributed: u128,
    pub profit_generated: u128,
    pub loss_incurred: u128,
    pub joined_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    /// Share of compliant activities in basis points; the reserve average is used when absent.
    #[serde(default)]
    pub compliance_rate_bps: Option<u16>,
    #[serde(default)]
    pub response_time_ms: Option<u64>,
}

/// Reserve-wide figures the agent is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub total_agents: u64,
    pub total_activities: u64,
    pub average_compliance_bps: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustScoreInput {
    pub agent: AgentData,
    /// Earlier scores for the same agent, oldest first.
    #[serde(default)]
    pub historical_scores: Option<Vec<TrustScore>>,
    pub global_metrics: GlobalMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustComponents {
    pub compliance: u16,
    pub performance: u16,
    pub reliability: u16,
    pub reputation: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustScore {
    pub overall_score: u16,
    pub confidence: u8,
    pub components: TrustComponents,
    pub tier: TrustTier,
    pub timestamp: DateTime<Utc>,
}

/// Ordered trust bands over the basis-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustTier {
    Untrusted,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl TrustTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Untrusted,
            Self::Bronze,
            Self::Silver,
            Self::Gold,
            Self::Platinum,
        ]
    }

    /// Scores above 10000 fall outside every band and map to `Untrusted`.
    pub const fn from_score(score: u16) -> Self {
        match score {
            0..=2_999 => Self::Untrusted,
            3_000..=4_999 => Self::Bronze,
            5_000..=6_999 => Self::Silver,
            7_000..=8_999 => Self::Gold,
            9_000..=MAX_BPS => Self::Platinum,
            _ => Self::Untrusted,
        }
    }

    /// Band for an unrounded score: whole basis points only, fractions are dropped.
    pub(crate) fn from_fixed(score: Fixed) -> Self {
        match u16::try_from(score.floor()) {
            Ok(whole) => Self::from_score(whole),
            Err(_) => Self::Untrusted,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Untrusted => "Untrusted",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }

    pub const fn min_score(self) -> u16 {
        match self {
            Self::Untrusted => 0,
            Self::Bronze => 3_000,
            Self::Silver => 5_000,
            Self::Gold => 7_000,
            Self::Platinum => 9_000,
        }
    }

    pub const fn max_score(self) -> u16 {
        match self {
            Self::Untrusted => 2_999,
            Self::Bronze => 4_999,
            Self::Silver => 6_999,
            Self::Gold => 8_999,
            Self::Platinum => MAX_BPS,
        }
    }
}

/// Component weights in basis points; must sum to 10000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub compliance: u16,
    pub performance: u16,
    pub reliability: u16,
    pub reputation: u16,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            compliance: 3_500,
            performance: 3_000,
            reliability: 2_000,
            reputation: 1_500,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<(), WeightsError> {
        validate_weight_sum(
            WeightSet::Trust,
            [
                self.compliance,
                self.performance,
                self.reliability,
                self.reputation,
            ],
        )
    }

    pub fn merged(&self, update: &ScoreWeightsUpdate) -> Self {
        Self {
            compliance: update.compliance.unwrap_or(self.compliance),
            performance: update.performance.unwrap_or(self.performance),
            reliability: update.reliability.unwrap_or(self.reliability),
            reputation: update.reputation.unwrap_or(self.reputation),
        }
    }
}

/// Partial weight change; absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeightsUpdate {
    pub compliance: Option<u16>,
    pub performance: Option<u16>,
    pub reliability: Option<u16>,
    pub reputation: Option<u16>,
}
