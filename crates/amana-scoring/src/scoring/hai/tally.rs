use super::domain::ActivityData;
use crate::scoring::basis_points::Fixed;

/// Participation assumed when no activity has been put before validators.
pub(crate) const DEFAULT_VALIDATOR_PARTICIPATION: u32 = 8_000;

/// Running counters over a set of tracked activities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ActivityTally {
    pub recorded: u64,
    pub compliant: u64,
    pub asset_backed: u64,
    pub economic_value: u64,
    participation_sum: Fixed,
    participating: u64,
}

impl ActivityTally {
    pub fn from_activities(activities: &[ActivityData]) -> Self {
        activities.iter().fold(Self::default(), |mut tally, activity| {
            tally.record(activity);
            tally
        })
    }

    pub fn record(&mut self, activity: &ActivityData) {
        self.recorded += 1;
        self.compliant += u64::from(activity.is_compliant);
        self.asset_backed += u64::from(activity.is_asset_backed);
        self.economic_value += u64::from(activity.has_real_economic_value);

        if activity.validator_count > 0 {
            self.participation_sum += Fixed::ratio(
                u128::from(activity.positive_votes),
                u128::from(activity.validator_count),
            );
            self.participating += 1;
        }
    }

    /// Mean approval ratio over activities that had validators, rounded.
    pub fn validator_participation(&self) -> u32 {
        if self.participating == 0 {
            return DEFAULT_VALIDATOR_PARTICIPATION;
        }
        self.participation_sum.div_count(self.participating).round_u32()
    }
}
