use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{ActivityData, HaiResult};
use super::tally::ActivityTally;
use super::HaiCalculator;

/// Point-in-time view of the tracked index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HaiSnapshot {
    pub snapshot_id: u64,
    pub score: u16,
    pub total_activities: u64,
    pub compliant_activities: u64,
    pub asset_backed_activities: u64,
    pub timestamp: DateTime<Utc>,
}

/// Accumulates activities one at a time so the index can be refreshed without replaying history.
#[derive(Debug, Clone, Default)]
pub struct HaiTracker {
    tally: ActivityTally,
    snapshots: Vec<HaiSnapshot>,
}

impl HaiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one activity and return the number tracked so far.
    pub fn track(&mut self, activity: &ActivityData) -> u64 {
        self.tally.record(activity);
        debug!(
            total_activities = self.tally.recorded,
            is_compliant = activity.is_compliant,
            "tracked activity"
        );
        self.tally.recorded
    }

    pub fn total_activities(&self) -> u64 {
        self.tally.recorded
    }

    pub fn compliant_activities(&self) -> u64 {
        self.tally.compliant
    }

    /// Current index over everything tracked.
    pub fn result(&self, calculator: &HaiCalculator) -> HaiResult {
        self.result_at(calculator, Utc::now())
    }

    pub fn result_at(&self, calculator: &HaiCalculator, now: DateTime<Utc>) -> HaiResult {
        calculator.score_tally(&self.tally, self.tally.recorded, now)
    }

    /// Capture the current index; ids start at zero and increase by one.
    pub fn snapshot(&mut self, calculator: &HaiCalculator) -> &HaiSnapshot {
        self.snapshot_at(calculator, Utc::now())
    }

    pub fn snapshot_at(
        &mut self,
        calculator: &HaiCalculator,
        now: DateTime<Utc>,
    ) -> &HaiSnapshot {
        let result = self.result_at(calculator, now);
        let snapshot = HaiSnapshot {
            snapshot_id: self.snapshots.len() as u64,
            score: result.score,
            total_activities: self.tally.recorded,
            compliant_activities: self.tally.compliant,
            asset_backed_activities: self.tally.asset_backed,
            timestamp: now,
        };
        debug!(
            snapshot_id = snapshot.snapshot_id,
            score = snapshot.score,
            "captured HAI snapshot"
        );
        self.snapshots.push(snapshot);
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn snapshots(&self) -> &[HaiSnapshot] {
        &self.snapshots
    }
}
