//! The four trust components. Each returns an unrounded score clamped to `[0, 10000]`.

use chrono::{DateTime, Utc};

use super::domain::{AgentData, GlobalMetrics, TrustScore};
use crate::scoring::basis_points::Fixed;

pub(crate) const MS_PER_DAY: u64 = 86_400_000;
const MS_PER_HOUR: u64 = 3_600_000;

const BASELINE: Fixed = Fixed::from_bps(5_000);
const NEUTRAL_SUCCESS_RATE: Fixed = Fixed::from_bps(5_000);

/// Milliseconds from `from` to `to`, zero when `to` is earlier.
pub(crate) fn elapsed_ms(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from((to - from).num_milliseconds()).unwrap_or(0)
}

/// Whole days from `from` to `to`.
pub(crate) fn whole_days(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    elapsed_ms(from, to) / MS_PER_DAY
}

/// 70% compliance rate, 30% success rate; rounded.
pub(crate) fn compliance(agent: &AgentData, global: &GlobalMetrics) -> Fixed {
    let rate = agent
        .compliance_rate_bps
        .unwrap_or(global.average_compliance_bps);
    let success_rate = if agent.activities_completed > 0 {
        Fixed::ratio(
            u128::from(agent.successful_activities),
            u128::from(agent.activities_completed),
        )
    } else {
        NEUTRAL_SUCCESS_RATE
    };

    let score =
        Fixed::from_bps(i64::from(rate)).weighted(7_000) + success_rate.weighted(3_000);
    Fixed::from_bps(i64::from(score.to_bps()))
}

/// Capital efficiency and completion rate around a neutral baseline.
pub(crate) fn performance(agent: &AgentData) -> Fixed {
    if agent.activities_completed == 0 {
        return BASELINE;
    }

    let contributed = agent.total_capital_contributed;
    let capital = if agent.profit_generated >= agent.loss_incurred {
        Fixed::ratio(agent.profit_generated - agent.loss_incurred, contributed)
            .min(Fixed::from_bps(3_000))
    } else {
        -Fixed::ratio(agent.loss_incurred - agent.profit_generated, contributed)
            .weighted(5_000)
            .min(Fixed::from_bps(2_000))
    };
    let completion = Fixed::ratio(
        u128::from(agent.activities_completed),
        u128::from(agent.activities_proposed),
    )
    .weighted(2_000);

    (BASELINE + capital + completion).clamp_bps()
}

/// Failure penalty, sustained-activity bonus, and response-time bonus.
pub(crate) fn reliability(agent: &AgentData, min_activity_threshold: u64) -> Fixed {
    let failure_penalty = Fixed::ratio(
        u128::from(agent.failed_activities),
        u128::from(agent.activities_completed),
    )
    .weighted(4_000);
    let mut score = BASELINE - failure_penalty;

    let active_ms = elapsed_ms(agent.joined_at, agent.last_activity);
    if active_ms > 30 * MS_PER_DAY && agent.activities_completed >= min_activity_threshold {
        let per_day = Fixed::ratio(
            u128::from(agent.activities_completed) * u128::from(MS_PER_DAY),
            u128::from(active_ms),
        );
        score += per_day.weighted(1_000).min(Fixed::from_bps(2_000));
    }

    score += match agent.response_time_ms {
        Some(ms) if ms < MS_PER_HOUR => Fixed::from_bps(1_000),
        Some(ms) if ms < MS_PER_DAY => Fixed::from_bps(500),
        _ => Fixed::ZERO,
    };

    score.clamp_bps()
}

/// Tenure, relative volume, capital participation, and historical stability.
pub(crate) fn reputation(
    agent: &AgentData,
    global: &GlobalMetrics,
    history: Option<&[TrustScore]>,
    now: DateTime<Utc>,
) -> Fixed {
    let tenure_ms = elapsed_ms(agent.joined_at, now);
    let age = Fixed::ratio(u128::from(tenure_ms), u128::from(MS_PER_DAY))
        .weighted(10)
        .min(Fixed::from_bps(2_000));

    let volume = Fixed::ratio(
        u128::from(agent.activities_completed),
        u128::from(global.total_agents),
    )
    .min(Fixed::from_bps(2_000));

    // Flat participation bonus, not proportional to the amount contributed.
    let capital = if agent.total_capital_contributed > 0 {
        Fixed::from_bps(100)
    } else {
        Fixed::ZERO
    };

    let stability = history
        .and_then(|scores| {
            Fixed::mean(
                scores
                    .iter()
                    .map(|score| Fixed::from_bps(i64::from(score.overall_score))),
            )
        })
        .map(|average| (BASELINE - (average - BASELINE).abs()).weighted(2_000))
        .unwrap_or(Fixed::ZERO);

    (BASELINE + age + volume + capital + stability).clamp_bps()
}

/// Data-volume, tenure, recency, and completeness signals, clamped to `[0, 100]`.
pub(crate) fn confidence(agent: &AgentData, now: DateTime<Utc>) -> u8 {
    let activity: i32 = match agent.activities_completed {
        n if n >= 10 => 40,
        n if n >= 5 => 30,
        n if n >= 3 => 20,
        n if n >= 1 => 10,
        _ => 0,
    };

    let tenure_ms = elapsed_ms(agent.joined_at, now);
    let tenure = if tenure_ms >= 90 * MS_PER_DAY {
        30
    } else if tenure_ms >= 30 * MS_PER_DAY {
        20
    } else if tenure_ms >= 7 * MS_PER_DAY {
        10
    } else {
        0
    };

    let recency = match whole_days(agent.last_activity, now) {
        days if days <= 7 => 20,
        days if days <= 30 => 10,
        days if days > 90 => -20,
        _ => 0,
    };

    let completeness = 5 * i32::from(agent.compliance_rate_bps.is_some())
        + 5 * i32::from(agent.response_time_ms.is_some());

    (activity + tenure + recency + completeness).clamp(0, 100) as u8
}
