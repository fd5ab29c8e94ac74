//! Properties that must hold for every input, checked with generated data.

use amana_scoring::scoring::basis_points::validate_weight_sum;
use amana_scoring::scoring::compliance::{
    ActivitySubmission, ComplianceScorer, CriteriaOverride, PROHIBITED_ACTIVITIES,
};
use amana_scoring::scoring::hai::{ActivityData, HaiCalculator};
use amana_scoring::scoring::trust::{
    AgentData, GlobalMetrics, TrustEngineConfig, TrustScoreEngine, TrustScoreInput, TrustTier,
};
use amana_scoring::scoring::{WeightSet, MAX_BPS};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use proptest::sample::select;

const BUILTIN_TYPES: [&str; 9] = [
    "trade",
    "manufacturing",
    "agriculture",
    "real-estate",
    "technology",
    "services",
    "sukuk",
    "mudarabah",
    "musharakah",
];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap()
}

fn submission(activity_type: &str) -> ActivitySubmission {
    ActivitySubmission {
        id: "generated".to_string(),
        description: String::new(),
        activity_type: activity_type.to_string(),
        capital_amount: 1_000,
        proposer: "agent-p".to_string(),
    }
}

fn attestation() -> impl Strategy<Value = CriteriaOverride> {
    (
        any::<Option<bool>>(),
        any::<Option<bool>>(),
        any::<Option<bool>>(),
        any::<Option<bool>>(),
    )
        .prop_map(
            |(asset_backed, real_economic_value, documentation_provided, verified_by_validators)| {
                CriteriaOverride {
                    asset_backed,
                    real_economic_value,
                    documentation_provided,
                    verified_by_validators,
                }
            },
        )
}

fn activity() -> impl Strategy<Value = ActivityData> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 0u32..50, 0u32..50).prop_map(
        |(compliant, asset_backed, economic_value, validator_count, votes)| ActivityData {
            is_compliant: compliant,
            is_asset_backed: asset_backed,
            has_real_economic_value: economic_value,
            validator_count,
            positive_votes: votes.min(validator_count),
            timestamp: now(),
        },
    )
}

fn trust_input() -> impl Strategy<Value = TrustScoreInput> {
    let counts = (0u64..500, 0u64..500, 0u64..500, 0u64..500);
    let capital = (0u128..10_000_000, 0u128..10_000_000, 0u128..10_000_000);
    let timing = (
        0i64..400,
        0i64..400,
        proptest::option::of(0u16..=MAX_BPS),
        proptest::option::of(0u64..200_000_000),
    );
    let global = (0u64..1_000, 0u16..=MAX_BPS);

    (counts, capital, timing, global).prop_map(
        |(
            (completed, proposed, successful, failed),
            (contributed, profit, loss),
            (joined_days, idle_days, compliance_rate_bps, response_time_ms),
            (total_agents, average_compliance_bps),
        )| TrustScoreInput {
            agent: AgentData {
                agent_id: "agent-generated".to_string(),
                activities_completed: completed,
                activities_proposed: proposed,
                successful_activities: successful,
                failed_activities: failed,
                total_capital_contributed: contributed,
                profit_generated: profit,
                loss_incurred: loss,
                joined_at: now() - Duration::days(joined_days),
                last_activity: now() - Duration::days(idle_days),
                compliance_rate_bps,
                response_time_ms,
            },
            historical_scores: None,
            global_metrics: GlobalMetrics {
                total_agents,
                total_activities: total_agents * 10,
                average_compliance_bps,
            },
        },
    )
}

#[test]
fn tier_boundaries_fall_on_the_documented_scores() {
    let cases = [
        (0, TrustTier::Untrusted),
        (2_999, TrustTier::Untrusted),
        (3_000, TrustTier::Bronze),
        (4_999, TrustTier::Bronze),
        (5_000, TrustTier::Silver),
        (6_999, TrustTier::Silver),
        (7_000, TrustTier::Gold),
        (8_999, TrustTier::Gold),
        (9_000, TrustTier::Platinum),
        (10_000, TrustTier::Platinum),
        (10_001, TrustTier::Untrusted),
        (u16::MAX, TrustTier::Untrusted),
    ];

    for (score, expected) in cases {
        assert_eq!(TrustTier::from_score(score), expected, "score {score}");
    }
}

proptest! {
    #[test]
    fn weight_sets_are_accepted_only_at_exactly_10000(
        weights in proptest::array::uniform4(0u16..=MAX_BPS)
    ) {
        let total: u32 = weights.iter().map(|weight| u32::from(*weight)).sum();
        let accepted = validate_weight_sum(WeightSet::Trust, weights).is_ok();
        prop_assert_eq!(accepted, total == 10_000);
    }

    #[test]
    fn prohibited_tags_always_score_zero(
        tag in select(PROHIBITED_ACTIVITIES.to_vec()),
        attested in attestation(),
    ) {
        let result = ComplianceScorer::new().score(&submission(&tag.to_uppercase()), Some(&attested));

        prop_assert!(!result.is_compliant);
        prop_assert_eq!(result.score, 0);
        prop_assert_eq!(result.confidence, 100);
        prop_assert!(result.criteria.prohibited_activity);
    }

    #[test]
    fn compliance_scores_stay_in_range_and_verdicts_are_consistent(
        activity_type in select(BUILTIN_TYPES.to_vec()),
        attested in attestation(),
    ) {
        let result = ComplianceScorer::new().score(&submission(activity_type), Some(&attested));

        prop_assert!(result.score <= MAX_BPS);
        prop_assert!(result.confidence <= 100);
        prop_assert_eq!(result.issues.len(), result.suggestions.len());
        if result.is_compliant {
            prop_assert!(result.score >= 5_000);
            prop_assert!(result.issues.is_empty());
        }
    }

    #[test]
    fn attesting_a_criterion_never_lowers_the_score(
        activity_type in select(BUILTIN_TYPES.to_vec()),
        attested in attestation(),
        criterion in 0usize..4,
    ) {
        let scorer = ComplianceScorer::new();
        let mut strengthened = attested;
        match criterion {
            0 => strengthened.asset_backed = Some(true),
            1 => strengthened.real_economic_value = Some(true),
            2 => strengthened.documentation_provided = Some(true),
            _ => strengthened.verified_by_validators = Some(true),
        }

        let before = scorer.score(&submission(activity_type), Some(&attested));
        let after = scorer.score(&submission(activity_type), Some(&strengthened));

        prop_assert!(after.score >= before.score);
    }

    #[test]
    fn hai_stays_in_range_for_consistent_totals(
        activities in proptest::collection::vec(activity(), 0..40),
        extra in 0u64..40,
    ) {
        let total = activities.len() as u64 + extra;
        let calculator = HaiCalculator::default();

        let first = calculator.calculate_at(&activities, total, now());
        let second = calculator.calculate_at(&activities, total, now());

        prop_assert!(first.score <= MAX_BPS);
        prop_assert!(first.percentage <= 100);
        prop_assert!(first.components.compliance_score <= u32::from(MAX_BPS));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_score_maps_to_the_band_containing_it(score in 0u16..=MAX_BPS) {
        let tier = TrustTier::from_score(score);

        prop_assert!(tier.min_score() <= score && score <= tier.max_score());
        let matching = TrustTier::ordered()
            .iter()
            .filter(|band| band.min_score() <= score && score <= band.max_score())
            .count();
        prop_assert_eq!(matching, 1);
    }

    #[test]
    fn trust_scores_are_bounded_and_deterministic(input in trust_input()) {
        let engine = TrustScoreEngine::default();

        let first = engine.calculate_at(&input, now());
        let second = engine.calculate_at(&input, now());

        prop_assert!(first.overall_score <= MAX_BPS);
        prop_assert!(first.confidence <= 100);
        prop_assert!(first.tier.min_score() <= first.overall_score);
        prop_assert!(first.overall_score <= first.tier.max_score().saturating_add(1));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn faster_decay_never_raises_the_score(input in trust_input(), rate in 0u32..200) {
        let slow = TrustScoreEngine::new(TrustEngineConfig {
            decay_rate: rate,
            ..TrustEngineConfig::default()
        })
        .expect("default weights are valid");
        let fast = TrustScoreEngine::new(TrustEngineConfig {
            decay_rate: rate + 10,
            ..TrustEngineConfig::default()
        })
        .expect("default weights are valid");

        let slow_score = slow.calculate_at(&input, now());
        let fast_score = fast.calculate_at(&input, now());

        prop_assert!(fast_score.overall_score <= slow_score.overall_score);
        prop_assert!(fast_score.tier <= slow_score.tier);
    }
}
