use super::common::*;
use crate::scoring::compliance::{normalize_activity_type, ActivityTypeConfig};

fn permissive() -> ActivityTypeConfig {
    ActivityTypeConfig {
        allowed: true,
        requires_documentation: false,
        requires_validation: false,
        additional_criteria: vec!["community-benefit".to_string()],
    }
}

#[test]
fn normalization_collapses_whitespace_into_hyphens() {
    assert_eq!(normalize_activity_type("  Real   Estate "), "real-estate");
    assert_eq!(normalize_activity_type("Sukuk"), "sukuk");
    assert_eq!(normalize_activity_type("green\tenergy\nfund"), "green-energy-fund");
    assert_eq!(normalize_activity_type("   "), "");
}

#[test]
fn unknown_types_resolve_to_restrictive_policy() {
    let scorer = scorer();

    assert_eq!(
        scorer.activity_config("space tourism"),
        ActivityTypeConfig::restrictive()
    );
    let trade = scorer.activity_config("Trade");
    assert!(trade.allowed);
    assert!(trade.requires_documentation);
    assert!(!trade.requires_validation);
}

#[test]
fn overrides_shadow_builtins_until_removed() {
    let mut scorer = scorer();
    scorer.add_activity_type("Manufacturing", permissive());

    assert_eq!(scorer.activity_config("manufacturing"), permissive());
    let result = scorer.score(&submission("manufacturing"), None);
    assert_eq!(result.issues.len(), 2);

    let removed = scorer.remove_activity_type("  manufacturing ");
    assert_eq!(removed, Some(permissive()));
    assert!(scorer.activity_config("manufacturing").requires_validation);
    assert_eq!(scorer.remove_activity_type("manufacturing"), None);
}

#[test]
fn registered_type_becomes_scorable() {
    let mut scorer = scorer();
    scorer.add_activity_type("Halal Food Logistics", permissive());

    let result = scorer.score(&submission("halal food logistics"), Some(&fully_attested()));

    assert!(result.is_compliant);
    assert_eq!(result.score, 10_000);
}

#[test]
fn overrides_cannot_lift_a_prohibition() {
    let mut scorer = scorer();
    scorer.add_activity_type("gambling", permissive());

    let result = scorer.score(&submission("gambling"), Some(&fully_attested()));

    assert_eq!(result.score, 0);
    assert!(!result.is_compliant);
    assert!(scorer.is_prohibited("Gambling"));
}

#[test]
fn prohibited_lookup_is_exact() {
    let scorer = scorer();

    assert_eq!(scorer.prohibited_activities().len(), 12);
    assert!(scorer.is_prohibited("Adult Entertainment"));
    assert!(!scorer.is_prohibited("alcohol-free-beverages"));
}

#[test]
fn short_selling_is_registrable_rather_than_prohibited() {
    let mut scorer = scorer();
    assert!(!scorer.is_prohibited("short selling"));

    scorer.add_activity_type("Short Selling", permissive());
    let result = scorer.score(&submission("short selling"), Some(&fully_attested()));

    assert!(result.is_compliant);
    assert!(!result.criteria.prohibited_activity);
}

#[test]
fn allowed_types_concatenate_builtins_and_overrides() {
    let mut scorer = scorer();
    assert_eq!(scorer.allowed_activity_types().len(), 9);

    scorer.add_activity_type("trade", permissive());
    scorer.add_activity_type("ijarah", permissive());
    let types = scorer.allowed_activity_types();

    assert_eq!(types.len(), 11);
    assert_eq!(types.iter().filter(|name| *name == "trade").count(), 2);
    assert_eq!(types.last().map(String::as_str), Some("trade"));
}
