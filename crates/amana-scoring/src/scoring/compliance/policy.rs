use super::domain::ActivityTypeConfig;

struct BuiltinActivityType {
    name: &'static str,
    requires_documentation: bool,
    requires_validation: bool,
    additional_criteria: &'static [&'static str],
}

const BUILTIN_ACTIVITY_TYPES: [BuiltinActivityType; 9] = [
    BuiltinActivityType {
        name: "trade",
        requires_documentation: true,
        requires_validation: false,
        additional_criteria: &["physical-goods", "ownership-transfer"],
    },
    BuiltinActivityType {
        name: "manufacturing",
        requires_documentation: true,
        requires_validation: true,
        additional_criteria: &["halal-products", "ethical-labor"],
    },
    BuiltinActivityType {
        name: "agriculture",
        requires_documentation: true,
        requires_validation: false,
        additional_criteria: &["sustainable-practices"],
    },
    BuiltinActivityType {
        name: "real-estate",
        requires_documentation: true,
        requires_validation: true,
        additional_criteria: &["clear-title", "no-interest-financing"],
    },
    BuiltinActivityType {
        name: "technology",
        requires_documentation: true,
        requires_validation: false,
        additional_criteria: &["halal-use-case"],
    },
    BuiltinActivityType {
        name: "services",
        requires_documentation: false,
        requires_validation: false,
        additional_criteria: &["ethical-services"],
    },
    BuiltinActivityType {
        name: "sukuk",
        requires_documentation: true,
        requires_validation: true,
        additional_criteria: &["asset-backed-structure", "sharia-board-approval"],
    },
    BuiltinActivityType {
        name: "mudarabah",
        requires_documentation: true,
        requires_validation: true,
        additional_criteria: &["profit-sharing-ratio", "capital-provider-agreement"],
    },
    BuiltinActivityType {
        name: "musharakah",
        requires_documentation: true,
        requires_validation: true,
        additional_criteria: &["partnership-agreement", "loss-sharing"],
    },
];

/// Activity tags that can never be compliant.
pub const PROHIBITED_ACTIVITIES: [&str; 12] = [
    "alcohol",
    "gambling",
    "interest-lending",
    "riba",
    "speculation",
    "weapons",
    "tobacco",
    "pork",
    "adult-entertainment",
    "conventional-banking",
    "insurance-conventional",
    "derivatives",
];

/// Lowercase, trim, and collapse internal whitespace runs into a single hyphen.
pub fn normalize_activity_type(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Exact match of an already normalized tag against the prohibited set.
pub(crate) fn is_prohibited_tag(normalized: &str) -> bool {
    PROHIBITED_ACTIVITIES.contains(&normalized)
}

pub(crate) fn builtin_config(normalized: &str) -> Option<ActivityTypeConfig> {
    BUILTIN_ACTIVITY_TYPES
        .iter()
        .find(|entry| entry.name == normalized)
        .map(|entry| ActivityTypeConfig {
            allowed: true,
            requires_documentation: entry.requires_documentation,
            requires_validation: entry.requires_validation,
            additional_criteria: entry
                .additional_criteria
                .iter()
                .map(|criterion| criterion.to_string())
                .collect(),
        })
}

pub(crate) fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_ACTIVITY_TYPES.iter().map(|entry| entry.name)
}
