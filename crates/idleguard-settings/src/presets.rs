use idleguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, DEFAULT_UNUSED_DAYS};
use idleguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "strict" => strict_profile(),
        // default
        _ => standard_profile(),
    }
}

fn standard_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "standard".to_string(),
        unused_days: DEFAULT_UNUSED_DAYS,
        include_newly_created: false,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks: default_checks(Severity::Warning),
    }
}

fn strict_profile() -> EffectiveConfig {
    // Strict mode treats stale resources as errors and fails on any warning.
    EffectiveConfig {
        profile: "strict".to_string(),
        unused_days: DEFAULT_UNUSED_DAYS,
        include_newly_created: true,
        fail_on: FailOn::Warning,
        max_findings: 200,
        checks: default_checks(Severity::Error),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use idleguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_EC2_UNUSED_SECURITY_GROUPS.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_IAM_UNUSED_ROLES.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_IAM_UNUSED_USERS.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
