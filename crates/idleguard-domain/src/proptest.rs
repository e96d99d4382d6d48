//! Property-based tests for the classification engine.
//!
//! Invariants covered:
//! - determinism of evaluation
//! - threshold monotonicity (older never un-flags)
//! - include_newly_created only widens the result set
//! - the service-linked exemption is unconditional

use crate::checks::{roles, security_groups, users};
use crate::engine::evaluate;
use crate::model::Inventory;
use crate::test_support::{access_key, config_all_checks, group, role, user, NOW};
use idleguard_types::Severity;
use proptest::prelude::*;
use time::Duration;

/// Strategy for plausible resource names.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_-]{0,31}").unwrap()
}

/// Strategy for an age in days, spanning both sides of the 90-day default.
fn arb_age_days() -> impl Strategy<Value = i64> {
    0i64..1000
}

fn arb_role() -> impl Strategy<Value = idleguard_types::IamRole> {
    (
        arb_name(),
        prop_oneof![
            Just(None),
            Just(Some("/service-role/".to_string())),
            Just(Some("/aws-service-role/".to_string())),
        ],
        arb_age_days(),
        prop::option::of(arb_age_days()),
    )
        .prop_map(|(name, path, created_age, used_age)| {
            let mut r = role(&name, path.as_deref(), "2015-01-01", None);
            r.created_date = NOW - Duration::days(created_age);
            r.last_used = used_age.map(|age| idleguard_types::RoleLastUsed {
                used_date: Some(NOW - Duration::days(age)),
                region: None,
            });
            r
        })
}

fn arb_user() -> impl Strategy<Value = idleguard_types::IamUser> {
    (
        arb_name(),
        arb_age_days(),
        prop::option::of(arb_age_days()),
        prop::option::of(arb_age_days()),
        prop::collection::vec(prop::option::of(arb_age_days()), 0..3),
    )
        .prop_map(|(name, created_age, password_age, profile_age, key_ages)| {
            let mut u = user(&name, "2015-01-01", None, None, Vec::new());
            u.created_date = NOW - Duration::days(created_age);
            u.password_last_used_date = password_age.map(|a| NOW - Duration::days(a));
            u.login_profile = profile_age.map(|a| idleguard_types::LoginProfile {
                created_date: NOW - Duration::days(a),
                password_reset_required: false,
            });
            u.access_keys = key_ages
                .into_iter()
                .map(|age| access_key(age.map(|a| NOW - Duration::days(a))))
                .collect();
            u
        })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic(
        roles in prop::collection::vec(arb_role(), 0..8),
        users in prop::collection::vec(arb_user(), 0..8),
    ) {
        let model = Inventory { security_groups: Vec::new(), roles, users };
        let cfg = config_all_checks(Severity::Warning);

        let a = evaluate(&model, &cfg, NOW);
        let b = evaluate(&model, &cfg, NOW);
        prop_assert_eq!(a.findings, b.findings);
        prop_assert_eq!(a.verdict, b.verdict);
    }

    #[test]
    fn older_roles_never_become_used_again(r in arb_role(), extra in 0i64..500) {
        // Shifting every date further into the past can only keep or gain the flag.
        let before = roles::is_unused(&r, NOW, 90, false);

        let mut older = r.clone();
        older.created_date -= Duration::days(extra);
        if let Some(last_used) = &mut older.last_used {
            if let Some(used) = &mut last_used.used_date {
                *used -= Duration::days(extra);
            }
        }
        let after = roles::is_unused(&older, NOW, 90, false);

        prop_assert!(!before || after);
    }

    #[test]
    fn include_newly_created_only_widens(r in arb_role(), u in arb_user()) {
        prop_assert!(
            !roles::is_unused(&r, NOW, 90, false) || roles::is_unused(&r, NOW, 90, true)
        );
        prop_assert!(
            !users::is_unused(&u, NOW, 90, false) || users::is_unused(&u, NOW, 90, true)
        );
    }

    #[test]
    fn service_linked_roles_are_exempt_for_any_age(age in arb_age_days(), flag in any::<bool>()) {
        let mut r = role("svc", Some("/aws-service-role/"), "2015-01-01", None);
        r.created_date = NOW - Duration::days(age);
        prop_assert!(!roles::is_unused(&r, NOW, 90, flag));
    }

    #[test]
    fn flagged_groups_are_exactly_the_explicitly_unused(
        usage in prop::collection::vec(prop::option::of(any::<bool>()), 0..16),
    ) {
        let groups: Vec<_> = usage
            .iter()
            .enumerate()
            .map(|(i, in_use)| group(&format!("g{i}"), &format!("sg-{i:04}"), *in_use))
            .collect();

        let flagged: Vec<_> = groups.iter().filter(|g| security_groups::is_unused(g)).collect();
        prop_assert!(flagged.iter().all(|g| g.in_use == Some(false)));
        let expected = usage.iter().filter(|u| **u == Some(false)).count();
        prop_assert_eq!(flagged.len(), expected);
    }
}
