use crate::policy::{CheckPolicy, EffectiveConfig, FailOn};
use idleguard_types::{
    AccessKey, AccountId, IamRole, IamUser, LoginProfile, RoleLastUsed, SecurityGroup, Severity,
    ids,
};
use std::collections::BTreeMap;
use time::macros::{datetime, format_description};
use time::{Date, OffsetDateTime};

/// Fixed evaluation instant for deterministic tests.
pub(crate) const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

pub(crate) fn account() -> AccountId {
    AccountId::new("123456789012").expect("fixture account id")
}

/// Parse a `YYYY-MM-DD` fixture date as UTC midnight.
pub(crate) fn day(s: &str) -> OffsetDateTime {
    let fd = format_description!("[year]-[month]-[day]");
    Date::parse(s, &fd)
        .expect("fixture date")
        .midnight()
        .assume_utc()
}

pub(crate) fn group(name: &str, id: &str, in_use: Option<bool>) -> SecurityGroup {
    SecurityGroup {
        account: account(),
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        vpc_id: Some("vpc-0123".to_string()),
        in_use,
    }
}

pub(crate) fn role(
    name: &str,
    path: Option<&str>,
    created: &str,
    last_used: Option<OffsetDateTime>,
) -> IamRole {
    IamRole {
        account: account(),
        name: name.to_string(),
        id: format!("AROA{}", name.to_uppercase()),
        arn: format!("arn:aws:iam::123456789012:role/{name}"),
        path: path.map(|p| p.to_string()),
        max_session_duration: 3600,
        created_date: day(created),
        last_used: last_used.map(|used_date| RoleLastUsed {
            used_date: Some(used_date),
            region: None,
        }),
        permissions_boundary: None,
    }
}

pub(crate) fn access_key(last_used: Option<OffsetDateTime>) -> AccessKey {
    AccessKey {
        id: "AKIAEXAMPLE".to_string(),
        status: "Active".to_string(),
        created_date: day("2022-06-18"),
        last_used_date: last_used,
        last_used_service: None,
        last_used_region: None,
    }
}

pub(crate) fn user(
    name: &str,
    created: &str,
    password_last_used: Option<OffsetDateTime>,
    login_profile_created: Option<OffsetDateTime>,
    access_keys: Vec<AccessKey>,
) -> IamUser {
    IamUser {
        account: account(),
        name: name.to_string(),
        id: format!("AIDA{}", name.to_uppercase()),
        arn: format!("arn:aws:iam::123456789012:user/{name}"),
        path: None,
        created_date: day(created),
        password_last_used_date: password_last_used,
        login_profile: login_profile_created.map(|created_date| LoginProfile {
            created_date,
            password_reset_required: false,
        }),
        access_keys,
    }
}

pub(crate) fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    checks.insert(check_id.to_string(), CheckPolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        unused_days: 90,
        include_newly_created: false,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}

pub(crate) fn config_all_checks(severity: Severity) -> EffectiveConfig {
    let mut checks = BTreeMap::new();
    for id in [
        ids::CHECK_EC2_UNUSED_SECURITY_GROUPS,
        ids::CHECK_IAM_UNUSED_ROLES,
        ids::CHECK_IAM_UNUSED_USERS,
    ] {
        checks.insert(id.to_string(), CheckPolicy::enabled(severity));
    }
    EffectiveConfig {
        profile: "test".to_string(),
        unused_days: 90,
        include_newly_created: false,
        fail_on: FailOn::Error,
        max_findings: 200,
        checks,
    }
}
