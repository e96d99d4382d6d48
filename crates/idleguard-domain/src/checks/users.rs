use crate::checks::utils;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::Inventory;
use crate::policy::EffectiveConfig;
use idleguard_types::{ids, Finding, IamUser, ResourceKind, Subject};
use serde_json::json;
use time::OffsetDateTime;

/// Why a user was classified as unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserVerdict {
    /// Every activity signal is older than the threshold.
    Stale,
    /// No credential has ever produced an activity signal.
    NeverUsed,
}

/// The most recent activity signal across all of the user's credentials.
///
/// Signals, each independent:
/// - console password use; when absent but a login profile exists, the
///   profile's creation date stands in (password issued, never used)
/// - each access key's last-used date
///
/// `None` when the user has no signal at all.
pub fn latest_activity(user: &IamUser) -> Option<OffsetDateTime> {
    let console = user
        .password_last_used_date
        .or_else(|| user.login_profile.as_ref().map(|p| p.created_date));

    let keys = user.access_keys.iter().filter_map(|k| k.last_used_date);

    console.into_iter().chain(keys).max()
}

/// Classify one user. `None` means the user is not reported.
pub fn classify(
    user: &IamUser,
    now: OffsetDateTime,
    unused_days: u16,
    include_newly_created: bool,
) -> Option<UserVerdict> {
    match latest_activity(user) {
        Some(reference) => (utils::age_in_days(now, reference) >= i64::from(unused_days))
            .then_some(UserVerdict::Stale),
        None => {
            if include_newly_created
                || utils::age_in_days(now, user.created_date) >= i64::from(unused_days)
            {
                Some(UserVerdict::NeverUsed)
            } else {
                None
            }
        }
    }
}

pub fn is_unused(
    user: &IamUser,
    now: OffsetDateTime,
    unused_days: u16,
    include_newly_created: bool,
) -> bool {
    classify(user, now, unused_days, include_newly_created).is_some()
}

pub fn run(
    model: &Inventory,
    cfg: &EffectiveConfig,
    now: OffsetDateTime,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_IAM_UNUSED_USERS) else {
        return;
    };

    for user in &model.users {
        let Some(verdict) = classify(user, now, cfg.unused_days, cfg.include_newly_created) else {
            continue;
        };
        if utils::is_allowed(&policy.allow, &user.name) {
            continue;
        }

        let reference_date = latest_activity(user).unwrap_or(user.created_date);
        let age_days = utils::age_in_days(now, reference_date);

        let (code, message) = match verdict {
            UserVerdict::Stale => (
                ids::CODE_STALE_USER,
                format!(
                    "user '{}' has no credential activity for {} days (threshold {})",
                    user.name, age_days, cfg.unused_days
                ),
            ),
            UserVerdict::NeverUsed => (
                ids::CODE_NEVER_USED_USER,
                format!(
                    "user '{}' has no credential activity since its creation {} days ago",
                    user.name, age_days
                ),
            ),
        };

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_IAM_UNUSED_USERS.to_string(),
            code: code.to_string(),
            message,
            subject: Some(Subject {
                kind: ResourceKind::IamUser,
                name: user.name.clone(),
                arn: Some(user.arn.clone()),
            }),
            help: Some(
                "Deactivate the user's credentials, quarantine, then delete the user or allow-list it."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint_for_resource(
                ids::CHECK_IAM_UNUSED_USERS,
                code,
                &user.arn,
            )),
            data: json!({
                "arn": user.arn,
                "age_days": age_days,
                "access_keys": user.access_keys.len(),
                "has_login_profile": user.login_profile.is_some(),
                "account": user.account.as_str(),
            }),
        });
    }
}
