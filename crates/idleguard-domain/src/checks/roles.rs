use crate::checks::utils;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::Inventory;
use crate::policy::EffectiveConfig;
use idleguard_types::{ids, Finding, IamRole, ResourceKind, Subject};
use serde_json::json;
use time::OffsetDateTime;

/// Why a role was classified as unused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleVerdict {
    /// Last assumption is older than the threshold.
    Stale,
    /// Never assumed, and past the newly-created grace period (or the caller
    /// asked for newly created roles too).
    NeverUsed,
}

/// Classify one role. `None` means the role is not reported.
///
/// Service-linked roles (path under `/aws-service-role/`) are excluded
/// unconditionally; they are managed by AWS, not the account owner. A role
/// under `/service-role/` is user-created and evaluated like any other.
pub fn classify(
    role: &IamRole,
    now: OffsetDateTime,
    unused_days: u16,
    include_newly_created: bool,
) -> Option<RoleVerdict> {
    if role
        .path
        .as_deref()
        .is_some_and(|p| p.starts_with(ids::SERVICE_LINKED_ROLE_PATH))
    {
        return None;
    }

    let last_used = role.last_used.as_ref().and_then(|l| l.used_date);
    match last_used {
        Some(used_date) => {
            (utils::age_in_days(now, used_date) >= i64::from(unused_days))
                .then_some(RoleVerdict::Stale)
        }
        None => {
            if include_newly_created
                || utils::age_in_days(now, role.created_date) >= i64::from(unused_days)
            {
                Some(RoleVerdict::NeverUsed)
            } else {
                // Grace period: created recently, not yet used, too new to judge.
                None
            }
        }
    }
}

pub fn is_unused(
    role: &IamRole,
    now: OffsetDateTime,
    unused_days: u16,
    include_newly_created: bool,
) -> bool {
    classify(role, now, unused_days, include_newly_created).is_some()
}

pub fn run(
    model: &Inventory,
    cfg: &EffectiveConfig,
    now: OffsetDateTime,
    out: &mut Vec<Finding>,
) {
    let Some(policy) = cfg.check_policy(ids::CHECK_IAM_UNUSED_ROLES) else {
        return;
    };

    for role in &model.roles {
        let Some(verdict) = classify(role, now, cfg.unused_days, cfg.include_newly_created) else {
            continue;
        };
        if utils::is_allowed(&policy.allow, &role.name) {
            continue;
        }

        let reference_date = role
            .last_used
            .as_ref()
            .and_then(|l| l.used_date)
            .unwrap_or(role.created_date);
        let age_days = utils::age_in_days(now, reference_date);

        let (code, message) = match verdict {
            RoleVerdict::Stale => (
                ids::CODE_STALE_ROLE,
                format!(
                    "role '{}' was last used {} days ago (threshold {})",
                    role.name, age_days, cfg.unused_days
                ),
            ),
            RoleVerdict::NeverUsed => (
                ids::CODE_NEVER_USED_ROLE,
                format!(
                    "role '{}' has never been used since its creation {} days ago",
                    role.name, age_days
                ),
            ),
        };

        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_IAM_UNUSED_ROLES.to_string(),
            code: code.to_string(),
            message,
            subject: Some(Subject {
                kind: ResourceKind::IamRole,
                name: role.name.clone(),
                arn: Some(role.arn.clone()),
            }),
            help: Some(
                "Verify against CloudTrail AssumeRole events, then delete the role or allow-list it."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint_for_resource(
                ids::CHECK_IAM_UNUSED_ROLES,
                code,
                &role.arn,
            )),
            data: json!({
                "arn": role.arn,
                "path": role.path,
                "age_days": age_days,
                "account": role.account.as_str(),
            }),
        });
    }
}
