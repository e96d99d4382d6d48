use crate::checks::utils;
use crate::fingerprint::fingerprint_for_resource;
use crate::model::Inventory;
use crate::policy::EffectiveConfig;
use idleguard_types::{ids, Finding, ResourceKind, SecurityGroup, Subject};
use serde_json::json;

/// A group is unused only on an explicit provider verdict. A missing usage
/// annotation means usage was never observed, not that the group is idle.
pub fn is_unused(group: &SecurityGroup) -> bool {
    group.in_use == Some(false)
}

pub fn run(model: &Inventory, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_EC2_UNUSED_SECURITY_GROUPS) else {
        return;
    };

    for group in &model.security_groups {
        if !is_unused(group) {
            continue;
        }
        if utils::is_allowed(&policy.allow, &group.name) {
            continue;
        }
        out.push(Finding {
            severity: policy.severity,
            check_id: ids::CHECK_EC2_UNUSED_SECURITY_GROUPS.to_string(),
            code: ids::CODE_UNREFERENCED_GROUP.to_string(),
            message: format!(
                "security group '{}' ({}) is not referenced by any network interface or rule",
                group.name, group.id
            ),
            subject: Some(Subject {
                kind: ResourceKind::SecurityGroup,
                name: group.name.clone(),
                arn: None,
            }),
            help: Some(
                "Delete the group, or add it to the check's allow list if it is kept on purpose."
                    .to_string(),
            ),
            url: None,
            fingerprint: Some(fingerprint_for_resource(
                ids::CHECK_EC2_UNUSED_SECURITY_GROUPS,
                ids::CODE_UNREFERENCED_GROUP,
                &group.id,
            )),
            data: json!({
                "group_id": group.id,
                "vpc_id": group.vpc_id,
                "account": group.account.as_str(),
            }),
        });
    }
}
