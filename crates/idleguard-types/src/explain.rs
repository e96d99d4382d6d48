//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to resolve findings.
    pub remediation: &'static str,
    /// Before/after inventory examples.
    pub examples: ExamplePair,
}

/// Before and after inventory snippets.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A snapshot that would trigger a finding.
    pub before: &'static str,
    /// A snapshot that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_EC2_UNUSED_SECURITY_GROUPS => Some(explain_unused_security_groups()),
        ids::CHECK_IAM_UNUSED_ROLES => Some(explain_unused_roles()),
        ids::CHECK_IAM_UNUSED_USERS => Some(explain_unused_users()),

        // Codes
        ids::CODE_UNREFERENCED_GROUP => Some(explain_unused_security_groups()),
        ids::CODE_STALE_ROLE | ids::CODE_NEVER_USED_ROLE => Some(explain_unused_roles()),
        ids::CODE_STALE_USER | ids::CODE_NEVER_USED_USER => Some(explain_unused_users()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_EC2_UNUSED_SECURITY_GROUPS,
        ids::CHECK_IAM_UNUSED_ROLES,
        ids::CHECK_IAM_UNUSED_USERS,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UNREFERENCED_GROUP,
        ids::CODE_STALE_ROLE,
        ids::CODE_NEVER_USED_ROLE,
        ids::CODE_STALE_USER,
        ids::CODE_NEVER_USED_USER,
    ]
}

fn explain_unused_security_groups() -> Explanation {
    Explanation {
        title: "Unused Security Groups",
        description: "\
Flags security groups that are not referenced by any network interface or by
another group's rules.

Unreferenced groups accumulate as infrastructure churns. They are a problem
because:
- They hide the groups that actually matter during incident review
- Stale ingress rules get copy-pasted into new groups
- Accounts bump into the per-VPC security group quota",
        remediation: "\
Confirm the group is not referenced by infrastructure-as-code that is about to
be applied, then delete it:

    aws ec2 delete-security-group --group-id sg-0abc

If the group must be kept (e.g. a break-glass group), add its name to the
check's allow list in idleguard.toml.",
        examples: ExamplePair {
            before: r#"{ "id": "sg-0abc", "name": "old-web", "in_use": false }"#,
            after: r#"{ "id": "sg-0def", "name": "web", "in_use": true }"#,
        },
    }
}

fn explain_unused_roles() -> Explanation {
    Explanation {
        title: "Unused IAM Roles",
        description: "\
Flags IAM roles with no recorded activity inside the unused-days window
(default 90 days).

A role that was last assumed months ago, or was created long ago and never
assumed at all, is standing privilege nobody exercises. Roles under the
`/aws-service-role/` path are service-linked, managed by AWS, and never
flagged; user-created `/service-role/` roles are evaluated normally.

Freshly created roles that have never been used are given a grace period so
that roles provisioned ahead of a rollout are not reported; pass
include_newly_created to surface them anyway.",
        remediation: "\
Check CloudTrail for AssumeRole events before acting, then either delete the
role or strip its policies:

    aws iam delete-role --role-name old-deploy

Roles that are intentionally dormant (disaster recovery, break-glass) belong
in the check's allow list.",
        examples: ExamplePair {
            before: r#"{ "name": "old-deploy", "created_date": "2022-03-15T00:00:00Z", "last_used": null }"#,
            after: r#"{ "name": "deploy", "last_used": { "used_date": "2026-08-20T07:12:00Z" } }"#,
        },
    }
}

fn explain_unused_users() -> Explanation {
    Explanation {
        title: "Unused IAM Users",
        description: "\
Flags IAM users none of whose credentials have been exercised inside the
unused-days window (default 90 days).

A user counts as active if *any* signal is recent: console password use, a
login profile created recently, or any access key used recently. Staleness
requires every signal to be old or absent.

Users with no credential signal at all fall back to their creation date and
get the same newly-created grace period as roles.",
        remediation: "\
Disable credentials first, delete after a quarantine period:

    aws iam update-access-key --user-name bob --access-key-id AKIA... --status Inactive
    aws iam delete-login-profile --user-name bob

Service accounts that are intentionally dormant belong in the check's allow
list.",
        examples: ExamplePair {
            before: r#"{ "name": "bob", "created_date": "2022-05-18T00:00:00Z", "access_keys": [] }"#,
            after: r#"{ "name": "alice", "password_last_used_date": "2026-08-21T09:00:00Z" }"#,
        },
    }
}
