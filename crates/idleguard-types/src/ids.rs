//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_EC2_UNUSED_SECURITY_GROUPS: &str = "ec2.unused_security_groups";
pub const CHECK_IAM_UNUSED_ROLES: &str = "iam.unused_roles";
pub const CHECK_IAM_UNUSED_USERS: &str = "iam.unused_users";

// Codes: ec2.unused_security_groups
pub const CODE_UNREFERENCED_GROUP: &str = "unreferenced_group";

// Codes: iam.unused_roles
pub const CODE_STALE_ROLE: &str = "stale_role";
pub const CODE_NEVER_USED_ROLE: &str = "never_used_role";

// Codes: iam.unused_users
pub const CODE_STALE_USER: &str = "stale_user";
pub const CODE_NEVER_USED_USER: &str = "never_used_user";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";

/// Role path prefix owned by AWS services. Roles under it are managed outside
/// user control and are exempt from unused classification. `/service-role/`
/// (user-created service roles) is not covered by this prefix.
pub const SERVICE_LINKED_ROLE_PATH: &str = "/aws-service-role/";
