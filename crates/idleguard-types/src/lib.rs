//! Stable DTOs and IDs used across the idleguard workspace.
//!
//! This crate is intentionally boring:
//! - resource snapshot models consumed by the classification engine
//! - data types for the emitted report
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod account;
pub mod explain;
pub mod ids;
pub mod model;
pub mod receipt;

pub use account::{AccountId, AccountIdError};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use model::{
    AccessKey, IamRole, IamUser, LoginProfile, PermissionsBoundary, RoleLastUsed, SecurityGroup,
};
pub use receipt::{
    AuditData, Finding, ReportEnvelope, ResourceKind, Severity, Subject, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
