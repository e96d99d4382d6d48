//! The resource provider boundary.
//!
//! This crate is allowed to do filesystem IO. It defines the capability the
//! classification engine consumes (`ResourceSearch`), the credential context
//! (`Session`), and a file-backed provider reading inventory exports. Live
//! AWS queries are a provider concern that lives behind the same trait.

#![forbid(unsafe_code)]

mod inventory;
mod session;

use idleguard_types::{IamRole, IamUser, SecurityGroup};
use thiserror::Error;

pub use inventory::{FileInventory, SCHEMA_INVENTORY_V1};
pub use session::{Session, SessionError};

/// Provider-side failures. The engine propagates these unchanged; it never
/// retries or suppresses them.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("read inventory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed inventory {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("unsupported inventory schema: {0:?} (expected {SCHEMA_INVENTORY_V1:?})")]
    UnsupportedSchema(String),
}

/// Query for security groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SecurityGroupQuery {
    /// Attach the `in_use` usage annotation to each returned group.
    pub include_usage: bool,
    /// Keep only groups whose usage annotation matches. Only meaningful when
    /// `include_usage` is set; ignored otherwise.
    pub in_use: Option<bool>,
}

/// The capability the classification engine consumes, one search per
/// resource type.
///
/// Contract: an empty candidate set is an ordinary empty `Vec`, never an
/// error. Result order is the provider's order; callers do not re-sort.
pub trait ResourceSearch {
    fn search_security_groups(
        &self,
        query: &SecurityGroupQuery,
    ) -> Result<Vec<SecurityGroup>, ProviderError>;

    /// `include_last_used` attaches the role's last-activity annotation.
    fn search_roles(&self, include_last_used: bool) -> Result<Vec<IamRole>, ProviderError>;

    /// `include_activity` attaches password/login-profile/key activity
    /// annotations.
    fn search_users(&self, include_activity: bool) -> Result<Vec<IamUser>, ProviderError>;
}

impl<T: ResourceSearch + ?Sized> ResourceSearch for &T {
    fn search_security_groups(
        &self,
        query: &SecurityGroupQuery,
    ) -> Result<Vec<SecurityGroup>, ProviderError> {
        (**self).search_security_groups(query)
    }

    fn search_roles(&self, include_last_used: bool) -> Result<Vec<IamRole>, ProviderError> {
        (**self).search_roles(include_last_used)
    }

    fn search_users(&self, include_activity: bool) -> Result<Vec<IamUser>, ProviderError> {
        (**self).search_users(include_activity)
    }
}
