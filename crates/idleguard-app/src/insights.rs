//! Direct queries for unused resources, without the report machinery.
//!
//! `Insights` is for callers that want lists, not findings: dashboards,
//! ad-hoc scripts, downstream tooling. The audit use case and `Insights`
//! share the same classification code.

use idleguard_domain::checks::{roles, security_groups, users};
use idleguard_domain::policy::DEFAULT_UNUSED_DAYS;
use idleguard_provider::{ProviderError, ResourceSearch, SecurityGroupQuery};
use idleguard_types::{IamRole, IamUser, SecurityGroup};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct Insights<P> {
    provider: P,
    unused_days: u16,
    now: Option<OffsetDateTime>,
}

impl<P: ResourceSearch> Insights<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            unused_days: DEFAULT_UNUSED_DAYS,
            now: None,
        }
    }

    pub fn with_threshold(mut self, unused_days: u16) -> Self {
        self.unused_days = unused_days;
        self
    }

    /// Pin the classification instant. Defaults to the wall clock per call.
    pub fn evaluated_at(mut self, now: OffsetDateTime) -> Self {
        self.now = Some(now);
        self
    }

    fn now(&self) -> OffsetDateTime {
        self.now.unwrap_or_else(OffsetDateTime::now_utc)
    }

    /// Security groups the provider reports as unreferenced.
    pub fn unused_security_groups(&self) -> Result<Vec<SecurityGroup>, ProviderError> {
        let groups = self.provider.search_security_groups(&SecurityGroupQuery {
            include_usage: true,
            in_use: Some(false),
        })?;
        // The provider already filtered; keep the predicate as the source of
        // truth so providers that ignore the filter still classify correctly.
        Ok(groups
            .into_iter()
            .filter(security_groups::is_unused)
            .collect())
    }

    /// Roles with no recorded activity inside the threshold window.
    pub fn unused_roles(&self, include_newly_created: bool) -> Result<Vec<IamRole>, ProviderError> {
        let now = self.now();
        let roles_found = self.provider.search_roles(true)?;
        Ok(roles_found
            .into_iter()
            .filter(|r| roles::is_unused(r, now, self.unused_days, include_newly_created))
            .collect())
    }

    /// Users none of whose credentials were exercised inside the threshold window.
    pub fn unused_users(&self, include_newly_created: bool) -> Result<Vec<IamUser>, ProviderError> {
        let now = self.now();
        let users_found = self.provider.search_users(true)?;
        Ok(users_found
            .into_iter()
            .filter(|u| users::is_unused(u, now, self.unused_days, include_newly_created))
            .collect())
    }
}
