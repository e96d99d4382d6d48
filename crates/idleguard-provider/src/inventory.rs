use crate::{ProviderError, ResourceSearch, SecurityGroupQuery};
use camino::Utf8Path;
use idleguard_types::{AccountId, IamRole, IamUser, SecurityGroup};
use serde::Deserialize;

/// Stable schema identifier for inventory export files.
pub const SCHEMA_INVENTORY_V1: &str = "idleguard.inventory.v1";

/// On-disk shape of an inventory export.
#[derive(Debug, Deserialize)]
struct InventoryFileV1 {
    schema: String,
    account: String,
    #[serde(default)]
    security_groups: Vec<SecurityGroup>,
    #[serde(default)]
    roles: Vec<IamRole>,
    #[serde(default)]
    users: Vec<IamUser>,
}

/// A provider backed by an inventory export file.
///
/// Collectors dump account inventories (with usage/activity annotations) to
/// JSON; this provider serves searches from such a dump. Parsing and schema
/// validation happen once at load, before any search.
#[derive(Clone, Debug)]
pub struct FileInventory {
    account: AccountId,
    security_groups: Vec<SecurityGroup>,
    roles: Vec<IamRole>,
    users: Vec<IamUser>,
}

impl FileInventory {
    pub fn load(path: &Utf8Path) -> Result<Self, ProviderError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProviderError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::parse(path.as_str(), &text)
    }

    fn parse(path: &str, text: &str) -> Result<Self, ProviderError> {
        let file: InventoryFileV1 =
            serde_json::from_str(text).map_err(|e| ProviderError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        if file.schema != SCHEMA_INVENTORY_V1 {
            return Err(ProviderError::UnsupportedSchema(file.schema));
        }

        let account = AccountId::new(&file.account).map_err(|e| ProviderError::Malformed {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            account,
            security_groups: file.security_groups,
            roles: file.roles,
            users: file.users,
        })
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }
}

impl ResourceSearch for FileInventory {
    fn search_security_groups(
        &self,
        query: &SecurityGroupQuery,
    ) -> Result<Vec<SecurityGroup>, ProviderError> {
        let groups = self.security_groups.iter().cloned();
        if !query.include_usage {
            return Ok(groups
                .map(|mut g| {
                    g.in_use = None;
                    g
                })
                .collect());
        }
        Ok(groups
            .filter(|g| match query.in_use {
                Some(wanted) => g.in_use == Some(wanted),
                None => true,
            })
            .collect())
    }

    fn search_roles(&self, include_last_used: bool) -> Result<Vec<IamRole>, ProviderError> {
        Ok(self
            .roles
            .iter()
            .cloned()
            .map(|mut r| {
                if !include_last_used {
                    r.last_used = None;
                }
                r
            })
            .collect())
    }

    fn search_users(&self, include_activity: bool) -> Result<Vec<IamUser>, ProviderError> {
        Ok(self
            .users
            .iter()
            .cloned()
            .map(|mut u| {
                if !include_activity {
                    u.password_last_used_date = None;
                    u.login_profile = None;
                    for key in &mut u.access_keys {
                        key.last_used_date = None;
                    }
                }
                u
            })
            .collect())
    }
}
