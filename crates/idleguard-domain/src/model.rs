use idleguard_types::{IamRole, IamUser, SecurityGroup};

/// The full candidate set for one classification run.
///
/// Assembled by the caller from provider results; the engine never mutates it.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    pub security_groups: Vec<SecurityGroup>,
    pub roles: Vec<IamRole>,
    pub users: Vec<IamUser>,
}

impl Inventory {
    pub fn is_empty(&self) -> bool {
        self.security_groups.is_empty() && self.roles.is_empty() && self.users.is_empty()
    }
}
