use crate::model::Inventory;
use crate::policy::EffectiveConfig;
use idleguard_types::Finding;
use time::OffsetDateTime;

pub mod roles;
pub mod security_groups;
pub mod users;
mod utils;


pub fn run_all(
    model: &Inventory,
    cfg: &EffectiveConfig,
    now: OffsetDateTime,
    out: &mut Vec<Finding>,
) {
    security_groups::run(model, cfg, out);
    roles::run(model, cfg, now, out);
    users::run(model, cfg, now, out);
}
