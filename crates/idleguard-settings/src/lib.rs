//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CheckConfig, IdleguardConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `idleguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<IdleguardConfigV1> {
    let cfg: IdleguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profiles + overrides + per-check config).
pub fn resolve_config(
    cfg: IdleguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use idleguard_domain::policy::FailOn;
    use idleguard_types::{ids, Severity};

    #[test]
    fn empty_config_resolves_to_standard_profile() {
        let cfg = parse_config_toml("").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.profile, "standard");
        assert_eq!(resolved.effective.unused_days, 90);
        assert!(!resolved.effective.include_newly_created);
        assert_eq!(resolved.effective.fail_on, FailOn::Error);
        assert!(resolved
            .effective
            .check_policy(ids::CHECK_IAM_UNUSED_ROLES)
            .is_some());
    }

    #[test]
    fn strict_profile_escalates_severity_and_fail_on() {
        let cfg = parse_config_toml("profile = \"strict\"").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.fail_on, FailOn::Warning);
        assert!(resolved.effective.include_newly_created);
        let policy = resolved
            .effective
            .check_policy(ids::CHECK_IAM_UNUSED_USERS)
            .expect("enabled");
        assert_eq!(policy.severity, Severity::Error);
    }

    #[test]
    fn per_check_overrides_apply() {
        let toml = r#"
unused_days = 30

[checks."iam.unused_roles"]
severity = "error"
allow = ["ecsTaskExecutionRole*"]

[checks."ec2.unused_security_groups"]
enabled = false
"#;
        let cfg = parse_config_toml(toml).expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.effective.unused_days, 30);

        let roles = resolved
            .effective
            .check_policy(ids::CHECK_IAM_UNUSED_ROLES)
            .expect("enabled");
        assert_eq!(roles.severity, Severity::Error);
        assert_eq!(roles.allow, vec!["ecsTaskExecutionRole*".to_string()]);

        assert!(resolved
            .effective
            .check_policy(ids::CHECK_EC2_UNUSED_SECURITY_GROUPS)
            .is_none());
    }

    #[test]
    fn cli_overrides_win_over_file_config() {
        let cfg = parse_config_toml("unused_days = 30").expect("parse");
        let resolved = resolve_config(
            cfg,
            Overrides {
                unused_days: Some(180),
                include_newly_created: Some(true),
                ..Overrides::default()
            },
        )
        .expect("resolve");
        assert_eq!(resolved.effective.unused_days, 180);
        assert!(resolved.effective.include_newly_created);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let cfg = parse_config_toml("unused_days = 0").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).expect_err("zero days");
        assert!(err.to_string().contains("unused_days"));
    }

    #[test]
    fn bad_allow_glob_is_rejected() {
        let toml = r#"
[checks."iam.unused_roles"]
allow = ["role[unclosed"]
"#;
        let cfg = parse_config_toml(toml).expect("parse");
        let err = resolve_config(cfg, Overrides::default()).expect_err("bad glob");
        assert!(err.to_string().contains("invalid allow glob"));
    }

    #[test]
    fn unknown_severity_is_rejected() {
        let toml = r#"
[checks."iam.unused_users"]
severity = "fatal"
"#;
        let cfg = parse_config_toml(toml).expect("parse");
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }
}
