//! The `audit` use case: pull inventory through a provider, classify, and
//! produce a report.

use anyhow::Context;
use idleguard_domain::model::Inventory;
use idleguard_provider::{ResourceSearch, SecurityGroupQuery, Session};
use idleguard_settings::{Overrides, ResolvedConfig};
use idleguard_types::{
    ids, AuditData, Finding, ReportEnvelope, Severity, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Credential context the inventory was collected under, when known.
    pub session: Option<&'a Session>,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the audit use case: parse config, fetch inventory, classify, produce report.
pub fn run_audit<P: ResourceSearch>(
    provider: &P,
    input: AuditInput<'_>,
) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        idleguard_settings::IdleguardConfigV1::default()
    } else {
        idleguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = idleguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    // Fetch everything with usage/activity annotations; the engine decides
    // what counts as unused.
    let security_groups = provider
        .search_security_groups(&SecurityGroupQuery {
            include_usage: true,
            in_use: None,
        })
        .context("search security groups")?;
    let roles = provider.search_roles(true).context("search roles")?;
    let users = provider.search_users(true).context("search users")?;

    let model = Inventory {
        security_groups,
        roles,
        users,
    };

    let domain_report = idleguard_domain::evaluate(&model, &resolved.effective, started_at);

    let mut data = domain_report.data;
    data.aws_profile = input.session.map(|s| s.profile_name().to_string());

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data,
    };

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}

/// Report emitted when the audit itself cannot run (bad config, unreadable
/// inventory). A broken run must never look like a clean pass.
pub fn runtime_error_report(message: &str) -> ReportEnvelope {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            subject: None,
            help: None,
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: AuditData {
            profile: "standard".to_string(),
            unused_days: idleguard_domain::policy::DEFAULT_UNUSED_DAYS,
            include_newly_created: false,
            aws_profile: None,
            groups_scanned: 0,
            roles_scanned: 0,
            users_scanned: 0,
            findings_total: 1,
            findings_emitted: 1,
            truncated_reason: None,
        },
    }
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "idleguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idleguard_provider::{FileInventory, ProviderError};
    use idleguard_test_util::{inventory_json, sample_group, sample_role, sample_user};

    fn provider_from(value: serde_json::Value) -> FileInventory {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = tmp.path().join("inventory.json");
        std::fs::write(&path, serde_json::to_vec(&value).expect("serialize"))
            .expect("write inventory");
        FileInventory::load(camino::Utf8Path::from_path(&path).expect("utf8 path"))
            .expect("load inventory")
    }

    #[test]
    fn empty_inventory_passes_with_defaults() {
        let provider = provider_from(inventory_json(vec![], vec![], vec![]));
        let output = run_audit(
            &provider,
            AuditInput {
                config_text: "",
                overrides: Overrides::default(),
                session: None,
            },
        )
        .expect("run_audit");

        assert_eq!(output.resolved_config.effective.profile, "standard");
        assert_eq!(output.report.verdict, Verdict::Pass);
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert!(output.report.findings.is_empty());
        assert!(output.report.data.aws_profile.is_none());
    }

    #[test]
    fn stale_resources_produce_warnings() {
        let provider = provider_from(inventory_json(
            vec![sample_group("old-web", "sg-0bbb", Some(false))],
            vec![sample_role(
                "old-deploy",
                None,
                "2020-03-15T00:00:00Z",
                Some("2021-01-02T08:30:00Z"),
            )],
            vec![sample_user("bob", "2020-05-18T00:00:00Z", None, None, vec![])],
        ));
        let output = run_audit(
            &provider,
            AuditInput {
                config_text: "",
                overrides: Overrides::default(),
                session: None,
            },
        )
        .expect("run_audit");

        assert_eq!(output.report.verdict, Verdict::Warn);
        assert_eq!(output.report.findings.len(), 3);
        assert_eq!(output.report.data.groups_scanned, 1);
        assert_eq!(output.report.data.roles_scanned, 1);
        assert_eq!(output.report.data.users_scanned, 1);
    }

    #[test]
    fn session_profile_lands_in_report_data() {
        let provider = provider_from(inventory_json(vec![], vec![], vec![]));
        let session = Session::new("audit-ro").expect("session");
        let output = run_audit(
            &provider,
            AuditInput {
                config_text: "",
                overrides: Overrides::default(),
                session: Some(&session),
            },
        )
        .expect("run_audit");

        assert_eq!(output.report.data.aws_profile.as_deref(), Some("audit-ro"));
    }

    #[test]
    fn provider_failure_propagates() {
        struct Failing;
        impl ResourceSearch for Failing {
            fn search_security_groups(
                &self,
                _query: &SecurityGroupQuery,
            ) -> Result<Vec<idleguard_types::SecurityGroup>, ProviderError> {
                Err(ProviderError::InvalidCredentials("expired token".into()))
            }
            fn search_roles(
                &self,
                _include_last_used: bool,
            ) -> Result<Vec<idleguard_types::IamRole>, ProviderError> {
                Ok(vec![])
            }
            fn search_users(
                &self,
                _include_activity: bool,
            ) -> Result<Vec<idleguard_types::IamUser>, ProviderError> {
                Ok(vec![])
            }
        }

        let err = run_audit(
            &Failing,
            AuditInput {
                config_text: "",
                overrides: Overrides::default(),
                session: None,
            },
        )
        .expect_err("provider failure");
        assert!(format!("{err:#}").contains("invalid credentials"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let provider = provider_from(inventory_json(vec![], vec![], vec![]));
        let err = run_audit(
            &provider,
            AuditInput {
                config_text: "unused_days = \"ninety\"",
                overrides: Overrides::default(),
                session: None,
            },
        )
        .expect_err("bad config");
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn runtime_error_report_fails_closed() {
        let report = runtime_error_report("read inventory: no such file");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].check_id, ids::CHECK_TOOL_RUNTIME);
        assert_eq!(report.findings[0].code, ids::CODE_RUNTIME_ERROR);
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
