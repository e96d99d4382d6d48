//! Report serialization, parsing, and renderable conversion.

use anyhow::Context;
use camino::Utf8Path;
use idleguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity, RenderableSubject,
    RenderableVerdictStatus,
};
use idleguard_types::{ReportEnvelope, ResourceKind, Severity, Verdict, SCHEMA_REPORT_V1};

/// Serialize a report to pretty JSON with a trailing newline.
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

/// Parse a report produced by a previous run, rejecting unknown schemas.
pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let report: ReportEnvelope = serde_json::from_str(text).context("parse report")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!(
            "unsupported report schema: {} (expected {})",
            report.schema,
            SCHEMA_REPORT_V1
        );
    }
    Ok(report)
}

pub fn write_report(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    let text = serialize_report(report)?;
    write_text(path, &text)
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}

/// Render a report as Markdown.
pub fn run_markdown(report: &ReportEnvelope) -> String {
    idleguard_render::render_markdown(&to_renderable(report))
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report
            .findings
            .iter()
            .map(|f| RenderableFinding {
                severity: match f.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                check_id: Some(f.check_id.clone()),
                code: f.code.clone(),
                message: f.message.clone(),
                subject: f.subject.as_ref().map(|s| RenderableSubject {
                    kind: match s.kind {
                        ResourceKind::SecurityGroup => "security_group".to_string(),
                        ResourceKind::IamRole => "iam_role".to_string(),
                        ResourceKind::IamUser => "iam_user".to_string(),
                    },
                    name: s.name.clone(),
                    arn: s.arn.clone(),
                }),
                help: f.help.clone(),
                url: f.url.clone(),
            })
            .collect(),
        data: RenderableData {
            unused_days: report.data.unused_days,
            include_newly_created: report.data.include_newly_created,
            groups_scanned: report.data.groups_scanned,
            roles_scanned: report.data.roles_scanned,
            users_scanned: report.data.users_scanned,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::runtime_error_report;

    #[test]
    fn report_round_trips_through_json() {
        let report = runtime_error_report("boom");
        let text = serialize_report(&report).expect("serialize");
        assert!(text.ends_with('\n'));

        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.verdict, report.verdict);
        assert_eq!(parsed.findings.len(), 1);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let report = runtime_error_report("boom");
        let text = serialize_report(&report)
            .expect("serialize")
            .replace(SCHEMA_REPORT_V1, "idleguard.report.v9");
        assert!(parse_report_json(&text).is_err());
    }

    #[test]
    fn markdown_includes_subject_and_verdict() {
        let mut report = runtime_error_report("boom");
        report.findings[0].subject = Some(idleguard_types::Subject {
            kind: ResourceKind::IamRole,
            name: "legacy-deploy".to_string(),
            arn: None,
        });
        let md = run_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("iam_role `legacy-deploy`"));
    }

    #[test]
    fn write_report_then_read_back() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = camino::Utf8PathBuf::from_path_buf(tmp.path().join("report.json"))
            .expect("utf8 path");
        let report = runtime_error_report("boom");
        write_report(&path, &report).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read back");
        assert!(parse_report_json(&text).is_ok());
    }
}
