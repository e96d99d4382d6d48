use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Idleguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Threshold: {} days{}\n- Scanned: {} security groups, {} roles, {} users\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.unused_days,
        if report.data.include_newly_created {
            " (including newly created)"
        } else {
            ""
        },
        report.data.groups_scanned,
        report.data.roles_scanned,
        report.data.users_scanned,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        if let Some(subject) = &f.subject {
            out.push_str(&format!(
                "- [{}] `{}` / `{}` — {} ({} `{}`)\n",
                sev,
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message,
                subject.kind,
                subject.name
            ));
            if let Some(arn) = &subject.arn {
                out.push_str(&format!("  - arn: `{}`\n", arn));
            }
        } else {
            out.push_str(&format!(
                "- [{}] `{}` / `{}` — {}\n",
                sev,
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message
            ));
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}
