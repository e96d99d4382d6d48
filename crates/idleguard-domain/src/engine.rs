use crate::checks;
use crate::model::Inventory;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use idleguard_types::{AuditData, Finding, ResourceKind, Severity, Verdict};
use time::OffsetDateTime;

/// Classify the inventory at instant `now`.
///
/// Pure: identical inputs produce identical reports.
pub fn evaluate(model: &Inventory, cfg: &EffectiveConfig, now: OffsetDateTime) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(model, cfg, now, &mut findings);

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let verdict = compute_verdict(&emitted, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&emitted);

    let data = AuditData {
        profile: cfg.profile.clone(),
        unused_days: cfg.unused_days,
        include_newly_created: cfg.include_newly_created,
        aws_profile: None,
        groups_scanned: model.security_groups.len() as u32,
        roles_scanned: model.roles.len() as u32,
        users_scanned: model.users.len() as u32,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) subject kind (groups -> roles -> users; missing last)
    // 3) subject name (missing last)
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let kind_rank = |kind: ResourceKind| -> u8 {
        match kind {
            ResourceKind::SecurityGroup => 0,
            ResourceKind::IamRole => 1,
            ResourceKind::IamUser => 2,
        }
    };
    let (ak, an) = match &a.subject {
        Some(s) => (kind_rank(s.kind), s.name.as_str()),
        None => (u8::MAX, "~"),
    };
    let (bk, bn) = match &b.subject {
        Some(s) => (kind_rank(s.kind), s.name.as_str()),
        None => (u8::MAX, "~"),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(ak.cmp(&bk))
        .then(an.cmp(bn))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
