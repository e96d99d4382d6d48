//! CLI entry point for idleguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `idleguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use idleguard_app::{
    parse_report_json, run_audit, run_explain, run_markdown, runtime_error_report,
    serialize_report, verdict_exit_code, AuditInput, ExplainOutput,
};
use idleguard_provider::{FileInventory, Session};
use idleguard_settings::Overrides;
use idleguard_types::ReportEnvelope;

#[derive(Parser, Debug)]
#[command(
    name = "idleguard",
    version,
    about = "Unused AWS resource audit: security groups, IAM roles, IAM users"
)]
struct Cli {
    /// Path to idleguard config TOML.
    #[arg(long, default_value = "idleguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|strict or custom).
    #[arg(long)]
    profile: Option<String>,

    /// Override the unused-days threshold.
    #[arg(long)]
    unused_days: Option<u16>,

    /// Also report never-used resources inside the grace period.
    #[arg(long)]
    include_newly_created: bool,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// AWS named profile the inventory was collected under (recorded in the report).
    #[arg(long)]
    aws_profile: Option<String>,

    /// AWS region for the credential context.
    #[arg(long)]
    region: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify an inventory export and write report artifacts.
    Audit {
        /// Path to an `idleguard.inventory.v1` JSON export.
        #[arg(long)]
        inventory: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/idleguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/idleguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/idleguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "iam.unused_roles") or code (e.g., "stale_role") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Audit {
            ref inventory,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_audit(
            &cli,
            inventory.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_audit(
    cli: &Cli,
    inventory: Utf8PathBuf,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            profile: cli.profile.clone(),
            unused_days: cli.unused_days,
            include_newly_created: cli.include_newly_created.then_some(true),
            max_findings: cli.max_findings,
        };

        let session = match cli.aws_profile.as_deref() {
            Some(profile) => Some(match cli.region.as_deref() {
                Some(region) => Session::with_region(profile, region)?,
                None => Session::new(profile)?,
            }),
            None => None,
        };

        let provider = FileInventory::load(&inventory)
            .with_context(|| format!("load inventory: {}", inventory))?;

        let output = run_audit(
            &provider,
            AuditInput {
                config_text: &cfg_text,
                overrides,
                session: session.as_ref(),
            },
        )?;

        write_report_file(&report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = run_markdown(&output.report);
            write_text_file(&markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict.clone()))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(&report_out, &report);
            eprintln!("idleguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = run_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", idleguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                idleguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
