//! Use case orchestration for idleguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, provider, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod insights;
mod render;

pub use audit::{run_audit, runtime_error_report, verdict_exit_code, AuditInput, AuditOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use insights::Insights;
pub use render::{
    parse_report_json, run_markdown, serialize_report, to_renderable, write_report, write_text,
};
