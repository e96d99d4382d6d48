//! Rendering utilities for audit report surfaces (Markdown today).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity, RenderableSubject,
    RenderableVerdictStatus,
};
