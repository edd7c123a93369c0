//! Output rendering
//!
//! The finished document tree becomes one text blob, either serialized
//! directly as JSON or rendered through a template. Nothing is returned
//! unless rendering completes.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

pub mod engine;
pub mod filters;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use filters::{no_line_breaks, paragraph, TextFilter, TEXT_FILTERS};

use crate::error::Result;
use crate::model::DocumentTree;
use crate::options::OutputFormat;

/// Render `tree` in `format` with the default engine
pub fn render(tree: &DocumentTree, format: &OutputFormat) -> Result<String> {
    render_with(&MiniJinjaEngine, tree, format)
}

/// Render `tree` in `format` with a caller-supplied engine
pub fn render_with<E: TemplateEngine + ?Sized>(
    engine: &E,
    tree: &DocumentTree,
    format: &OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::RawTree => Ok(serde_json::to_string_pretty(tree)?),
        OutputFormat::Templated(template) => {
            tracing::debug!(template = %template.name, files = tree.len(), "Rendering template");
            Ok(engine.render(template, tree, TEXT_FILTERS)?)
        }
    }
}
