//! Template engine binding
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use crate::error::RenderError;
use crate::model::DocumentTree;
use crate::options::TemplateSource;
use crate::render::filters::TextFilter;
use minijinja::{context, AutoEscape, Environment};
use std::error::Error as _;

/// Renders a template against a document tree with a set of filters
pub trait TemplateEngine {
    fn render(
        &self,
        template: &TemplateSource,
        tree: &DocumentTree,
        filters: &[TextFilter],
    ) -> Result<String, RenderError>;
}

/// [`TemplateEngine`] backed by minijinja.
///
/// The tree's files are bound as `files` in the root scope. Filters run on
/// already-rendered text: inside `{% filter p %}...{% endfilter %}` the
/// engine renders the block body first and passes the result on. Output is
/// never escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaEngine;

impl TemplateEngine for MiniJinjaEngine {
    fn render(
        &self,
        template: &TemplateSource,
        tree: &DocumentTree,
        filters: &[TextFilter],
    ) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        if let Some(dir) = &template.include_dir {
            env.set_loader(minijinja::path_loader(dir.clone()));
        }
        for filter in filters {
            let apply = filter.apply;
            env.add_filter(filter.name, move |text: String| apply(&text));
        }

        let root = context! { files => tree.files() };
        env.render_named_str(&template.name, &template.source, root)
            .map_err(|err| locate(template, &err))
    }
}

/// Turn an engine error into a located render error.
///
/// A failure inside an included template surfaces wrapped in the error of
/// the `include` statement; the innermost engine error is the one located.
fn locate(template: &TemplateSource, err: &minijinja::Error) -> RenderError {
    let err = innermost(err);
    let partial = err
        .name()
        .filter(|name| *name != template.name)
        .map(str::to_string);

    let byte_offset = err.range().map(|range| range.start).unwrap_or(0);
    let source = match partial {
        None => Some(template.source.as_str()),
        Some(_) => err.template_source(),
    };
    let offset = source
        .and_then(|source| source.get(..byte_offset))
        .map(|prefix| prefix.chars().count())
        .unwrap_or(byte_offset);

    let message = match err.detail() {
        Some(detail) => format!("{}: {}", err.kind(), detail),
        None => err.kind().to_string(),
    };

    RenderError {
        template: template.name.clone(),
        partial,
        offset,
        message,
    }
}

fn innermost(err: &minijinja::Error) -> &minijinja::Error {
    let mut current = err;
    while let Some(inner) = current
        .source()
        .and_then(|source| source.downcast_ref::<minijinja::Error>())
    {
        current = inner;
    }
    current
}
