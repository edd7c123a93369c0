//! Built-in output templates
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

/// Name and source of each built-in template, sorted by name
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("docbook", include_str!("../templates/docbook.jinja")),
    ("html", include_str!("../templates/html.jinja")),
    ("markdown", include_str!("../templates/markdown.jinja")),
];

/// Names of the built-in template formats
pub fn builtin_formats() -> impl Iterator<Item = &'static str> {
    BUILTIN_TEMPLATES.iter().map(|(name, _)| *name)
}

/// Source of the built-in template `name`
pub fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
}
