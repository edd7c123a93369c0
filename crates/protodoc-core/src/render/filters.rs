//! Text filters available to templates
//!
//! Filters are pure functions over text the engine has already rendered.
//! They hold no state, so nested and repeated use is safe.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use regex::Regex;
use std::sync::OnceLock;

static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

/// A named text transform exposed to templates
#[derive(Debug, Clone, Copy)]
pub struct TextFilter {
    pub name: &'static str,
    pub apply: fn(&str) -> String,
}

/// Every filter registered with the template engine.
///
/// `p` and `nobr` are the short names used by existing templates.
pub const TEXT_FILTERS: &[TextFilter] = &[
    TextFilter { name: "paragraph", apply: paragraph },
    TextFilter { name: "p", apply: paragraph },
    TextFilter { name: "no_line_breaks", apply: no_line_breaks },
    TextFilter { name: "nobr", apply: no_line_breaks },
];

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| {
        Regex::new(r"(\n|\r|\r\n)\s*(\n|\r|\r\n)").expect("paragraph break pattern is valid")
    })
}

/// Wrap blank-line separated paragraphs in `<p>` elements
pub fn paragraph(text: &str) -> String {
    let paragraphs: Vec<&str> = paragraph_break().split(text).collect();
    format!("<p>{}</p>", paragraphs.join("</p><p>"))
}

/// Remove every `\r\n`, then `\r`, then `\n`
pub fn no_line_breaks(text: &str) -> String {
    text.replace("\r\n", "").replace('\r', "").replace('\n', "")
}
