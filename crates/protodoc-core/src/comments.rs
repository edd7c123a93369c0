//! Documentation comment extraction for schema items
//!
//! The host hands over each item's leading and trailing comment text with
//! the comment delimiters already removed. Only documentation comments are
//! kept: a block comment opened as `/**` or a line comment written as `///`
//! arrives with a leading `*` or `/`, anything else is an ordinary comment
//! and is dropped.
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

/// Marker that removes an item (and its subtree) from the documentation
pub const EXCLUDE_DIRECTIVE: &str = "@exclude";

/// Whether `@exclude` directives remove items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExclusionPolicy {
    /// Items marked `@exclude` are left out
    #[default]
    Honor,
    /// Directives are stripped from descriptions but nothing is left out
    Ignore,
}

/// A normalized description and its exclusion verdict
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description {
    pub text: String,
    pub excluded: bool,
}

/// Extract the description of one schema item from its raw comments.
///
/// The qualifying leading comment is followed directly by the qualifying
/// trailing comment, then the result is trimmed and checked for the
/// exclusion directive.
pub fn describe(leading: Option<&str>, trailing: Option<&str>, policy: ExclusionPolicy) -> Description {
    let mut text = String::new();
    for raw in [leading, trailing].into_iter().flatten() {
        if let Some(doc) = doc_comment_body(raw) {
            text.push_str(&doc);
        }
    }
    apply_exclusion(text.trim(), policy)
}

/// Strip the documentation marker and one leading space per line, or
/// `None` if the comment is not a documentation comment.
fn doc_comment_body(raw: &str) -> Option<String> {
    let body = raw.strip_prefix(['*', '/'])?;
    let lines: Vec<&str> = body
        .split('\n')
        .map(|line| line.strip_prefix(' ').unwrap_or(line))
        .collect();
    Some(lines.join("\n"))
}

/// Check already trimmed text for a leading `@exclude`.
///
/// The directive is removed from the text under either policy; only
/// [`ExclusionPolicy::Honor`] marks the item excluded.
pub fn apply_exclusion(text: &str, policy: ExclusionPolicy) -> Description {
    match text.strip_prefix(EXCLUDE_DIRECTIVE) {
        Some(rest) => Description {
            text: rest.trim().to_string(),
            excluded: policy == ExclusionPolicy::Honor,
        },
        None => Description {
            text: text.to_string(),
            excluded: false,
        },
    }
}
