//! Display types for message fields
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

use serde::{Deserialize, Serialize};

/// Underlying kind of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Reference to a message, by bare name
    Message(String),
    /// Reference to a group, by bare name
    Group(String),
    /// Reference to an enum, by bare name
    Enum(String),
    Scalar(ScalarKind),
}

/// Scalar wire types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Bool,
    Bytes,
    String,
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Fixed32,
    Fixed64,
    Sfixed32,
    Sfixed64,
    /// A kind the renderer has no category for
    Unknown,
}

impl ScalarKind {
    /// Display category of the scalar
    pub fn category(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Bytes | ScalarKind::String => "string",
            ScalarKind::Double | ScalarKind::Float => "float",
            ScalarKind::Int32
            | ScalarKind::Int64
            | ScalarKind::Uint32
            | ScalarKind::Uint64
            | ScalarKind::Sint32
            | ScalarKind::Sint64
            | ScalarKind::Fixed32
            | ScalarKind::Fixed64
            | ScalarKind::Sfixed32
            | ScalarKind::Sfixed64 => "int",
            ScalarKind::Unknown => UNKNOWN_TYPE,
        }
    }
}

/// Cardinality of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Optional,
    Required,
    Repeated,
}

pub const UNKNOWN_TYPE: &str = "<unknown>";
const DATE_MARKER: &str = "date";
const DATE_CATEGORY: &str = "time";

/// How type names are turned into links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
    /// Target wrapped around scalar categories and the `array` word;
    /// `None` leaves them as plain text
    pub scalar_href: Option<String>,
    /// Prefix put before a referenced type's bare name to form its link
    pub reference_prefix: String,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            scalar_href: None,
            reference_prefix: "#".to_string(),
        }
    }
}

/// Maps a field's kind and cardinality to its display type
#[derive(Debug, Clone, Default)]
pub struct TypeRenderer {
    links: LinkStyle,
}

impl TypeRenderer {
    pub fn new(links: LinkStyle) -> Self {
        Self { links }
    }

    /// Render the display type of field `field_name`
    pub fn render(&self, field_name: &str, kind: &FieldKind, cardinality: Cardinality) -> String {
        let base = match kind {
            FieldKind::Message(name) | FieldKind::Group(name) | FieldKind::Enum(name) => {
                self.reference(name)
            }
            FieldKind::Scalar(scalar) => {
                if field_name.contains(DATE_MARKER) {
                    self.scalar(DATE_CATEGORY)
                } else if *scalar == ScalarKind::Unknown {
                    UNKNOWN_TYPE.to_string()
                } else {
                    self.scalar(scalar.category())
                }
            }
        };

        match cardinality {
            Cardinality::Required => base,
            Cardinality::Optional => format!("{}?", base),
            Cardinality::Repeated => format!("{} of {}", self.scalar("array"), base),
        }
    }

    fn scalar(&self, category: &str) -> String {
        match &self.links.scalar_href {
            Some(href) => format!("<a href=\"{}\">{}</a>", href, category),
            None => category.to_string(),
        }
    }

    fn reference(&self, name: &str) -> String {
        format!("<a href=\"{}{}\">{}</a>", self.links.reference_prefix, name, name)
    }
}

/// Final segment of a possibly qualified type name (`.pkg.Outer.Inner` -> `Inner`)
pub fn bare_name(type_name: &str) -> &str {
    type_name.rsplit('.').next().unwrap_or(type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TypeRenderer {
        TypeRenderer::default()
    }

    #[test]
    fn test_scalar_categories() {
        let r = plain();
        let render = |kind| r.render("value", &FieldKind::Scalar(kind), Cardinality::Required);
        assert_eq!(render(ScalarKind::Bool), "bool");
        assert_eq!(render(ScalarKind::Bytes), "string");
        assert_eq!(render(ScalarKind::String), "string");
        assert_eq!(render(ScalarKind::Double), "float");
        assert_eq!(render(ScalarKind::Float), "float");
        assert_eq!(render(ScalarKind::Sfixed64), "int");
        assert_eq!(render(ScalarKind::Uint32), "int");
        assert_eq!(render(ScalarKind::Unknown), "<unknown>");
    }

    #[test]
    fn test_date_override() {
        let r = plain();
        let ty = r.render("created_date", &FieldKind::Scalar(ScalarKind::Int32), Cardinality::Required);
        assert_eq!(ty, "time");
        let ty = r.render("update_dates", &FieldKind::Scalar(ScalarKind::Int64), Cardinality::Repeated);
        assert_eq!(ty, "array of time");
    }

    #[test]
    fn test_cardinality() {
        let r = plain();
        let string = FieldKind::Scalar(ScalarKind::String);
        assert_eq!(r.render("tags", &string, Cardinality::Repeated), "array of string");
        assert_eq!(r.render("nickname", &string, Cardinality::Optional), "string?");
        assert_eq!(r.render("name", &string, Cardinality::Required), "string");
    }

    #[test]
    fn test_references_link_bare_name() {
        let r = plain();
        let ty = r.render("owner", &FieldKind::Message("Person".into()), Cardinality::Optional);
        assert_eq!(ty, "<a href=\"#Person\">Person</a>?");
        let ty = r.render("update_date", &FieldKind::Enum("Status".into()), Cardinality::Required);
        assert_eq!(ty, "<a href=\"#Status\">Status</a>");
    }

    #[test]
    fn test_scalar_links() {
        let r = TypeRenderer::new(LinkStyle {
            scalar_href: Some("/docs/types".into()),
            reference_prefix: "/docs/messages#".into(),
        });
        let ty = r.render("ids", &FieldKind::Scalar(ScalarKind::Int32), Cardinality::Repeated);
        assert_eq!(ty, "<a href=\"/docs/types\">array</a> of <a href=\"/docs/types\">int</a>");
        let ty = r.render("group", &FieldKind::Group("Result".into()), Cardinality::Required);
        assert_eq!(ty, "<a href=\"/docs/messages#Result\">Result</a>");
    }

    #[test]
    fn test_bare_name() {
        assert_eq!(bare_name(".pkg.Outer.Inner"), "Inner");
        assert_eq!(bare_name("Plain"), "Plain");
    }
}
